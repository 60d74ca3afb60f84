//! Reusable prompt fragments and the built-in response-style catalogue.
//!
//! Everything here renders to plain instruction text via
//! [`riposte_prompt::PromptFragment`]; nothing in this crate touches the
//! network or the client core.

pub mod fragments;
pub mod styles;

pub use styles::Style;
