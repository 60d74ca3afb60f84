//! Prompt-assembly helpers for the Riposte SDK.
//!
//! The client core treats prompts as opaque strings; this crate is where
//! those strings get made. [`builder::InstructionBuilder`] produces one
//! markdown-ish instruction block, [`chain::FragmentChain`] lines several
//! [`fragment::PromptFragment`]s up into a full prompt. Reusable fragments
//! live in the `riposte-types` crate.

pub mod builder;
pub mod chain;
pub mod fragment;

pub use builder::InstructionBuilder;
pub use chain::FragmentChain;
pub use fragment::PromptFragment;
