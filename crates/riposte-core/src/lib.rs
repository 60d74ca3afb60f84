//! Provider-agnostic core of the **Riposte** SDK.
//!
//! The crate owns everything that does not touch the network:
//!
//! * [`record`] – the unit of output ([`record::Record`]) plus the caller-facing
//!   [`record::GenerationRequest`].
//! * [`extract`] – the incremental extractor that recovers complete records
//!   from an arbitrary stream of text fragments.
//! * [`backoff`] / [`fallback`] – the retry policy and the controller that
//!   walks an ordered list of transport backends and model identifiers.
//! * [`pace`] – the delivery pacer that keeps downstream consumers from being
//!   flooded when several records arrive in one burst.
//! * [`client`] – the generic [`RiposteClient`] tying the pieces together into
//!   the streaming and single-record request paths.
//!
//! Transport backends (e.g. `riposte-gemini`) implement the traits in
//! [`provider`] and plug into the same client unchanged.

pub mod backoff;
pub mod client;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod model;
pub mod pace;
pub mod provider;
pub mod record;
pub mod schema_util;

pub use client::RiposteClient;
