//! # `riposte` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                | What it provides                                                              |
//! |----------------------|--------------------------------------------------------------------------------|
//! | **`riposte-core`**   | Provider-agnostic client: fallback chain, incremental extractor, pacing, errors |
//! | **`riposte-prompt`** | Ergonomic helpers for building and chaining prompt fragments                    |
//! | **`riposte-types`**  | Reusable fragments and the built-in response-style catalogue                    |
//! | **`riposte-gemini`** | Thin HTTP client for the Gemini *generateContent* API *(optional)*              |
//!
//! By default the crate re-exports everything including the Gemini backend;
//! disable default features to stay provider-agnostic and keep `reqwest`,
//! TLS, etc. out of your binary.
//!
//! ## What it does
//!
//! One call fans a prompt out against an ordered list of endpoints and model
//! identifiers, consumes a live token stream, recovers discrete records from
//! it before the stream ends, paces their delivery, and transparently
//! retries and falls back on transient failure. The caller sees either a
//! steady trickle of complete records or one terminal error, never a
//! half-parsed record.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use riposte::fallback::FallbackConfig;
//! use riposte::gemini::GeminiAdapterBuilder;
//! use riposte::service;
//! use riposte::types::Style;
//! use riposte::RiposteClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = GeminiAdapterBuilder::new_from_env().build()?;
//!     let client = RiposteClient::new(vec![backend], FallbackConfig::default())?;
//!
//!     let mut stream = service::stream_comebacks(
//!         &client,
//!         "my logic is flawless, you simply cannot follow it",
//!         Style::LogicTwist,
//!         None,
//!     );
//!     while let Some(record) = stream.next().await {
//!         let record = record?;
//!         println!("[{}] {}", record.style, record.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The `pub use` statements below forward the public API of the individual
//! crates so users can write `riposte::RiposteClient` instead of juggling
//! four separate dependencies.

pub use riposte_core::*;
pub use riposte_prompt as prompt;
pub use riposte_types as types;

#[cfg(feature = "gemini")]
pub use riposte_gemini as gemini;

pub mod service;
