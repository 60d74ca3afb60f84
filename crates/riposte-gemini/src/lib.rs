mod adapter;
mod model_map;
mod provider_impl_generate;
mod provider_impl_generate_stream;

pub use adapter::{GeminiAdapter, GeminiAdapterBuilder};
pub mod api_v1beta;
mod client;
pub mod error;
