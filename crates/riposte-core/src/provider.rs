//! Provider traits implemented by transport backends.
//!
//! A **backend** turns [`GenerateParameters`] into a network call against a
//! concrete generation service and hands back raw text, either in one piece
//! or as a stream of fragments. Backends stay deliberately dumb: retrying,
//! extraction and pacing all live above them in
//! [`RiposteClient`](crate::client::RiposteClient), so a new transport only
//! has to implement these two traits.

use std::{future::Future, pin::Pin};

use futures_core::stream::Stream;

use crate::{error::Result, model::Model, record::OutputMode};

/// Everything a backend needs for one attempt: the prompt is already fully
/// assembled and opaque, the model has been chosen by the fallback
/// controller.
#[derive(Debug, Clone)]
pub struct GenerateParameters {
    pub model: Model,
    pub prompt: String,
    pub temperature: Option<f64>,
    pub output: OutputMode,
}

impl GenerateParameters {
    pub fn new(model: Model, prompt: impl Into<String>) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            temperature: None,
            output: OutputMode::Text,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }
}

/// Single round-trip: one request, the complete reply text.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so the trait stays
/// object-safe without pulling in `async_trait`.
pub trait GenerateProvider: Send + Sync {
    fn generate<'p>(
        &'p self,
        params: GenerateParameters,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>;
}

/// A provider that can deliver the reply **incrementally**.
///
/// The stream yields UTF-8 text fragments in arrival order. Fragment
/// boundaries carry no meaning; reassembly is the extractor's problem.
pub trait StreamingGenerateProvider: GenerateProvider {
    type Chunks<'s>: Stream<Item = Result<String>> + Send + 's
    where
        Self: 's;

    /// Start a streaming generation call.
    fn generate_stream(&self, params: GenerateParameters) -> Self::Chunks<'_>;
}
