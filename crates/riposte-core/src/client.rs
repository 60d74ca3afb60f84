//! Generic client that executes generation requests against a
//! [`FallbackChain`] of interchangeable backends.
//!
//! The client is **generic over the backend type `B`**, so any crate that
//! implements the provider traits plugs in without dynamic dispatch. It owns
//! the two request paths:
//!
//! * [`RiposteClient::stream_records`] – the streaming path: raw text
//!   fragments go through a per-attempt [`ObjectExtractor`], recovered
//!   records are paced by a [`Pacer`] and yielded as an async stream.
//! * [`RiposteClient::generate_one`] – the non-streaming, schema-constrained
//!   path returning exactly one [`Record`].
//!
//! Dropping the stream returned by `stream_records` cancels the session: the
//! transport read stops and no further records are delivered anywhere.

use std::pin::Pin;
use std::sync::Arc;

use async_stream::try_stream;
use futures_core::stream::Stream;
use futures_util::{pin_mut, StreamExt};
use tracing::warn;

use crate::{
    error::{FailureKind, Result, RiposteError},
    extract::{first_balanced_object, strip_code_fences, ObjectExtractor},
    fallback::{Advance, FallbackChain, FallbackConfig},
    model::Model,
    pace::Pacer,
    provider::{GenerateParameters, GenerateProvider, StreamingGenerateProvider},
    record::{GenerationRequest, OutputMode, Record, RecordDraft},
    schema_util,
};

/// A client bound to an ordered list of backends sharing one fallback
/// configuration.
///
/// Cloning is cheap (clones share the chain), so the same client can serve a
/// foreground generation and a background context probe concurrently; each
/// request gets its own retry state and stream buffer.
#[derive(Debug)]
pub struct RiposteClient<B> {
    chain: Arc<FallbackChain<B>>,
}

impl<B> Clone for RiposteClient<B> {
    fn clone(&self) -> Self {
        Self {
            chain: Arc::clone(&self.chain),
        }
    }
}

impl<B> RiposteClient<B> {
    /// Create a client over `backends`, tried in order.
    pub fn new(backends: Vec<B>, config: FallbackConfig) -> Result<Self> {
        Ok(Self {
            chain: Arc::new(FallbackChain::new(backends, config)?),
        })
    }

    /// Access the underlying chain (e.g. to inspect the configured models).
    pub fn chain(&self) -> &FallbackChain<B> {
        &self.chain
    }
}

impl<B> RiposteClient<B>
where
    B: GenerateProvider,
{
    /// Run a plain-text, non-streaming request through the fallback chain and
    /// return the reply verbatim.
    pub async fn generate_text(&self, request: GenerationRequest) -> Result<String> {
        self.chain
            .run(|backend, model| {
                let params = build_params(model, &request);
                Box::pin(async move { backend.generate(params).await })
            })
            .await
    }

    /// Run a schema-constrained, non-streaming request and parse exactly one
    /// record out of the reply.
    ///
    /// The reply is defensively stripped of markdown code fences; if it still
    /// fails to parse as a whole, the first balanced `{...}` span is tried
    /// before the attempt counts as failed and the chain advances.
    pub async fn generate_one(&self, request: GenerationRequest) -> Result<Record> {
        let schema = schema_util::single_record_schema();
        let draft = self
            .chain
            .run(|backend, model| {
                let params = build_params(model, &request).with_output(OutputMode::Json {
                    schema: schema.clone(),
                });
                Box::pin(async move {
                    let text = backend.generate(params).await?;
                    parse_single_record(&text)
                })
            })
            .await?;
        Ok(draft.into_record())
    }
}

impl<B> RiposteClient<B>
where
    B: StreamingGenerateProvider + 'static,
{
    /// Open a streaming generation session and yield records as they are
    /// recovered from the live token stream.
    ///
    /// Every attempt gets a fresh extractor scoped to that attempt. When a
    /// stream dies mid-object the whole attempt is retried on the next
    /// (model, transport) pair, and records already delivered by the failed
    /// attempt **may be emitted again** with fresh identifiers; consumers
    /// replace-on-retry or tolerate duplicates. A stream that completes
    /// cleanly ends the session even if it produced zero records; an
    /// exhausted chain terminates the stream with
    /// [`RiposteError::Exhausted`] as its final item.
    pub fn stream_records(
        &self,
        request: GenerationRequest,
    ) -> Pin<Box<dyn Stream<Item = Result<Record>> + Send + 'static>> {
        let chain = Arc::clone(&self.chain);
        Box::pin(try_stream! {
            let mut last_err: Option<RiposteError> = None;

            for backend in chain.backends() {
                let mut session = chain.session();
                let mut next_client = false;
                while !next_client {
                    let model = chain.model_at(session.model_index()).clone();
                    let params = build_params(&model, &request);

                    let mut extractor = ObjectExtractor::new();
                    let mut pacer = Pacer::default();
                    let mut failure: Option<RiposteError> = None;

                    {
                        let stream = backend.generate_stream(params);
                        pin_mut!(stream);
                        while let Some(chunk) = stream.next().await {
                            match chunk {
                                Ok(text) => {
                                    for record in extractor.feed(&text) {
                                        pacer.ready().await;
                                        yield record;
                                    }
                                }
                                Err(err) => {
                                    failure = Some(err);
                                    break;
                                }
                            }
                        }
                    }

                    let err = match failure {
                        // Clean end of stream finishes the session, records or not.
                        None => return,
                        Some(err) => err,
                    };

                    match err.failure_kind() {
                        FailureKind::Fatal => {
                            return Err(err)?;
                        }
                        FailureKind::Transient => {
                            warn!(?model, error = %err, "stream attempt failed, switching transport client");
                            last_err = Some(err);
                            next_client = true;
                        }
                        FailureKind::RateLimited => match session.on_rate_limited() {
                            Advance::NextModel => {
                                warn!(?model, error = %err, "rate limited, advancing model");
                            }
                            Advance::Backoff(delay) => {
                                warn!(?model, error = %err, ?delay, "rate limited, backing off");
                                tokio::time::sleep(delay).await;
                            }
                            Advance::GiveUp => {
                                warn!(?model, error = %err, "attempt budget spent, switching transport client");
                                last_err = Some(err);
                                next_client = true;
                            }
                        },
                    }
                }
            }

            if let Some(err) = last_err {
                warn!(error = %err, "all transport clients and models exhausted");
            }
            return Err(RiposteError::Exhausted)?;
        })
    }
}

fn build_params(model: &Model, request: &GenerationRequest) -> GenerateParameters {
    let params = GenerateParameters::new(model.clone(), request.prompt.clone())
        .with_output(request.output.clone());
    match request.temperature {
        Some(temperature) => params.with_temperature(temperature),
        None => params,
    }
}

fn parse_single_record(text: &str) -> Result<RecordDraft> {
    let cleaned = strip_code_fences(text);
    if let Ok(draft) = serde_json::from_str::<RecordDraft>(&cleaned) {
        return Ok(draft);
    }
    let span = first_balanced_object(&cleaned)
        .ok_or_else(|| RiposteError::Format("no parsable object in response".into()))?;
    serde_json::from_str::<RecordDraft>(span)
        .map_err(|err| RiposteError::Format(format!("response is not a valid record: {err}")))
}
