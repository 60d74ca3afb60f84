//! High-level operations composing prompt assembly with the client core.
//!
//! Three calls, mirroring what an application actually does:
//!
//! * [`stream_comebacks`] – the main path: stream a handful of stylized
//!   responses to a user-supplied input.
//! * [`regenerate`] – replace one previously generated record with a
//!   sharpened rewrite in the same style.
//! * [`infer_context`] – background probe distilling a short profile of the
//!   input's author, usable as background on a later generation call.
//!
//! All three run through the same fallback machinery; they differ only in
//! prompt assembly and output handling.

use std::pin::Pin;

use futures_core::stream::Stream;
use tracing::debug;

use riposte_core::error::Result;
use riposte_core::provider::{GenerateProvider, StreamingGenerateProvider};
use riposte_core::record::{GenerationRequest, Record};
use riposte_core::RiposteClient;
use riposte_prompt::FragmentChain;
use riposte_types::fragments::{
    BackgroundFragment, ContextProbeFragment, RewriteFragment, StreamFormatFragment,
    StyleFragment, TaskFragment,
};
use riposte_types::Style;

/// Sampling temperature for generation calls.
pub const GENERATION_TEMPERATURE: f64 = 1.3;
/// Cooler temperature for the context probe, which wants a stable read.
pub const CONTEXT_TEMPERATURE: f64 = 0.7;
/// How many responses one streaming session asks for.
pub const DEFAULT_RESPONSE_COUNT: u32 = 5;

/// Inputs shorter than this are not worth profiling.
const MIN_CONTEXT_INPUT_CHARS: usize = 5;

/// Stream stylized responses to `input`, optionally biased by a background
/// profile (see [`infer_context`]).
///
/// Dropping the returned stream cancels the session.
pub fn stream_comebacks<B>(
    client: &RiposteClient<B>,
    input: &str,
    style: Style,
    background: Option<&str>,
) -> Pin<Box<dyn Stream<Item = Result<Record>> + Send + 'static>>
where
    B: StreamingGenerateProvider + 'static,
{
    let mut chain = FragmentChain::new().with(StyleFragment::for_style(style));
    if let Some(profile) = background {
        chain = chain.with(BackgroundFragment::new(profile));
    }
    let prompt = chain
        .with(TaskFragment::new(input, style.label(), DEFAULT_RESPONSE_COUNT))
        .with(StreamFormatFragment::new(style.label()))
        .build();

    client.stream_records(
        GenerationRequest::new(prompt)
            .with_temperature(GENERATION_TEMPERATURE)
            .with_expected_records(DEFAULT_RESPONSE_COUNT),
    )
}

/// Replace `previous` with a sharpened rewrite of the same style.
///
/// The persona is resolved from the record's label so a rewrite keeps the
/// voice it was born with; the label itself is echoed verbatim.
pub async fn regenerate<B>(
    client: &RiposteClient<B>,
    input: &str,
    previous: &Record,
    background: Option<&str>,
) -> Result<Record>
where
    B: GenerateProvider,
{
    let style = Style::from_label(&previous.style);
    let mut chain =
        FragmentChain::new().with(StyleFragment::new(&previous.style, style.persona()));
    if let Some(profile) = background {
        chain = chain.with(BackgroundFragment::new(profile));
    }
    let prompt = chain
        .with(RewriteFragment::new(input, &previous.style, &previous.content))
        .build();

    client
        .generate_one(GenerationRequest::new(prompt).with_temperature(GENERATION_TEMPERATURE))
        .await
}

/// Distill a short profile of the author of `input`.
///
/// Best-effort: inputs too short to profile and fully exhausted fallback
/// chains both come back as an empty profile rather than an error. A missing
/// profile only costs response sharpness.
pub async fn infer_context<B>(client: &RiposteClient<B>, input: &str) -> String
where
    B: GenerateProvider,
{
    let trimmed = input.trim();
    if trimmed.chars().count() < MIN_CONTEXT_INPUT_CHARS {
        return String::new();
    }

    let prompt = FragmentChain::new()
        .with(ContextProbeFragment::new(trimmed))
        .build();
    let request = GenerationRequest::new(prompt).with_temperature(CONTEXT_TEMPERATURE);

    match client.generate_text(request).await {
        Ok(profile) => profile.trim().to_owned(),
        Err(err) => {
            debug!(error = %err, "context inference failed, continuing without a profile");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use riposte_core::error::RiposteError;
    use riposte_core::fallback::FallbackConfig;
    use riposte_core::provider::GenerateParameters;
    use std::{future::Future, sync::Mutex};

    #[derive(Default)]
    struct CapturingBackend {
        reply: Mutex<Option<Result<String>>>,
        chunks: Mutex<Vec<Result<String>>>,
        last_prompt: Mutex<Option<String>>,
    }

    impl CapturingBackend {
        fn with_reply(reply: Result<String>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                ..Self::default()
            }
        }

        fn with_chunks(chunks: Vec<Result<String>>) -> Self {
            Self {
                chunks: Mutex::new(chunks),
                ..Self::default()
            }
        }

        fn prompt(&self) -> String {
            self.last_prompt
                .lock()
                .unwrap()
                .clone()
                .expect("backend was never called")
        }
    }

    impl GenerateProvider for CapturingBackend {
        fn generate<'p>(
            &'p self,
            params: GenerateParameters,
        ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
            *self.last_prompt.lock().unwrap() = Some(params.prompt);
            let reply = self
                .reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(RiposteError::Format("no scripted reply".into())));
            Box::pin(async move { reply })
        }
    }

    impl StreamingGenerateProvider for CapturingBackend {
        type Chunks<'s> = Pin<Box<dyn Stream<Item = Result<String>> + Send + 's>>;

        fn generate_stream(&self, params: GenerateParameters) -> Self::Chunks<'_> {
            *self.last_prompt.lock().unwrap() = Some(params.prompt);
            let chunks = std::mem::take(&mut *self.chunks.lock().unwrap());
            Box::pin(futures_util::stream::iter(chunks))
        }
    }

    fn client(backend: CapturingBackend) -> RiposteClient<CapturingBackend> {
        RiposteClient::new(vec![backend], FallbackConfig::default()).unwrap()
    }

    fn previous_record() -> Record {
        Record {
            id: "prior".into(),
            style: "Brat".into(),
            content: "a weak comeback".into(),
            attack_power: 12,
            explanation: None,
            sources: vec![],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stream_comebacks_assembles_the_full_prompt() {
        let client = client(CapturingBackend::with_chunks(vec![Ok(
            r#"{"style":"Logic Twist","content":"c","attackPower":70}"#.to_owned(),
        )]));

        let records: Vec<_> = stream_comebacks(&client, "my logic is flawless", Style::LogicTwist, Some("tired debater"))
            .collect()
            .await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().style, "Logic Twist");

        let prompt = client.chain().backends()[0].prompt();
        assert!(prompt.contains("# Persona"));
        assert!(prompt.contains("**Background Profile**: \"tired debater\""));
        assert!(prompt.contains("**Input**: \"my logic is flawless\""));
        assert!(prompt.contains("# Output Format"));
        assert!(prompt.contains("Example Output:"));
    }

    #[tokio::test]
    async fn regenerate_keeps_the_previous_label() {
        let client = client(CapturingBackend::with_reply(Ok(
            r#"{"style":"Brat","content":"a sharper comeback","attackPower":77}"#.to_owned(),
        )));

        let record = regenerate(&client, "you started it", &previous_record(), None)
            .await
            .unwrap();

        assert_eq!(record.content, "a sharper comeback");
        let prompt = client.chain().backends()[0].prompt();
        assert!(prompt.contains("**Style Label**: \"Brat\""));
        assert!(prompt.contains("**Original Response**: \"a weak comeback\""));
    }

    #[tokio::test]
    async fn infer_context_skips_trivial_inputs() {
        let client = client(CapturingBackend::with_reply(Ok("unused".to_owned())));

        assert_eq!(infer_context(&client, "  ok  ").await, "");
        // The backend must not have been consulted at all.
        assert!(client.chain().backends()[0].last_prompt.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn infer_context_trims_the_profile() {
        let client = client(CapturingBackend::with_reply(Ok(
            "  overconfident keyboard tactician \n".to_owned(),
        )));

        let profile = infer_context(&client, "a sufficiently long input").await;
        assert_eq!(profile, "overconfident keyboard tactician");
    }

    #[tokio::test(start_paused = true)]
    async fn infer_context_failure_is_an_empty_profile() {
        let client = client(CapturingBackend::with_reply(Err(RiposteError::Backend(
            "connection refused".into(),
        ))));

        assert_eq!(infer_context(&client, "a sufficiently long input").await, "");
    }
}
