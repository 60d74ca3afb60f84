//! The data model shared by every request path: the caller-facing
//! [`GenerationRequest`], the emitted [`Record`], and the wire-level
//! [`RecordDraft`] the extractor and the single-record runner parse.
//!
//! A [`Record`] only exists once a complete, syntactically valid object has
//! been recovered from the service; partial or malformed payloads never
//! leave the parsing layer. Identifiers are minted locally at creation time
//! (the service supplies none) and are never reused.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One structured unit of generated output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Opaque identifier, freshly minted per record by this client.
    pub id: String,
    /// Short free-form label naming the response style.
    pub style: String,
    /// The generated body text.
    pub content: String,
    /// Intensity score, clamped to `0..=100`.
    pub attack_power: u8,
    /// Optional reasoning supplied by the model.
    pub explanation: Option<String>,
    /// Optional source citations.
    pub sources: Vec<SourceRef>,
}

/// A single (title, reference-uri) citation attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SourceRef {
    pub title: String,
    pub uri: String,
}

/// The shape a record takes on the wire, before an identifier is assigned.
///
/// `style` and `content` are mandatory; everything else is tolerated when
/// missing. Doubles as the schema source for the schema-constrained
/// single-record path (see [`crate::schema_util`]).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub style: String,
    pub content: String,
    #[schemars(required)]
    pub attack_power: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<SourceRef>>,
}

impl RecordDraft {
    /// Promote the draft to a [`Record`], minting a fresh identifier and
    /// clamping the score into `0..=100`.
    pub fn into_record(self) -> Record {
        Record {
            id: Uuid::new_v4().to_string(),
            style: self.style,
            content: self.content,
            attack_power: self.attack_power.map(|p| p.clamp(0.0, 100.0) as u8).unwrap_or(0),
            explanation: self.explanation,
            sources: self.sources.unwrap_or_default(),
        }
    }
}

/// What a caller asks for. The prompt is opaque to the client; assembling it
/// is the business of `riposte-prompt` / `riposte-types` (or the caller).
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: Option<f64>,
    /// Output-shape hint forwarded to the provider.
    pub output: OutputMode,
    /// Advisory only: the runners never enforce it, but prompt builders use
    /// it and callers may size buffers with it.
    pub expected_records: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            output: OutputMode::Text,
            expected_records: None,
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

    pub fn with_expected_records(mut self, count: u32) -> Self {
        self.expected_records = Some(count);
        self
    }
}

/// Requested response shape.
#[derive(Debug, Clone, Default)]
pub enum OutputMode {
    /// Free-running text; the streaming path extracts records out of it.
    #[default]
    Text,
    /// One structured object constrained by the given JSON schema.
    Json { schema: serde_json::Value },
}
