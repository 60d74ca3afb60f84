use riposte_core::provider::GenerateParameters;
use riposte_core::record::OutputMode;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;

use super::common::UsageMetadata;
use super::schema::to_gemini_schema;

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            generation_config: None,
        }
    }
}

impl From<GenerateParameters> for GenerateContentRequest {
    fn from(params: GenerateParameters) -> Self {
        let mut config = GenerationConfig::default();
        if let Some(temperature) = params.temperature {
            config = config.temperature(temperature);
        }
        config = match params.output {
            OutputMode::Text => config.response_mime_type("text/plain".to_owned()),
            OutputMode::Json { schema } => config
                .response_mime_type("application/json".to_owned())
                .response_schema(to_gemini_schema(&schema)),
        };

        Self {
            contents: vec![Content::user(params.prompt)],
            generation_config: Some(config),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

impl_builder_methods!(
    GenerationConfig,
    temperature: f64,
    response_mime_type: String,
    response_schema: serde_json::Value
);

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_owned()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The outermost object returned for a non-streaming call and, field for
/// field, the shape of every SSE chunk of a streaming call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if there is one.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut out = String::new();
        for part in &content.parts {
            if let Some(text) = &part.text {
                out.push_str(text);
            }
        }
        Some(out)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<FinishReason>,
    #[serde(default)]
    pub index: i64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Other,
    #[serde(other)]
    Unrecognized,
}

#[cfg(test)]
mod tests {
    use super::*;
    use riposte_core::model::{GeminiModel, Model};

    #[test]
    fn deserializes_a_complete_response() {
        let raw = r#"{
            "candidates": [{
                "content": { "role": "model", "parts": [{"text": "{\"style\":\"A\""}, {"text": ",\"content\":\"x\"}"}] },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 34, "totalTokenCount": 46 },
            "modelVersion": "gemini-2.5-flash"
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"style\":\"A\",\"content\":\"x\"}"));
        assert_eq!(response.candidates[0].finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.usage_metadata.unwrap().total_token_count, 46);
    }

    #[test]
    fn tolerates_sparse_streaming_chunks() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]}}]}"#)
                .unwrap();
        assert_eq!(response.text().as_deref(), Some("hi"));

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.text().is_none());
    }

    #[test]
    fn unknown_finish_reasons_do_not_break_parsing() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"finishReason":"BLOCKLIST"}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.candidates[0].finish_reason,
            Some(FinishReason::Unrecognized)
        );
    }

    #[test]
    fn text_request_sets_plain_mime_type() {
        let params = GenerateParameters::new(Model::Gemini(GeminiModel::Flash25), "roast me")
            .with_temperature(1.3);
        let request: GenerateContentRequest = params.into();

        let config = request.generation_config.unwrap();
        assert_eq!(config.temperature, Some(1.3));
        assert_eq!(config.response_mime_type.as_deref(), Some("text/plain"));
        assert!(config.response_schema.is_none());
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
    }

    #[test]
    fn json_request_ships_a_converted_schema() {
        let params = GenerateParameters::new(Model::Gemini(GeminiModel::Flash25), "rewrite")
            .with_output(OutputMode::Json {
                schema: riposte_core::schema_util::single_record_schema(),
            });
        let request: GenerateContentRequest = params.into();

        let config = request.generation_config.unwrap();
        assert_eq!(
            config.response_mime_type.as_deref(),
            Some("application/json")
        );
        let schema = config.response_schema.unwrap();
        assert_eq!(schema["type"], "OBJECT");
    }

    #[test]
    fn request_serialization_omits_unset_fields() {
        let request = GenerateContentRequest::new(vec![Content::user("hi")]);
        let raw = serde_json::to_string(&request).unwrap();
        assert!(!raw.contains("generationConfig"));
        assert!(raw.contains(r#""role":"user""#));
    }
}
