//! Model identifiers used throughout the **riposte** workspace.
//!
//! The enum keeps application code free of literal model-name strings while
//! still allowing arbitrary names through [`Model::Custom`]. Each provider
//! crate maps the variants onto its own naming scheme (see
//! `riposte-gemini::model_map`), so the compiler flags a forgotten mapping
//! when a variant is added.

/// Universal identifier for a generation model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Gemini models (generateContent API).
    Gemini(GeminiModel),
    /// Fully qualified model name not covered by a dedicated enum. Use this
    /// for self-hosted, preview or proxy-renamed models.
    Custom(&'static str),
}

/// Models officially exercised against the Gemini back-end.
///
/// The list is deliberately short: these are the identifiers the default
/// fallback configuration rotates through, ordered fastest-and-cheapest last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    Flash25,
    FlashLiteLatest,
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}
