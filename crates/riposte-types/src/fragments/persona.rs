//! The persona block that opens every generation prompt.
//!
//! A persona is just a label plus instruction text; the built-in catalogue
//! in [`crate::styles`] provides both, but callers with their own personas
//! can use [`StyleFragment::new`] with arbitrary strings.

use riposte_prompt::{InstructionBuilder, PromptFragment};

use crate::styles::Style;

/// Persona text and the label records generated under it should carry.
pub struct StyleFragment<'a> {
    label: &'a str,
    persona: &'a str,
}

impl<'a> StyleFragment<'a> {
    pub fn new(label: &'a str, persona: &'a str) -> Self {
        Self { label, persona }
    }
}

impl StyleFragment<'static> {
    /// Fragment for a catalogue style.
    pub fn for_style(style: Style) -> Self {
        Self {
            label: style.label(),
            persona: style.persona(),
        }
    }
}

impl PromptFragment for StyleFragment<'_> {
    fn render(self) -> String {
        InstructionBuilder::new()
            .section("Persona")
            .line(self.persona)
            .quoted("Style Label", self.label)
            .finalize()
    }
}
