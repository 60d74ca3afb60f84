//! The task block of a single-record regeneration prompt.

use riposte_prompt::{InstructionBuilder, PromptFragment};

/// Ask for a sharpened rewrite of one previously generated response.
///
/// `label` is the label of the record being replaced (free-form, since it
/// travelled through the wire once already) and is echoed verbatim so the
/// rewrite stays in the same style.
pub struct RewriteFragment<'a> {
    input: &'a str,
    label: &'a str,
    original: &'a str,
}

impl<'a> RewriteFragment<'a> {
    pub fn new(input: &'a str, label: &'a str, original: &'a str) -> Self {
        Self { input, label, original }
    }
}

impl PromptFragment for RewriteFragment<'_> {
    fn render(self) -> String {
        InstructionBuilder::new()
            .section("Task")
            .rule("Rewrite and sharpen the original response below: better wording, harder landing.")
            .rule(format!(
                "Keep the persona strictly, and keep the style label \"{}\" unchanged.",
                self.label
            ))
            .rule("One sentence maximum.")
            .blank_line()
            .quoted("Original Response", self.original)
            .quoted("Input", self.input)
            .blank_line()
            .line("Respond with a single JSON object, not an array.")
            .finalize()
    }
}
