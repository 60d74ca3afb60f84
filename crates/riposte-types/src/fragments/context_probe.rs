//! Prompt for the background context-inference call.

use riposte_prompt::{InstructionBuilder, PromptFragment};

/// Ask for a short outside-view profile of whoever wrote `input`.
///
/// The reply feeds [`BackgroundFragment`](crate::fragments::BackgroundFragment)
/// on a later generation call; it is advisory, so the instructions push for
/// specificity over completeness.
pub struct ContextProbeFragment<'a>(&'a str);

impl<'a> ContextProbeFragment<'a> {
    pub fn new(input: &'a str) -> Self {
        Self(input)
    }
}

impl PromptFragment for ContextProbeFragment<'_> {
    fn render(self) -> String {
        InstructionBuilder::new()
            .section("Task")
            .line(
                "Profile the author of the input below from the outside: what archetype \
                 are they, what state are they in, and where does the text read like it \
                 was posted?",
            )
            .rule("Be specific. Generic labels such as \"netizen\" or \"opponent\" are useless.")
            .rule("Omit the platform when the input gives no hint of it.")
            .rule("Answer with the profile label only, a dozen words at most. No markup.")
            .blank_line()
            .quoted("Input", self.0)
            .finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_probe_instructions() {
        let block = ContextProbeFragment::new("this game is art, you wouldn't get it").render();
        assert!(block.starts_with("# Task"));
        assert!(block.contains("profile label only"));
        assert!(block.contains("**Input**: \"this game is art, you wouldn't get it\""));
    }
}
