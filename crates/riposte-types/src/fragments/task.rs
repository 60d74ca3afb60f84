//! The task block of a streaming generation prompt.

use riposte_prompt::{InstructionBuilder, PromptFragment};

/// What to produce: `count` unique responses to `input` under `label`.
pub struct TaskFragment<'a> {
    input: &'a str,
    label: &'a str,
    count: u32,
}

impl<'a> TaskFragment<'a> {
    pub fn new(input: &'a str, label: &'a str, count: u32) -> Self {
        Self { input, label, count }
    }
}

impl PromptFragment for TaskFragment<'_> {
    fn render(self) -> String {
        InstructionBuilder::new()
            .section("Task")
            .rule(format!(
                "Generate {} unique responses matching the persona, each labelled \"{}\".",
                self.count, self.label
            ))
            .rule("Respond to the specific content of the input, never with generic filler.")
            .rule("If the input is obvious bait, mock the performance rather than the claim.")
            .rule("One sentence per response. No lists, no preamble.")
            .blank_line()
            .quoted("Input", self.input)
            .finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_count_label_and_input() {
        let block = TaskFragment::new("my logic is flawless", "Logic Twist", 5).render();
        assert!(block.contains("1. Generate 5 unique responses"));
        assert!(block.contains("labelled \"Logic Twist\""));
        assert!(block.contains("**Input**: \"my logic is flawless\""));
    }
}
