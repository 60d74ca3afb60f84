//! The output contract for streaming generation.
//!
//! This block is the producer side of the wire shape the incremental
//! extractor consumes: standalone JSON objects with no markdown and no
//! enclosing array. Changing the wording here risks changing what comes
//! down the stream; keep it in sync with the extractor's expectations.

use riposte_prompt::{InstructionBuilder, PromptFragment};

/// Streaming output rules plus a literal example line carrying `label`.
pub struct StreamFormatFragment<'a> {
    label: &'a str,
}

impl<'a> StreamFormatFragment<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl PromptFragment for StreamFormatFragment<'_> {
    fn render(self) -> String {
        InstructionBuilder::new()
            .section("Output Format")
            .rule("Raw JSON objects only, one per line, emitted as soon as each is ready.")
            .rule("No markdown, no code fences, no array brackets, no separators between objects.")
            .rule(format!(
                "Every object carries \"style\": \"{}\", a \"content\" string, and an \"attackPower\" number from 0 to 100.",
                self.label
            ))
            .blank_line()
            .example(format!(
                "{{\"style\": \"{}\", \"content\": \"...\", \"attackPower\": 88}}",
                self.label
            ))
            .finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_line_is_a_parsable_object() {
        let block = StreamFormatFragment::new("Brat").render();
        let example = block
            .lines()
            .last()
            .expect("fragment ends with the example line");
        let parsed: serde_json::Value = serde_json::from_str(example).unwrap();
        assert_eq!(parsed["style"], "Brat");
    }

    #[test]
    fn forbids_fences_and_arrays() {
        let block = StreamFormatFragment::new("Brat").render();
        assert!(block.contains("No markdown"));
        assert!(block.contains("no array brackets"));
    }
}
