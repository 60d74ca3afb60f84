//! Builder-style helper for constructing **instruction blocks**.
//!
//! Generation prompts in this workspace follow one house shape: a heading,
//! a numbered rule list, a few `**Key**: value` lines, sometimes a literal
//! example line. Writing that out with `format!` every time is tedious and
//! drifts; `InstructionBuilder` keeps the syntax in one place. Every method
//! returns `self`, enabling call-chaining:
//!
//! ```rust
//! use riposte_prompt::builder::InstructionBuilder;
//!
//! let block = InstructionBuilder::new()
//!     .section("Task")
//!     .rule("Answer in one sentence.")
//!     .rule("No preamble.")
//!     .blank_line()
//!     .quoted("Input", "hello there")
//!     .finalize();
//!
//! assert!(block.starts_with("# Task"));
//! assert!(block.contains("2. No preamble."));
//! ```
//!
//! Rule numbering restarts with each [`InstructionBuilder::section`], so one
//! builder can produce several independently numbered lists. No validation
//! is performed beyond `expect`ing that writing to the internal `String`
//! never fails (which it shouldn’t).

use std::fmt::{Display, Write as _};

/// Fluent helper producing one block of instruction text.
pub struct InstructionBuilder {
    buffer: String,
    rule: usize,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            rule: 0,
        }
    }

    /// Add a `#` heading and restart rule numbering.
    pub fn section(mut self, title: impl Display) -> Self {
        writeln!(self.buffer, "# {title}").expect("failed to write buffer");
        self.rule = 0;
        self
    }

    /// Add a `##` heading.
    pub fn subsection(mut self, title: impl Display) -> Self {
        writeln!(self.buffer, "## {title}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add the next numbered rule of the current section.
    pub fn rule(mut self, rule: impl Display) -> Self {
        self.rule += 1;
        writeln!(self.buffer, "{}. {rule}", self.rule).expect("failed to write buffer");
        self
    }

    /// Add a key–value pair in **bold**: `**Key**: value`.
    pub fn key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: {value}").expect("failed to write buffer");
        self
    }

    /// Add a key–value pair whose value is wrapped in double quotes, the
    /// house style for verbatim user input: `**Key**: "value"`.
    pub fn quoted(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: \"{value}\"").expect("failed to write buffer");
        self
    }

    /// Add an `Example Output:` marker followed by the literal example line.
    pub fn example(mut self, example: impl Display) -> Self {
        writeln!(self.buffer, "Example Output:").expect("failed to write buffer");
        writeln!(self.buffer, "{example}").expect("failed to write buffer");
        self
    }

    /// Insert a single blank line.
    pub fn blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
