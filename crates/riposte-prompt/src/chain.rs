//! Simple **builder** that concatenates multiple values implementing
//! [`PromptFragment`](crate::fragment::PromptFragment) into one prompt.
//!
//! Real prompts are composed from smaller, reusable blocks: a persona, an
//! optional background profile, the task description, the output contract.
//! `FragmentChain` lines these blocks up in a clear, linear fashion and
//! joins them with blank lines so each fragment stays visually separate for
//! the model:
//!
//! ```rust
//! use riposte_prompt::chain::FragmentChain;
//!
//! let prompt = FragmentChain::new()
//!     .with("# Persona\nYou answer in riddles.")
//!     .with("# Task\nIntroduce yourself.")
//!     .build();
//!
//! assert_eq!(prompt.matches("# ").count(), 2);
//! ```

use crate::fragment::PromptFragment;

/// Lightweight container that accumulates rendered fragments.
///
/// The single `Vec` field is kept private so the only way to obtain the
/// result is through [`Self::build`], ensuring the builder API stays fluent.
pub struct FragmentChain(Vec<String>);

impl Default for FragmentChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Render `fragment` and append it to the chain.
    ///
    /// The method takes `self` **by value** to encourage concise
    /// call-chaining.
    pub fn with(mut self, fragment: impl PromptFragment) -> Self {
        self.0.push(fragment.render());
        self
    }

    /// Consume the builder and return the assembled prompt.
    pub fn build(self) -> String {
        self.0.join("\n")
    }
}
