//! Optional background profile injected between persona and task.

use riposte_prompt::{InstructionBuilder, PromptFragment};

/// A short profile of whoever wrote the input, typically produced by the
/// context-inference call. The model is told to internalise it, not quote it.
pub struct BackgroundFragment<'a>(&'a str);

impl<'a> BackgroundFragment<'a> {
    pub fn new(profile: &'a str) -> Self {
        Self(profile)
    }
}

impl PromptFragment for BackgroundFragment<'_> {
    fn render(self) -> String {
        InstructionBuilder::new()
            .quoted("Background Profile", self.0)
            .line("Use the profile to sharpen the response. Never quote or mention it directly.")
            .finalize()
    }
}
