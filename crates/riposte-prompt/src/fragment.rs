//! The trait every prompt fragment implements.
//!
//! A fragment is a self-contained block of instruction text: a persona, a
//! background profile, an output contract. Keeping each one behind the same
//! one-method trait means a [`crate::chain::FragmentChain`] can line them up
//! in any order without caring what they are.

/// Converts a value into one block of prompt text.
///
/// `render` consumes `self`; fragments are cheap, single-use values that
/// mostly borrow their inputs.
pub trait PromptFragment {
    fn render(self) -> String;
}

/// Convenience so pre-rendered text can slot into a chain directly.
impl PromptFragment for String {
    fn render(self) -> String {
        self
    }
}

impl PromptFragment for &str {
    fn render(self) -> String {
        self.to_string()
    }
}
