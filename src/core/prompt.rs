//! Interactive input capability.
//!
//! The wizard never reads the console directly. It receives a [`Prompter`]
//! so the terminal can be swapped for scripted answers.

use crate::error::Result;

/// Source of answers for the wizard's questions.
///
/// Prompts are passed without trailing punctuation; implementations
/// decorate them as they see fit.
pub trait Prompter {
    /// Read a line without echoing it. Empty input is accepted.
    fn secret(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question, asking again until a recognized answer is given.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Read a line verbatim. Empty input is accepted.
    fn text(&mut self, prompt: &str) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn secret(&mut self, prompt: &str) -> Result<String> {
        (**self).secret(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        (**self).confirm(prompt)
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        (**self).text(prompt)
    }
}
