//! Save confirmation.
//!
//! The tracker asks a [`ConfirmSave`] before writing the snapshot, so the
//! interactive prompt can be swapped out in tests or skipped with `--yes`.

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Question shown before saving
pub const SAVE_QUESTION: &str = "Do you want to save a snapshot [y/n]? ";

/// Decides whether a snapshot may be written
pub trait ConfirmSave {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Always agrees; used when confirmation is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl ConfirmSave for AutoConfirm {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(true)
    }
}

impl<F> ConfirmSave for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self(question))
    }
}

/// Asks on a line-oriented console. Only `y` counts as yes.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl PromptConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmSave for PromptConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "\n{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim() == "y")
    }
}
