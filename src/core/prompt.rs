//! Interactive input with built-in cancellation.
//!
//! Every wizard prompt reads one line through [`PromptSource`]. The reserved
//! word `quit` and end-of-input (Ctrl-D, or an interrupt while reading) are
//! recognized here, before any step-specific processing, so each step only
//! ever sees usable text or [`PromptInput::Cancelled`].

use crate::core::error::Result;
use std::io::{self, Write};

/// Reserved word that cancels the wizard from any prompt
pub const CANCEL_WORD: &str = "quit";

/// One line of operator input, or a cancellation
#[derive(Debug, Clone, PartialEq)]
pub enum PromptInput {
    Line(String),
    Cancelled,
}

/// Source of interactive answers, one trimmed line at a time.
pub trait PromptSource {
    fn read_line(&mut self) -> Result<PromptInput>;
}

/// Production input source reading from stdin
pub struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn read_line(&mut self) -> Result<PromptInput> {
        io::stdout().flush()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            // EOF: the operator closed the input stream
            Ok(0) => Ok(PromptInput::Cancelled),
            Ok(_) => Ok(classify(input.trim())),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(PromptInput::Cancelled),
            Err(e) => Err(e.into()),
        }
    }
}

fn classify(line: &str) -> PromptInput {
    if line == CANCEL_WORD {
        PromptInput::Cancelled
    } else {
        PromptInput::Line(line.to_string())
    }
}

/// Scripted input source for driving the wizard in tests.
///
/// Yields the given lines in order and cancels once they run out.
#[cfg(test)]
pub struct ScriptedPrompt {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl PromptSource for ScriptedPrompt {
    fn read_line(&mut self) -> Result<PromptInput> {
        match self.lines.pop_front() {
            Some(line) => Ok(classify(line.trim())),
            None => Ok(PromptInput::Cancelled),
        }
    }
}
