mod completer;
mod editor;
pub mod parser;

pub use completer::ShellCompleter;
pub use editor::EditorInput;
pub use parser::ParsedCommand;

use crate::error::ShellError;

/// Result of asking for one line of input.
#[derive(Debug)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// Input stream closed.
    Eof,
    Error(ShellError),
}

/// Where the shell gets its command lines from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome;

    /// Whether `read_line` draws the prompt itself. When it does not, the
    /// shell writes the prompt to its output before reading.
    fn shows_prompt(&self) -> bool {
        true
    }
}
