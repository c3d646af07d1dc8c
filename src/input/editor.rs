use std::io::{self, IsTerminal};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use super::{LineSource, ReadOutcome, ShellCompleter};
use crate::error::ShellError;

/// Interactive line source backed by rustyline, with in-memory history
/// and first-word completion.
pub struct EditorInput {
    editor: Editor<ShellCompleter, DefaultHistory>,
    /// rustyline only draws the prompt when stdin is a terminal.
    interactive: bool,
}

impl EditorInput {
    pub fn new(completer: ShellCompleter, history_size: usize) -> Result<Self, ShellError> {
        let config = Config::builder()
            .auto_add_history(true)
            .max_history_size(history_size)?
            .build();

        let mut editor = Editor::<ShellCompleter, DefaultHistory>::with_config(config)?;
        editor.set_helper(Some(completer));

        Ok(Self {
            editor,
            interactive: io::stdin().is_terminal(),
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        match self.editor.readline(prompt) {
            Ok(line) => ReadOutcome::Line(line),
            Err(ReadlineError::Interrupted) => ReadOutcome::Interrupted,
            Err(ReadlineError::Eof) => ReadOutcome::Eof,
            Err(e) => ReadOutcome::Error(e.into()),
        }
    }

    fn shows_prompt(&self) -> bool {
        self.interactive
    }
}
