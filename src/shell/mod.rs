use std::io::{self, Stdout, Write};

use log::{debug, warn};

mod executor;

use crate::{
    config::Config,
    core::{commands::CommandExecutor, env::SearchPaths, state::ShellState},
    error::ShellError,
    input::{EditorInput, LineSource, ReadOutcome, ShellCompleter},
    path::{HostProbe, PathProbe},
};

/// Read failures tolerated back to back before the loop gives up.
pub const MAX_CONSECUTIVE_READ_ERRORS: usize = 3;

pub struct Shell<I, W> {
    input: I,
    out: W,
    state: ShellState,
    executor: CommandExecutor,
    probe: Box<dyn PathProbe>,
    prompt: String,
}

impl Shell<EditorInput, Stdout> {
    /// Interactive shell on the terminal, probing the real filesystem.
    pub fn new(config: &Config) -> Result<Self, ShellError> {
        let search_paths = SearchPaths::from_env();
        debug!("search paths: {}", search_paths);

        let executor = CommandExecutor::new();
        let completer = ShellCompleter::new(executor.builtin_names(), &search_paths);
        let input = EditorInput::new(completer, config.history_size)?;

        Ok(Shell {
            input,
            out: io::stdout(),
            state: ShellState::new(config.start_dir.clone(), search_paths),
            executor,
            probe: Box::new(HostProbe),
            prompt: config.prompt.clone(),
        })
    }
}

impl<I: LineSource, W: Write> Shell<I, W> {
    pub fn with_parts(
        input: I,
        out: W,
        state: ShellState,
        probe: Box<dyn PathProbe>,
        prompt: impl Into<String>,
    ) -> Self {
        Shell {
            input,
            out,
            state,
            executor: CommandExecutor::new(),
            probe,
            prompt: prompt.into(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until `exit` or end of input and returns the status the
    /// process should end with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let mut read_errors = 0;

        loop {
            if !self.input.shows_prompt() {
                write!(self.out, "{}", self.prompt)?;
                self.out.flush()?;
            }

            match self.input.read_line(&self.prompt) {
                ReadOutcome::Line(line) => {
                    read_errors = 0;
                    if let Some(status) = self.execute_line(&line)? {
                        debug!("exit requested with status {}", status);
                        return Ok(status);
                    }
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    debug!("input closed");
                    return Ok(0);
                }
                ReadOutcome::Error(e) => {
                    read_errors += 1;
                    warn!("read failed ({} in a row): {}", read_errors, e);
                    writeln!(self.out, "{}", e)?;
                    if read_errors >= MAX_CONSECUTIVE_READ_ERRORS {
                        return Err(e);
                    }
                }
            }
        }
    }
}
