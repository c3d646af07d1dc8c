use std::io::Write;

use log::debug;

use crate::core::commands::{Context, Outcome};
use crate::error::ShellError;
use crate::input::{LineSource, ParsedCommand};

impl<I: LineSource, W: Write> super::Shell<I, W> {
    /// One dispatch cycle for an already-read line. Returns the status to
    /// exit with when the command asked the shell to stop.
    pub(crate) fn execute_line(&mut self, line: &str) -> Result<Option<i32>, ShellError> {
        let cmd = ParsedCommand::parse(line);
        if cmd.is_empty() {
            return Ok(None);
        }

        let outcome = {
            let mut ctx = Context {
                state: &mut self.state,
                probe: self.probe.as_ref(),
                out: &mut self.out,
            };
            self.executor.dispatch(&cmd, &mut ctx)
        };

        let status = match outcome {
            Outcome::Exit(status) => Some(status),
            Outcome::Continue(code) => {
                debug!("{} finished with {:?}", cmd.name, code);
                None
            }
        };

        self.out.flush()?;
        Ok(status)
    }
}
