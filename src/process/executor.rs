use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use super::ProcessError;
use crate::core::commands::ExitCode;

/// Everything needed to start one external program.
#[derive(Debug, Clone, Default)]
pub struct Spawn<'a> {
    /// Name the user typed, used in messages.
    pub name: &'a str,
    /// Resolved program path handed to the OS.
    pub program: &'a str,
    pub args: &'a [String],
    /// `KEY=VALUE` entries added on top of the inherited environment.
    pub env: &'a [String],
    pub cwd: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs the program to completion with inherited stdio.
    pub fn execute(&self, request: &Spawn<'_>) -> Result<ExitCode, ProcessError> {
        let mut command = Command::new(request.program);
        command
            .args(request.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        for entry in request.env {
            match entry.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    command.env(key, value);
                }
                _ => debug!("ignoring malformed environment entry {:?}", entry),
            }
        }

        if let Some(cwd) = request.cwd.filter(|dir| Path::new(dir).is_dir()) {
            command.current_dir(cwd);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{}: spawn reported not found", request.program);
                return Ok(ExitCode::NotFound);
            }
            Err(source) => {
                return Err(ProcessError::Spawn {
                    program: request.name.to_owned(),
                    source,
                })
            }
        };

        debug!("spawned {} (pid {})", request.program, child.id());

        let status = child.wait().map_err(|source| ProcessError::Wait {
            program: request.name.to_owned(),
            source,
        })?;

        debug!("{} exited with {}", request.program, status);

        Ok(if status.success() {
            ExitCode::Success
        } else {
            ExitCode::Failure
        })
    }
}
