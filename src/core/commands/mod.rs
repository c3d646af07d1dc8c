use std::collections::BTreeMap;
use std::io::Write;

use log::{debug, warn};

mod cd;
mod echo;
mod exit;
mod pwd;
mod type_of;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_of::TypeCommand;

use crate::core::state::ShellState;
use crate::input::ParsedCommand;
use crate::path::{PathProbe, ResolveError};
use crate::process::{ProcessExecutor, Spawn};

/// Names registered in the builtin table.
pub const BUILTINS: [&str; 5] = ["cd", "echo", "exit", "pwd", "type"];

/// Result of one dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    NotFound = 2,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue(ExitCode),
    /// Terminate the shell with this OS status.
    Exit(i32),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Command format error, usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a command may touch while it runs.
pub struct Context<'a> {
    pub state: &'a mut ShellState,
    pub probe: &'a dyn PathProbe,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Echo(EchoCommand),
    Exit(ExitCommand),
    Pwd(PwdCommand),
    Type(TypeCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Echo(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::Pwd(cmd) => cmd.execute(args, ctx),
            CommandType::Type(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Routes a parsed line to a builtin or to an external program.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("echo", CommandType::Echo(EchoCommand));
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("pwd", CommandType::Pwd(PwdCommand));
        commands.insert("type", CommandType::Type(TypeCommand));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Runs one command. Errors are printed to `ctx.out` and reported as
    /// `Failure`; nothing here ends the shell except `exit`.
    pub fn dispatch(&self, cmd: &ParsedCommand, ctx: &mut Context<'_>) -> Outcome {
        debug!("dispatch {:?} with {:?}", cmd.name, cmd.args);

        let result = match self.commands.get(cmd.name.as_str()) {
            Some(builtin) => builtin.execute(&cmd.args, ctx),
            None => self.run_external(cmd, ctx),
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Err(write_err) = writeln!(ctx.out, "{}", e) {
                    warn!("failed to report error {:?}: {}", e, write_err);
                }
                Outcome::Continue(ExitCode::Failure)
            }
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Runs a program from the search paths. Any failure to run it, a
    /// non-zero status included, is reported as `<name>: command not found`.
    fn run_external(&self, cmd: &ParsedCommand, ctx: &mut Context<'_>) -> Result<Outcome, CommandError> {
        let code = self.spawn_external(cmd, ctx)?;
        if code != ExitCode::Success {
            writeln!(ctx.out, "{}: command not found", cmd.name)?;
        }
        Ok(Outcome::Continue(code))
    }

    fn spawn_external(&self, cmd: &ParsedCommand, ctx: &mut Context<'_>) -> Result<ExitCode, CommandError> {
        if cmd.name.is_empty() {
            return Ok(ExitCode::NotFound);
        }

        let program = if cmd.name.contains('/') {
            Some(cmd.name.clone())
        } else {
            ctx.state.search_paths.find(&cmd.name, ctx.probe)
        };

        let Some(program) = program else {
            debug!("{}: not found in search paths", cmd.name);
            return Ok(ExitCode::NotFound);
        };

        // The child writes to the real stdout; anything buffered goes first.
        ctx.out.flush()?;

        let env = [ctx.state.search_paths.to_env_entry()];
        let request = Spawn {
            name: &cmd.name,
            program: &program,
            args: &cmd.args,
            env: &env,
            cwd: Some(ctx.state.current_dir.as_str()),
        };

        Ok(match self.process_executor.execute(&request) {
            Ok(code) => code,
            Err(e) => {
                debug!("{}", e);
                ExitCode::Failure
            }
        })
    }
}
