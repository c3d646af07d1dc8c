use super::{Command, CommandError, Context, Outcome};

/// Ends the shell with status 0 or 1. Any other argument is a usage
/// error and the shell keeps running.
#[derive(Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, args: &[String], _ctx: &mut Context<'_>) -> Result<Outcome, CommandError> {
        match args.first().map(String::as_str) {
            Some("0") => Ok(Outcome::Exit(0)),
            Some("1") => Ok(Outcome::Exit(1)),
            _ => Err(CommandError::Usage("exit <0|1>")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::SearchPaths;
    use crate::core::state::ShellState;
    use crate::test_utils::{run_command, FakeProbe};

    fn exit(args: &[&str]) -> Result<Outcome, CommandError> {
        let mut state = ShellState::new("/app", SearchPaths::default());
        run_command(&ExitCommand, args, &mut state, &FakeProbe::new()).0
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit(&["0"]).unwrap(), Outcome::Exit(0));
        assert_eq!(exit(&["1"]).unwrap(), Outcome::Exit(1));
    }

    #[test]
    fn test_exit_usage() {
        assert!(matches!(exit(&["7"]), Err(CommandError::Usage(_))));
        assert!(matches!(exit(&[]), Err(CommandError::Usage(_))));
        assert!(matches!(exit(&["00"]), Err(CommandError::Usage(_))));
    }
}
