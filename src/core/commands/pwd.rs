use super::{Command, CommandError, Context, ExitCode, Outcome};

#[derive(Clone, Copy, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<Outcome, CommandError> {
        writeln!(ctx.out, "{}", ctx.state.current_dir)?;
        Ok(Outcome::Continue(ExitCode::Success))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::SearchPaths;
    use crate::core::state::ShellState;
    use crate::test_utils::{run_command, FakeProbe};

    #[test]
    fn test_pwd_prints_tracked_dir() {
        let mut state = ShellState::new("/app", SearchPaths::default());
        let (result, out) = run_command(&PwdCommand, &[], &mut state, &FakeProbe::new());

        assert_eq!(result.unwrap(), Outcome::Continue(ExitCode::Success));
        assert_eq!(out, "/app\n");
    }
}
