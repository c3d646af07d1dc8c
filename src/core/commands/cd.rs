use log::debug;

use super::{Command, CommandError, Context, ExitCode, Outcome};
use crate::path::PathResolver;

/// Moves the shell's tracked directory. The process working directory is
/// left alone.
#[derive(Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Outcome, CommandError> {
        let target = args.first().map(|s| s.as_str()).unwrap_or("~");
        let resolved = PathResolver::new(ctx.probe).resolve(target, &ctx.state.current_dir)?;

        debug!("cd: {} -> {}", ctx.state.current_dir, resolved);
        ctx.state.current_dir = resolved;
        Ok(Outcome::Continue(ExitCode::Success))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::SearchPaths;
    use crate::core::state::ShellState;
    use crate::path::{HostProbe, ResolveError};
    use crate::test_utils::{run_command, FakeProbe};

    fn probe() -> FakeProbe {
        FakeProbe::new()
            .with_home("/home/u")
            .with_paths(&["/app", "/app/sub", "/app/sub/x", "/home/u"])
    }

    #[test]
    fn test_cd_home() {
        let mut state = ShellState::new("/app", SearchPaths::default());
        let (result, out) = run_command(&CdCommand, &["~"], &mut state, &probe());

        assert_eq!(result.unwrap(), Outcome::Continue(ExitCode::Success));
        assert_eq!(out, "");
        assert_eq!(state.current_dir, "/home/u");
    }

    #[test]
    fn test_cd_without_args_goes_home() {
        let mut state = ShellState::new("/app", SearchPaths::default());
        let (result, _) = run_command(&CdCommand, &[], &mut state, &probe());

        assert!(result.is_ok());
        assert_eq!(state.current_dir, "/home/u");
    }

    #[test]
    fn test_cd_parent() {
        let mut state = ShellState::new("/app/sub/x", SearchPaths::default());
        let (result, _) = run_command(&CdCommand, &["../.."], &mut state, &probe());

        assert!(result.is_ok());
        assert_eq!(state.current_dir, "/app");
    }

    #[test]
    fn test_cd_invalid_keeps_dir() {
        let mut state = ShellState::new("/app", SearchPaths::default());
        let (result, _) = run_command(&CdCommand, &["/does/not/exist"], &mut state, &probe());

        assert!(matches!(
            result,
            Err(CommandError::Resolve(ResolveError::NoSuchPath(ref p))) if p == "/does/not/exist"
        ));
        assert_eq!(state.current_dir, "/app");
    }

    #[test]
    fn test_cd_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().to_str().unwrap().to_string();
        let mut state = ShellState::new("/app", SearchPaths::default());
        let cwd_before = std::env::current_dir().unwrap();

        let (result, _) = run_command(&CdCommand, &[target.as_str()], &mut state, &HostProbe);

        assert!(result.is_ok());
        assert_eq!(state.current_dir, target);
        assert_eq!(std::env::current_dir().unwrap(), cwd_before);
    }
}
