//! Shared fixtures for unit tests.

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use crate::core::commands::{Command, CommandError, Context, Outcome};
use crate::core::state::ShellState;
use crate::input::{LineSource, ReadOutcome};
use crate::path::PathProbe;

/// In-memory filesystem: a set of paths that exist and an optional home.
#[derive(Debug, Default)]
pub struct FakeProbe {
    paths: HashSet<String>,
    home: Option<PathBuf>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(mut self, home: &str) -> Self {
        self.home = Some(PathBuf::from(home));
        self
    }

    pub fn with_paths(mut self, paths: &[&str]) -> Self {
        self.paths.extend(paths.iter().map(|p| p.to_string()));
        self
    }
}

impl PathProbe for FakeProbe {
    fn exists(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

/// Replays a fixed sequence of read results, then reports end of input.
/// Behaves like piped stdin unless made `interactive`.
pub struct ScriptInput {
    outcomes: VecDeque<ReadOutcome>,
    /// Prompt passed to each `read_line` call.
    pub prompts: Vec<String>,
    interactive: bool,
}

impl ScriptInput {
    pub fn lines(lines: &[&str]) -> Self {
        Self::outcomes(
            lines
                .iter()
                .map(|line| ReadOutcome::Line(line.to_string()))
                .collect(),
        )
    }

    pub fn outcomes(outcomes: Vec<ReadOutcome>) -> Self {
        Self {
            outcomes: outcomes.into(),
            prompts: Vec::new(),
            interactive: false,
        }
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }
}

impl LineSource for ScriptInput {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        self.prompts.push(prompt.to_string());
        self.outcomes.pop_front().unwrap_or(ReadOutcome::Eof)
    }

    fn shows_prompt(&self) -> bool {
        self.interactive
    }
}

/// Runs a single command against `state`, capturing what it prints.
pub fn run_command(
    cmd: &dyn Command,
    args: &[&str],
    state: &mut ShellState,
    probe: &dyn PathProbe,
) -> (Result<Outcome, CommandError>, String) {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let mut out = Vec::new();
    let result = {
        let mut ctx = Context {
            state,
            probe,
            out: &mut out,
        };
        cmd.execute(&args, &mut ctx)
    };
    (result, String::from_utf8_lossy(&out).into_owned())
}
