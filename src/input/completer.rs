use std::collections::BTreeSet;
use std::fs;

use log::debug;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::core::env::SearchPaths;

/// Completes the command name from builtins and the executables found on
/// the search path. Arguments are not completed.
#[derive(Clone, Default)]
pub struct ShellCompleter {
    commands: BTreeSet<String>,
}

impl ShellCompleter {
    pub fn new<'a>(builtins: impl IntoIterator<Item = &'a str>, search_paths: &SearchPaths) -> Self {
        let mut completer = Self::default();
        completer
            .commands
            .extend(builtins.into_iter().map(str::to_owned));
        completer.add_path_commands(search_paths);
        completer
    }

    fn add_path_commands(&mut self, search_paths: &SearchPaths) {
        for dir in search_paths.dirs() {
            let Ok(entries) = fs::read_dir(dir) else {
                debug!("completer: cannot read {}", dir);
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_file = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if let (true, Some(name)) = (is_file, entry.file_name().to_str()) {
                    self.commands.insert(name.to_owned());
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}

impl Helper for ShellCompleter {}
impl Highlighter for ShellCompleter {}
impl Validator for ShellCompleter {}
impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];
        let start = before_cursor.len() - before_cursor.trim_start().len();
        let word = &before_cursor[start..];

        if word.contains(' ') {
            return Ok((pos, Vec::new()));
        }
        Ok((start, self.complete_command(word)))
    }
}
