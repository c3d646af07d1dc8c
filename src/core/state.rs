use super::env::SearchPaths;

/// Session state owned by the shell for its whole lifetime.
///
/// `current_dir` is the shell's own notion of where it is; the process
/// working directory is never changed. Only `cd` writes it.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub current_dir: String,
    pub search_paths: SearchPaths,
}

impl ShellState {
    pub fn new(current_dir: impl Into<String>, search_paths: SearchPaths) -> Self {
        Self {
            current_dir: current_dir.into(),
            search_paths,
        }
    }
}
