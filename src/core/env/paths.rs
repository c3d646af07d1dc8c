use std::env;
use std::fmt;

use crate::path::PathProbe;

use super::PATH_VAR;

/// Ordered directories probed for external commands, read once from
/// `PATH` at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    dirs: Vec<String>,
}

impl SearchPaths {
    pub fn from_env() -> Self {
        Self::parse(&env::var(PATH_VAR).unwrap_or_default())
    }

    /// Splits a colon-separated list. Empty entries are kept, so `a::b`
    /// also looks up `/<name>`.
    pub fn parse(value: &str) -> Self {
        Self {
            dirs: value.split(':').map(str::to_owned).collect(),
        }
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    /// First `<dir>/<name>` that exists, in search order.
    pub fn find(&self, name: &str, probe: &dyn PathProbe) -> Option<String> {
        self.dirs
            .iter()
            .map(|dir| format!("{}/{}", dir, name))
            .find(|candidate| probe.exists(candidate))
    }

    /// The list as a `PATH=...` entry for child processes.
    pub fn to_env_entry(&self) -> String {
        format!("{}={}", PATH_VAR, self)
    }
}

impl fmt::Display for SearchPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dirs.join(":"))
    }
}
