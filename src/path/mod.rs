use std::path::{Path, PathBuf};

mod expander;
mod resolver;

pub use expander::PathExpander;
pub use resolver::PathResolver;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("cd: {0}: No such file or directory")]
    NoSuchPath(String),

    #[error("cd: Home directory not found")]
    HomeDirNotFound,
}

/// The shell's only view of the filesystem: existence checks and the
/// home directory.
pub trait PathProbe {
    fn exists(&self, path: &str) -> bool;
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Probes the real filesystem of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl PathProbe for HostProbe {
    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).exists()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_probe_exists() {
        let dir = tempfile::tempdir().unwrap();
        let probe = HostProbe;

        assert!(probe.exists(dir.path().to_str().unwrap()));
        assert!(!probe.exists("/path/that/does/not/exist"));
        assert!(!probe.exists(""));
    }

    #[test]
    fn test_resolve_error_display() {
        assert_eq!(
            ResolveError::NoSuchPath("/does/not/exist".into()).to_string(),
            "cd: /does/not/exist: No such file or directory"
        );
    }
}
