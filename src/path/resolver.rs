use log::debug;

use super::{PathExpander, PathProbe, ResolveError};

/// Normalizes `cd` targets against the shell's tracked directory.
#[derive(Clone, Copy)]
pub struct PathResolver<'a> {
    probe: &'a dyn PathProbe,
}

impl<'a> PathResolver<'a> {
    pub fn new(probe: &'a dyn PathProbe) -> Self {
        Self { probe }
    }

    /// Resolves `target` against `current_dir` and checks that the result
    /// exists.
    ///
    /// Parent references are counted as raw `..` substrings and each one
    /// drops a trailing segment of `current_dir`; whatever else `target`
    /// holds is discarded in that case. Otherwise a leading `.` is replaced
    /// by `current_dir` verbatim. A leading `~` is expanded last.
    pub fn resolve(&self, target: &str, current_dir: &str) -> Result<String, ResolveError> {
        let parents = target.matches("..").count();

        let candidate = if parents > 0 {
            let mut dir = current_dir;
            for _ in 0..parents {
                dir = strip_last_segment(dir);
            }
            dir.to_owned()
        } else if let Some(rest) = target.strip_prefix('.') {
            format!("{}{}", current_dir, rest)
        } else {
            target.to_owned()
        };

        let expander = PathExpander::new(self.probe);
        let candidate = if expander.is_home_path(&candidate) {
            expander.expand(&candidate)?
        } else {
            candidate
        };

        debug!("cd: {:?} from {:?} resolved to {:?}", target, current_dir, candidate);

        if self.probe.exists(&candidate) {
            Ok(candidate)
        } else {
            Err(ResolveError::NoSuchPath(candidate))
        }
    }
}

/// Removes a trailing `/segment`. Paths without one (empty, `/`, or ending
/// in a separator) come back unchanged.
fn strip_last_segment(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) if idx + 1 < path.len() => &path[..idx],
        _ => path,
    }
}
