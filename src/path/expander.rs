use super::{PathProbe, ResolveError};

/// Substitutes a leading `~` with the home directory.
#[derive(Clone, Copy)]
pub struct PathExpander<'a> {
    probe: &'a dyn PathProbe,
}

impl<'a> PathExpander<'a> {
    pub fn new(probe: &'a dyn PathProbe) -> Self {
        Self { probe }
    }

    /// Only the first character is replaced, so `~user` becomes
    /// `<home>user`. Named-user lookup is not supported.
    pub fn expand(&self, path: &str) -> Result<String, ResolveError> {
        match path.strip_prefix('~') {
            Some(rest) => {
                let home = self.get_home_dir()?;
                Ok(format!("{}{}", home, rest))
            }
            None => Ok(path.to_owned()),
        }
    }

    pub fn is_home_path(&self, path: &str) -> bool {
        path.starts_with('~')
    }

    pub fn get_home_dir(&self) -> Result<String, ResolveError> {
        self.probe
            .home_dir()
            .map(|home| home.to_string_lossy().into_owned())
            .ok_or(ResolveError::HomeDirNotFound)
    }
}
