mod paths;

pub use paths::SearchPaths;

/// Environment variable holding the command search path.
pub const PATH_VAR: &str = "PATH";
