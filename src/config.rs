use std::env;

use crate::flags::Flags;

pub const DEFAULT_START_DIR: &str = "/app";
pub const DEFAULT_PROMPT: &str = "$ ";
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

pub const START_DIR_VAR: &str = "MYSHELL_START_DIR";
pub const PROMPT_VAR: &str = "MYSHELL_PROMPT";

/// Startup settings. Command-line flags win over environment variables,
/// which win over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start_dir: String,
    pub prompt: String,
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dir: DEFAULT_START_DIR.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        Self::resolve(flags, |name| env::var(name).ok())
    }

    fn resolve(flags: &Flags, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let start_dir = flags
            .get_value("dir")
            .cloned()
            .or_else(|| lookup(START_DIR_VAR))
            .unwrap_or(defaults.start_dir);
        let prompt = lookup(PROMPT_VAR).unwrap_or(defaults.prompt);

        Self {
            start_dir,
            prompt,
            history_size: defaults.history_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(&Flags::new(), no_env);
        assert_eq!(config, Config::default());
        assert_eq!(config.start_dir, "/app");
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::resolve(&Flags::new(), |name| match name {
            START_DIR_VAR => Some("/srv".to_string()),
            PROMPT_VAR => Some("> ".to_string()),
            _ => None,
        });
        assert_eq!(config.start_dir, "/srv");
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_flag_beats_env() {
        let mut flags = Flags::new();
        flags
            .parse(&["--dir".to_string(), "/tmp".to_string()])
            .unwrap();

        let config = Config::resolve(&flags, |_| Some("/srv".to_string()));
        assert_eq!(config.start_dir, "/tmp");
    }
}
