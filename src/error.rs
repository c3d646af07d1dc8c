use rustyline::error::ReadlineError;

/// Errors that end the shell itself. Everything a single command can get
/// wrong is reported at the prompt and never reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Flag error: {0}")]
    FlagError(String),
}
