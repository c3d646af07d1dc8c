pub mod executor;

pub use executor::{ProcessExecutor, Spawn};

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program}: failed to wait for process: {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },
}
