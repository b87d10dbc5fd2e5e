use super::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No valid molecules loaded")]
    EmptyLibrary,

    #[error("Invalid stack parameters: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to write artifact '{}': {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Molecule index {index} is out of range for a library of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
