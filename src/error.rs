use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvogenError {
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Missing chromosome: {0}")]
    MissingChromosome(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl EvogenError {
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        EvogenError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EvogenError>;
