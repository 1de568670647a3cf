use thiserror::Error;

/// Top-level error type shared by the Taskwire crates.
///
/// Subsystem crates define their own error types and wrap this one so that
/// the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TaskwireError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid security risk: {0}")]
    InvalidSecurityRisk(String),
}

impl From<toml::de::Error> for TaskwireError {
    fn from(err: toml::de::Error) -> Self {
        TaskwireError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TaskwireError {
    fn from(err: toml::ser::Error) -> Self {
        TaskwireError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TaskwireError {
    fn from(err: serde_json::Error) -> Self {
        TaskwireError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Taskwire operations.
pub type Result<T> = std::result::Result<T, TaskwireError>;
