use thiserror::Error;

/// Errors surfaced to the result view and status bar.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Filter index {index} out of range (have {len} filters)")]
    Validation { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
