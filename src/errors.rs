use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid amount `{0}`: enter a positive number")]
    InvalidAmount(String),
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Import rejected: {0}")]
    Import(String),
    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
