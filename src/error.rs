//! Crate error types.

use thiserror::Error;

/// Errors produced while loading or querying leaderboard data.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Unknown baseline: {0} (expected 'base' or 'instruct')")]
    UnknownBaseline(String),

    #[error("Unknown sort column: {0}")]
    UnknownColumn(String),
}

/// Result type for leaderboard operations
pub type Result<T> = std::result::Result<T, Error>;
