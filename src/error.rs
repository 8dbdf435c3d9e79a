// src/error.rs

use thiserror::Error;

/// Error taxonomy for the factorization engine.
///
/// Every strategy returns `Result<_, EngineError>`; the dispatcher converts
/// errors into failure results at a single boundary, so none of these ever
/// crosses the public API as a panic.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Number <= 1 or unparseable. Rejected before dispatch, no cache touch.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown method token.
    #[error("unsupported factorization method: {0}")]
    UnsupportedMethod(String),

    /// Internal fault inside a strategy (e.g. retry budget exhausted).
    #[error("strategy failure: {0}")]
    StrategyFailure(String),

    /// Remote oracle unreachable, malformed, or reporting an incomplete
    /// factorization. Not retried automatically.
    #[error("external lookup failed: {0}")]
    ExternalService(String),

    /// Persistent store unavailable. The engine degrades to computing
    /// without caching when it sees this.
    #[error("cache failure: {0}")]
    CacheFailure(String),
}

impl From<rusqlite::Error> for EngineError {
    fn from(err: rusqlite::Error) -> Self {
        EngineError::CacheFailure(err.to_string())
    }
}
