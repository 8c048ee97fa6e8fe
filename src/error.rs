//! Error types shared across the crate.
//!
//! Per-signal failures never appear here: they collapse into a
//! [`JunkReason`](crate::models::JunkReason) inside the engine.

use std::path::PathBuf;

/// Failure to source a rule set or signal batch.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A comparison expression that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    #[error("expression has no comparison operator: {0:?}")]
    MissingOperator(String),

    #[error("unsupported comparison operator {0:?}")]
    UnsupportedOperator(String),

    #[error("operand {0:?} is not numeric")]
    NonNumericOperand(String),

    #[error("malformed expression {0:?}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}
