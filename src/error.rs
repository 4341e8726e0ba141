//! Crate-level error type and `Result` alias.
//! Every argument and template problem is reported before a single value is
//! written; only `Io` can surface once emission has started.
use thiserror::Error;

use crate::types::Field;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Mismatch n args; got {count}, wants 1 <= n args <= 3")]
    ArgumentCount { count: usize },

    #[error("Invalid {field} value: {token:?}")]
    Parse { field: Field, token: String },

    #[error("Step value should be != 0")]
    ZeroStep,

    #[error("Negative step {step} never reaches end {end} from start {start}")]
    Divergent { start: f64, step: f64, end: f64 },

    #[error("Invalid format {format:?}: {reason}")]
    InvalidFormat { format: String, reason: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_format<R: std::fmt::Display>(format: &str, reason: R) -> Self {
        Error::InvalidFormat {
            format: format.to_string(),
            reason: reason.to_string(),
        }
    }
}
