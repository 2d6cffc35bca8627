//! Error types for the tape sequencer.
//!
//! A wrong answer is not an error: it simply does not advance the widget.
//! These cover host mistakes (bad config, impossible fixed problems).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TapeError {
    /// A configuration value is out of range.
    #[error("invalid config: {field}: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// A fixed problem breaks `1 <= a <= max/2`, `1 <= b <= max - a`.
    #[error("invalid problem {a} + {b} for max {max}")]
    InvalidProblem { a: u32, b: u32, max: u32 },

    /// The expression pattern names a slot that is not `a`, `b` or `sum`.
    #[error("unknown expression slot `{0}`")]
    UnknownSlot(String),

    #[cfg(feature = "serde")]
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TapeError>;
