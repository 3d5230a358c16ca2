use std::io;

use thiserror::Error;

/// Failure kinds of a golden vector run. All of them abort the run; a
/// clamped or partially written vector set must never reach the test bench.
#[derive(Error, Debug)]
pub enum GoldenError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("value {value} at index {index} does not fit the Q15 range")]
    QuantizationOverflow { index: usize, value: f64 },

    #[error("failed to write artifact: {0}")]
    Io(#[from] io::Error),
}
