//! Error handling for animation export parsing

use std::io;
use thiserror::Error;

/// Errors that can occur when reading an export or writing sound event rows
#[derive(Debug, Error)]
pub enum NotifyError {
    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document is not valid JSON or does not have the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The document contains no `AnimSequence` export
    #[error("AnimSequence not found in JSON")]
    MissingAnimSequence,

    /// A used notify has a `Time`/`LinkValue` that is not a number
    #[error("Invalid notify time: {value}")]
    InvalidNotifyTime {
        /// The offending JSON value
        value: String,
    },

    /// Frame count or sequence length is missing or zero
    #[error(
        "Insufficient animation data (NumFrames: {}, SequenceLength: {})",
        display_opt(.num_frames),
        display_opt(.sequence_length)
    )]
    InsufficientAnimationData {
        /// The `NumFrames` value found, if any
        num_frames: Option<f64>,
        /// The `SequenceLength` value found, if any
        sequence_length: Option<f64>,
    },
}

fn display_opt(value: &Option<f64>) -> String {
    value.map_or_else(|| "missing".to_string(), |v| v.to_string())
}

/// Type alias for Results from export operations
pub type Result<T> = std::result::Result<T, NotifyError>;
