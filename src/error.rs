//! Error handling for wavtrim
//!
//! Every error carries a stable code and, where the caller can do something
//! about it, a list of recovery suggestions.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for wavtrim operations
pub type Result<T> = std::result::Result<T, WaveError>;

/// Main error type for wavtrim operations
#[derive(Error, Debug)]
pub enum WaveError {
    // Container Errors
    #[error("Format error: {reason}")]
    Format { reason: String },

    #[error("Range error: requested start sample {requested}, but only {available} samples are available")]
    Range { requested: usize, available: usize },

    #[error("Bounds error: read of {len} bytes at offset {offset} runs past end of {buffer_len}-byte buffer")]
    Bounds {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WaveError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        WaveError::Format {
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WaveError::Format { .. } => "FORMAT_ERROR",
            WaveError::Range { .. } => "RANGE_ERROR",
            WaveError::Bounds { .. } => "BOUNDS_ERROR",
            WaveError::FileNotFound { .. } => "FILE_NOT_FOUND",
            WaveError::Io(_) => "IO_ERROR",
            WaveError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Format and bounds failures mean the input itself is unusable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WaveError::Range { .. } | WaveError::FileNotFound { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            WaveError::Format { .. } => vec![
                "Check that the file is a RIFF/WAVE file with 'fmt ' and 'data' chunks",
                "Re-export the audio as uncompressed PCM WAV",
            ],
            WaveError::Range { .. } => vec![
                "Choose a start sample no greater than the file's sample count",
                "Run 'wavtrim-cli info' to see the available sample count",
            ],
            WaveError::Bounds { .. } => vec![
                "The file appears truncated or a chunk header is corrupt",
                "Try re-exporting the file from its source",
            ],
            WaveError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            _ => vec![],
        }
    }
}
