//! Error taxonomy
//!
//! Every failure the tool can report maps to exactly one process exit code.

use thiserror::Error;

/// Errors raised while validating arguments or classifying file content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharFreqError {
    /// No usable input path, or the file could not be read.
    #[error("input error: {0}")]
    InputArgument(String),

    /// Empty file, a byte outside the accepted range, or an empty category.
    #[error("content error: {0}")]
    Content(String),

    /// Missing or unrecognised repetition format.
    #[error("format error: {0}")]
    FormatArgument(String),

    /// No category flag was given.
    #[error("flag error: {0}")]
    FlagArgument(String),
}

impl CharFreqError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CharFreqError::InputArgument(_) => 1,
            CharFreqError::Content(_) => 2,
            CharFreqError::FormatArgument(_) => 3,
            CharFreqError::FlagArgument(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CharFreqError>;
