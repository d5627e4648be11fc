use std::path::PathBuf;
use thiserror::Error;

use crate::link::LinkError;

/// Everything that can stop a submission from producing notes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Invalid YouTube link `{input}`: {reason}")]
    InvalidLink { input: String, reason: LinkError },

    #[error("{} is not a video file ({media_type})", .path.display())]
    UnsupportedMediaType { path: PathBuf, media_type: String },

    #[error(
        "{} is too large to upload ({size_bytes} bytes, limit {limit_bytes} bytes)",
        .path.display()
    )]
    UploadTooLarge {
        path: PathBuf,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("Could not read {}: {reason}", .path.display())]
    FileUnreadable { path: PathBuf, reason: String },

    #[error("Notes generation failed: {reason}")]
    ProcessingFailed { reason: String },

    #[error("A submission is already in progress")]
    AlreadyInFlight,
}

impl SubmissionError {
    /// Whether the error should be shown to the user in the result banner.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, SubmissionError::AlreadyInFlight)
    }
}

pub type Result<T> = std::result::Result<T, SubmissionError>;
