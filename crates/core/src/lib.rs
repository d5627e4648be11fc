//! Vidnotes Core Library
//!
//! Link and file intake, the notes-generation seam, and the session state
//! that the desktop app renders.

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod link;
pub mod media;
pub mod notes;
pub mod session;
pub mod submission;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError};
pub use error::{Result, SubmissionError};
pub use format::{format_duration, format_generated_on, format_ready_message};
pub use generator::{NotesGenerator, SimulatedGenerator};
pub use link::{LinkError, YoutubeLink, is_valid_youtube_url};
pub use media::VideoFile;
pub use notes::{NoteBook, NoteId, NoteRecord};
pub use session::{Resolution, Session, Tab};
pub use submission::{
    GeneratedNotes, SubmissionOrigin, SubmissionRequest, SubmissionResult, SubmissionTicket,
    VideoSource,
};
