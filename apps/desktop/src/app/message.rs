use std::path::PathBuf;

use iced::time::Instant;
use uuid::Uuid;
use vidnotes_core::{GeneratedNotes, NoteId, SubmissionError, Tab, VideoFile};

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    LinkChanged(String),
    SubmitLink,
    UploadPressed,
    /// Native chooser closed; `None` when the user cancelled.
    FileChosen(Option<PathBuf>),
    FileInspected(Result<VideoFile, SubmissionError>),
    Generated {
        ticket: Uuid,
        outcome: Result<GeneratedNotes, SubmissionError>,
    },
    DownloadPressed(NoteId),
    Tick(Instant),
}
