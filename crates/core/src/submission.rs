use uuid::Uuid;

use crate::{
    error::SubmissionError,
    format::{format_note_title, format_ready_message},
    link::YoutubeLink,
    media::VideoFile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionOrigin {
    Link,
    File,
}

impl SubmissionOrigin {
    /// Short tag used in note titles.
    pub fn tag(&self) -> &'static str {
        match self {
            SubmissionOrigin::Link => "link",
            SubmissionOrigin::File => "file",
        }
    }

    /// Human label used in result messages.
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionOrigin::Link => "YouTube Link",
            SubmissionOrigin::File => "Local File",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    Link(YoutubeLink),
    File(VideoFile),
}

impl VideoSource {
    pub fn origin(&self) -> SubmissionOrigin {
        match self {
            VideoSource::Link(_) => SubmissionOrigin::Link,
            VideoSource::File(_) => SubmissionOrigin::File,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            VideoSource::Link(link) => link.to_string(),
            VideoSource::File(file) => file.path().display().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub id: Uuid,
    pub source: VideoSource,
}

impl SubmissionRequest {
    pub fn new(source: VideoSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
        }
    }

    pub fn origin(&self) -> SubmissionOrigin {
        self.source.origin()
    }

    pub fn ticket(&self) -> SubmissionTicket {
        SubmissionTicket {
            id: self.id,
            origin: self.origin(),
        }
    }
}

/// Identifies the submission currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub id: Uuid,
    pub origin: SubmissionOrigin,
}

/// What a generator hands back on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNotes {
    pub origin: SubmissionOrigin,
    pub title: String,
    pub message: String,
}

impl GeneratedNotes {
    pub fn for_origin(origin: SubmissionOrigin) -> Self {
        Self {
            origin,
            title: format_note_title(origin),
            message: format_ready_message(origin),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(error: &SubmissionError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.success { "Success" } else { "Error" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ticket_carries_origin() {
        let link = YoutubeLink::parse("https://youtu.be/abc").unwrap();
        let request = SubmissionRequest::new(VideoSource::Link(link));
        let ticket = request.ticket();
        assert_eq!(ticket.id, request.id);
        assert_eq!(ticket.origin, SubmissionOrigin::Link);
        assert_eq!(request.source.describe(), "https://youtu.be/abc");
    }

    #[test]
    fn result_titles() {
        assert_eq!(SubmissionResult::success("ok").title(), "Success");
        let failed = SubmissionResult::failure(&SubmissionError::ProcessingFailed {
            reason: "boom".into(),
        });
        assert!(!failed.success);
        assert_eq!(failed.title(), "Error");
        assert_eq!(failed.message, "Notes generation failed: boom");
    }
}
