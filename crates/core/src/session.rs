//! In-memory view state and the submission lifecycle.
//!
//! `Idle -> Submitting -> Resolved -> Idle`. Both submission paths share one
//! in-flight slot; a resolution is applied only when it carries the ticket of
//! the submission currently in flight.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::SubmissionError,
    format::capitalize,
    link::{YoutubeLink, is_valid_youtube_url},
    media::VideoFile,
    notes::{NoteBook, NoteRecord},
    submission::{
        GeneratedNotes, SubmissionRequest, SubmissionResult, SubmissionTicket, VideoSource,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Notes,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Dashboard, Tab::Notes];

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Notes => "notes",
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.key())
    }
}

/// What happened to a resolution handed to [`Session::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Notes were appended and a success result is shown.
    Completed(NoteRecord),
    /// The generator failed; an error result is shown.
    Failed,
    /// The ticket did not match the submission in flight.
    Stale,
}

#[derive(Debug)]
pub struct Session {
    active_tab: Tab,
    link_input: String,
    in_flight: Option<SubmissionTicket>,
    result: Option<SubmissionResult>,
    notes: NoteBook,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(NoteBook::with_placeholders())
    }
}

impl Session {
    pub fn new(notes: NoteBook) -> Self {
        Self {
            active_tab: Tab::default(),
            link_input: String::new(),
            in_flight: None,
            result: None,
            notes,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Returns `true` when the tab actually changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn link_input(&self) -> &str {
        &self.link_input
    }

    pub fn set_link_input(&mut self, input: impl Into<String>) {
        self.link_input = input.into();
    }

    pub fn is_processing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<SubmissionTicket> {
        self.in_flight
    }

    pub fn can_submit_link(&self) -> bool {
        !self.is_processing() && is_valid_youtube_url(&self.link_input)
    }

    pub fn can_submit_file(&self) -> bool {
        !self.is_processing()
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    /// Starts a submission from the current link input.
    pub fn begin_link(&mut self) -> Result<SubmissionRequest, SubmissionError> {
        if self.is_processing() {
            return Err(SubmissionError::AlreadyInFlight);
        }

        let link =
            YoutubeLink::parse(&self.link_input).map_err(|reason| SubmissionError::InvalidLink {
                input: self.link_input.clone(),
                reason,
            })?;

        Ok(self.start(VideoSource::Link(link)))
    }

    /// Starts a submission for an already inspected video file.
    pub fn begin_file(&mut self, file: VideoFile) -> Result<SubmissionRequest, SubmissionError> {
        if self.is_processing() {
            return Err(SubmissionError::AlreadyInFlight);
        }

        Ok(self.start(VideoSource::File(file)))
    }

    fn start(&mut self, source: VideoSource) -> SubmissionRequest {
        let request = SubmissionRequest::new(source);
        self.result = None;
        self.in_flight = Some(request.ticket());
        request
    }

    /// Applies the outcome of the submission identified by `ticket`.
    pub fn resolve(
        &mut self,
        ticket: Uuid,
        outcome: Result<GeneratedNotes, SubmissionError>,
        today: NaiveDate,
    ) -> Resolution {
        match self.in_flight {
            Some(current) if current.id == ticket => {}
            _ => return Resolution::Stale,
        }
        self.in_flight = None;

        match outcome {
            Ok(generated) => {
                self.result = Some(SubmissionResult::success(generated.message));
                let note = self.notes.append(generated.title, today).clone();
                Resolution::Completed(note)
            }
            Err(err) => {
                self.result = Some(SubmissionResult::failure(&err));
                Resolution::Failed
            }
        }
    }

    /// Shows an error that happened before a submission could start.
    ///
    /// Ignored while a submission is in flight so the pending result is not
    /// clobbered. Returns whether the banner changed.
    pub fn report_error(&mut self, error: &SubmissionError) -> bool {
        if self.is_processing() || !error.is_user_facing() {
            return false;
        }
        self.result = Some(SubmissionResult::failure(error));
        true
    }

    /// Drops the in-flight submission without touching notes or the banner.
    pub fn cancel(&mut self) -> Option<SubmissionTicket> {
        self.in_flight.take()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{link::LinkError, submission::SubmissionOrigin};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn video() -> VideoFile {
        VideoFile::inspect(PathBuf::from("/videos/talk.mp4"), 1024, u64::MAX).unwrap()
    }

    #[test]
    fn starts_on_dashboard_with_seeded_notes() {
        let session = Session::default();
        assert_eq!(session.active_tab(), Tab::Dashboard);
        assert_eq!(session.notes().len(), 3);
        assert!(!session.is_processing());
        assert!(session.result().is_none());
        assert!(!session.can_submit_link());
    }

    #[test]
    fn tab_labels_are_capitalized() {
        let labels: Vec<_> = Tab::ALL.iter().map(Tab::label).collect();
        assert_eq!(labels, ["Dashboard", "Notes"]);
    }

    #[test]
    fn selecting_same_tab_is_a_noop() {
        let mut session = Session::default();
        assert!(!session.select_tab(Tab::Dashboard));
        assert!(session.select_tab(Tab::Notes));
        assert_eq!(session.active_tab(), Tab::Notes);
    }

    #[test]
    fn link_submit_enabled_only_for_valid_links_when_idle() {
        let mut session = Session::default();
        session.set_link_input("https://vimeo.com/1");
        assert!(!session.can_submit_link());

        session.set_link_input("https://www.youtube.com/watch?v=abc123");
        assert!(session.can_submit_link());

        session.begin_link().unwrap();
        assert!(!session.can_submit_link());
        assert!(!session.can_submit_file());
    }

    #[test]
    fn link_submission_lifecycle() {
        let mut session = Session::default();
        session.set_link_input("https://www.youtube.com/watch?v=abc123");

        let request = session.begin_link().unwrap();
        assert!(session.is_processing());
        assert!(session.result().is_none());
        assert_eq!(request.origin(), SubmissionOrigin::Link);

        let outcome = Ok(GeneratedNotes::for_origin(request.origin()));
        let resolution = session.resolve(request.id, outcome, today());

        let Resolution::Completed(note) = resolution else {
            panic!("expected completion, got {resolution:?}");
        };
        assert_eq!(note.title, "New Notes (link)");
        assert_eq!(note.date, today());
        assert_eq!(note.id.to_string(), "4");

        assert!(!session.is_processing());
        let result = session.result().unwrap();
        assert!(result.success);
        assert!(result.message.contains("YouTube Link"));
        assert_eq!(session.notes().len(), 4);
        assert_eq!(session.notes().last(), Some(&note));
    }

    #[test]
    fn new_submission_clears_previous_banner() {
        let mut session = Session::default();
        session.set_link_input("youtu.be/abc");
        let first = session.begin_link().unwrap();
        session.resolve(first.id, Ok(GeneratedNotes::for_origin(first.origin())), today());
        assert!(session.result().is_some());

        session.begin_file(video()).unwrap();
        assert!(session.result().is_none());
    }

    #[test]
    fn file_submission_produces_file_note() {
        let mut session = Session::default();
        let request = session.begin_file(video()).unwrap();
        let resolution = session.resolve(
            request.id,
            Ok(GeneratedNotes::for_origin(request.origin())),
            today(),
        );
        assert!(matches!(resolution, Resolution::Completed(ref n) if n.title == "New Notes (file)"));
        assert_eq!(
            session.result().map(|r| r.message.as_str()),
            Some("Your PDF notes are ready! (Local File)")
        );
    }

    #[test]
    fn only_one_submission_in_flight_across_paths() {
        let mut session = Session::default();
        session.set_link_input("https://youtu.be/abc");
        session.begin_link().unwrap();

        assert_eq!(
            session.begin_file(video()).unwrap_err(),
            SubmissionError::AlreadyInFlight
        );
        assert_eq!(
            session.begin_link().unwrap_err(),
            SubmissionError::AlreadyInFlight
        );
    }

    #[test]
    fn invalid_link_is_rejected_without_starting() {
        let mut session = Session::default();
        session.set_link_input("https://youtube/watch?v=abc");
        let err = session.begin_link().unwrap_err();
        assert_eq!(
            err,
            SubmissionError::InvalidLink {
                input: "https://youtube/watch?v=abc".into(),
                reason: LinkError::HostNotAllowed {
                    host: "youtube".into()
                },
            }
        );
        assert!(!session.is_processing());
    }

    #[test]
    fn stale_tickets_are_ignored() {
        let mut session = Session::default();
        let request = session.begin_file(video()).unwrap();

        let stale = session.resolve(
            Uuid::new_v4(),
            Ok(GeneratedNotes::for_origin(request.origin())),
            today(),
        );
        assert_eq!(stale, Resolution::Stale);
        assert!(session.is_processing());
        assert_eq!(session.notes().len(), 3);
    }

    #[test]
    fn generator_failure_shows_error_and_appends_nothing() {
        let mut session = Session::default();
        let request = session.begin_file(video()).unwrap();
        let resolution = session.resolve(
            request.id,
            Err(SubmissionError::ProcessingFailed {
                reason: "transcoder crashed".into(),
            }),
            today(),
        );
        assert_eq!(resolution, Resolution::Failed);
        let result = session.result().unwrap();
        assert!(!result.success);
        assert_eq!(result.title(), "Error");
        assert_eq!(session.notes().len(), 3);
    }

    #[test]
    fn tab_switch_does_not_affect_pending_submission() {
        let mut session = Session::default();
        let request = session.begin_file(video()).unwrap();
        session.select_tab(Tab::Notes);
        session.select_tab(Tab::Dashboard);
        session.select_tab(Tab::Notes);

        let resolution = session.resolve(
            request.id,
            Ok(GeneratedNotes::for_origin(request.origin())),
            today(),
        );
        assert!(matches!(resolution, Resolution::Completed(_)));
        assert_eq!(session.notes().len(), 4);
    }

    #[test]
    fn report_error_respects_in_flight_submission() {
        let mut session = Session::default();
        let err = SubmissionError::UploadTooLarge {
            path: "/videos/huge.mp4".into(),
            size_bytes: 10,
            limit_bytes: 5,
        };
        assert!(session.report_error(&err));
        assert!(!session.result().unwrap().success);

        session.begin_file(video()).unwrap();
        assert!(!session.report_error(&err));
        assert!(session.result().is_none());
        assert!(!session.report_error(&SubmissionError::AlreadyInFlight));
    }

    #[test]
    fn cancel_discards_the_pending_outcome() {
        let mut session = Session::default();
        let request = session.begin_file(video()).unwrap();
        assert_eq!(session.cancel().map(|t| t.id), Some(request.id));

        let late = session.resolve(
            request.id,
            Ok(GeneratedNotes::for_origin(request.origin())),
            today(),
        );
        assert_eq!(late, Resolution::Stale);
        assert_eq!(session.notes().len(), 3);
    }
}
