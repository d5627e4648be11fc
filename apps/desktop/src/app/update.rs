use std::sync::Arc;

use chrono::Utc;
use iced::Task;
use iced::time::Instant;
use uuid::Uuid;
use vidnotes_core::{
    GeneratedNotes, NoteId, Resolution, SubmissionError, SubmissionRequest, Tab, VideoFile,
    format_duration, media::video_extensions,
};

use super::{App, Message};
use crate::ui::transition::Reveal;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.select_tab(tab);
                Task::none()
            }
            Message::LinkChanged(input) => {
                self.session.set_link_input(input);
                Task::none()
            }
            Message::SubmitLink => match self.session.begin_link() {
                Ok(request) => self.dispatch(request),
                Err(err) => self.reject(err),
            },
            Message::UploadPressed => self.open_file_chooser(),
            Message::FileChosen(None) => {
                tracing::debug!("file chooser dismissed");
                Task::none()
            }
            Message::FileChosen(Some(path)) => {
                tracing::info!(path = %path.display(), "video file chosen");
                Task::perform(
                    VideoFile::open(path, self.max_upload_bytes),
                    Message::FileInspected,
                )
            }
            Message::FileInspected(Ok(file)) => {
                tracing::info!(
                    file = %file.file_name(),
                    media_type = file.media_type(),
                    size_bytes = file.size_bytes(),
                    "video file accepted"
                );
                match self.session.begin_file(file) {
                    Ok(request) => self.dispatch(request),
                    Err(err) => self.reject(err),
                }
            }
            Message::FileInspected(Err(err)) => self.reject(err),
            Message::Generated { ticket, outcome } => {
                self.finish(ticket, outcome);
                Task::none()
            }
            Message::DownloadPressed(id) => {
                self.request_download(id);
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.transition.advance(now);
                if self.banner.is_some_and(|reveal| !reveal.is_animating(now)) {
                    self.banner = None;
                }
                Task::none()
            }
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        if !self.session.select_tab(tab) {
            return;
        }
        tracing::debug!(tab = tab.key(), "tab selected");
        self.now = Instant::now();
        self.transition.start(tab, self.now);
    }

    /// Document export is not wired to a generator yet; the request is only logged.
    pub(super) fn request_download(&self, id: NoteId) -> bool {
        match self.session.notes().get(id) {
            Some(note) => {
                tracing::debug!(
                    note = %id,
                    title = %note.title,
                    "document download requested, no exporter configured"
                );
                true
            }
            None => {
                tracing::warn!(note = %id, "download requested for an unknown note");
                false
            }
        }
    }

    fn open_file_chooser(&mut self) -> Task<Message> {
        if !self.session.can_submit_file() {
            tracing::warn!("upload ignored: a submission is already in progress");
            return Task::none();
        }

        let extensions = video_extensions();
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_title("Choose a video")
                    .add_filter("Video", &extensions)
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::FileChosen,
        )
    }

    /// Runs the request on the generator. The task is aborted if the app is
    /// torn down before it resolves.
    fn dispatch(&mut self, request: SubmissionRequest) -> Task<Message> {
        let ticket = request.id;
        tracing::info!(
            submission = %ticket,
            origin = request.origin().tag(),
            source = %request.source.describe(),
            generator = self.generator.name(),
            "submission started"
        );

        self.now = Instant::now();
        self.processing_since = Some(self.now);
        self.banner = None;

        let generator = Arc::clone(&self.generator);
        let (task, handle) = Task::perform(
            async move { generator.generate(request).await },
            move |outcome| Message::Generated { ticket, outcome },
        )
        .abortable();
        self.submission = Some(handle.abort_on_drop());

        task
    }

    fn reject(&mut self, err: SubmissionError) -> Task<Message> {
        if !err.is_user_facing() {
            tracing::warn!("submission ignored: {err}");
            return Task::none();
        }

        tracing::warn!(error = %err, "submission rejected");
        if self.session.report_error(&err) {
            self.reveal_banner();
        }
        Task::none()
    }

    fn finish(&mut self, ticket: Uuid, outcome: Result<GeneratedNotes, SubmissionError>) {
        let failure = outcome.as_ref().err().map(ToString::to_string);
        let today = Utc::now().date_naive();

        match self.session.resolve(ticket, outcome, today) {
            Resolution::Completed(note) => {
                tracing::info!(
                    submission = %ticket,
                    note = %note.id,
                    title = %note.title,
                    elapsed = %self.elapsed(),
                    "notes ready"
                );
            }
            Resolution::Failed => {
                tracing::warn!(
                    submission = %ticket,
                    error = failure.as_deref().unwrap_or_default(),
                    "notes generation failed"
                );
            }
            Resolution::Stale => {
                tracing::debug!(submission = %ticket, "ignoring stale submission result");
                return;
            }
        }

        self.submission = None;
        self.processing_since = None;
        self.reveal_banner();
    }

    fn reveal_banner(&mut self) {
        self.now = Instant::now();
        self.banner = Some(Reveal::new(self.now));
    }

    fn elapsed(&self) -> String {
        self.processing_since
            .map(|since| format_duration(Instant::now().saturating_duration_since(since)))
            .unwrap_or_default()
    }
}
