use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::{
    error::SubmissionError,
    format::format_duration,
    submission::{GeneratedNotes, SubmissionRequest},
};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

/// Turns a submitted video into notes.
///
/// Implementations run off the UI thread; the caller owns cancellation by
/// dropping or aborting the returned future.
#[async_trait]
pub trait NotesGenerator: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    async fn generate(&self, request: SubmissionRequest)
    -> Result<GeneratedNotes, SubmissionError>;
}

/// Stand-in generator: waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedGenerator {
    delay: Duration,
}

impl Default for SimulatedGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl SimulatedGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl NotesGenerator for SimulatedGenerator {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn generate(
        &self,
        request: SubmissionRequest,
    ) -> Result<GeneratedNotes, SubmissionError> {
        let started = Instant::now();
        tracing::debug!(
            submission = %request.id,
            origin = request.origin().tag(),
            source = %request.source.describe(),
            "simulating notes generation"
        );

        tokio::time::sleep(self.delay).await;

        tracing::debug!(
            submission = %request.id,
            elapsed = %format_duration(started.elapsed()),
            "simulated generation finished"
        );
        Ok(GeneratedNotes::for_origin(request.origin()))
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc};

    use super::*;
    use crate::{
        link::YoutubeLink,
        media::VideoFile,
        submission::{SubmissionOrigin, VideoSource},
    };

    fn link_request() -> SubmissionRequest {
        let link = YoutubeLink::parse("https://www.youtube.com/watch?v=abc123").unwrap();
        SubmissionRequest::new(VideoSource::Link(link))
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_only_after_the_delay() {
        let generator = SimulatedGenerator::default();
        let handle = tokio::spawn(async move { generator.generate(link_request()).await });

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(!handle.is_finished());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let notes = handle.await.unwrap().unwrap();
        assert_eq!(notes.origin, SubmissionOrigin::Link);
        assert_eq!(notes.title, "New Notes (link)");
        assert!(notes.message.contains("YouTube Link"));
    }

    #[tokio::test(start_paused = true)]
    async fn file_submissions_use_the_file_tag() {
        let generator: Arc<dyn NotesGenerator> =
            Arc::new(SimulatedGenerator::new(Duration::from_millis(10)));
        let file = VideoFile::inspect(PathBuf::from("/tmp/clip.mp4"), 1, 10).unwrap();

        let notes = generator
            .generate(SubmissionRequest::new(VideoSource::File(file)))
            .await
            .unwrap();
        assert_eq!(notes.title, "New Notes (file)");
        assert_eq!(notes.message, "Your PDF notes are ready! (Local File)");
    }
}
