//! Application state and the iced entry point.

use std::sync::Arc;
use std::time::Duration;

use iced::time::{self, Instant};
use iced::{Size, Subscription, Task, Theme, task, window};
use vidnotes_core::{AppConfig, NoteBook, NotesGenerator, Session, SimulatedGenerator};

use crate::ui::transition::{Reveal, TabTransition};

mod message;
mod update;
mod view;

pub use message::Message;

pub const TITLE: &str = "YouTube Notes AI";

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const SPINNER_TICKS: [char; 8] = ['⠁', '⠂', '⠄', '⡀', '⢀', '⠠', '⠐', '⠈'];
const SPINNER_STEP_MS: u128 = 80;

pub struct App {
    session: Session,
    generator: Arc<dyn NotesGenerator>,
    max_upload_bytes: u64,
    transition: TabTransition,
    /// Running banner reveal; `None` once it has settled.
    banner: Option<Reveal>,
    processing_since: Option<Instant>,
    now: Instant,
    /// Aborts the in-flight generation when dropped.
    submission: Option<task::Handle>,
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(config: AppConfig) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the config is consumed on the first call.
    let boot_state = RefCell::new(Some(config));
    let boot = move || {
        let config = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(960.0, 760.0),
            min_size: Some(Size::new(560.0, 480.0)),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let notes = if config.notes.seed_placeholders {
            NoteBook::with_placeholders()
        } else {
            NoteBook::new()
        };
        let generator = Arc::new(SimulatedGenerator::new(config.submission.delay()));

        (
            Self::with_generator(
                Session::new(notes),
                generator,
                config.submission.max_upload_bytes(),
            ),
            Task::none(),
        )
    }

    fn with_generator(
        session: Session,
        generator: Arc<dyn NotesGenerator>,
        max_upload_bytes: u64,
    ) -> Self {
        let now = Instant::now();
        Self {
            transition: TabTransition::entering(session.active_tab(), now),
            session,
            generator,
            max_upload_bytes,
            banner: None,
            processing_since: None,
            now,
            submission: None,
        }
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn is_animating(&self) -> bool {
        self.session.is_processing() || self.transition.is_animating() || self.banner.is_some()
    }

    fn spinner(&self) -> char {
        let Some(since) = self.processing_since else {
            return SPINNER_TICKS[0];
        };
        let step = self.now.saturating_duration_since(since).as_millis() / SPINNER_STEP_MS;
        SPINNER_TICKS[(step % SPINNER_TICKS.len() as u128) as usize]
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(ticket) = self.session.cancel() {
            tracing::info!(submission = %ticket.id, "cancelling pending submission");
        }
    }
}
