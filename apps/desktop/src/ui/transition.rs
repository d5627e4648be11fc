//! Enter/exit animation for the tab panel and the result banner.
//!
//! A tab change first plays the exit of the shown panel, then swaps the panel
//! and plays the enter of the new one.

use std::time::Duration;

use iced::time::Instant;
use vidnotes_core::Tab;

pub const EXIT_DURATION: Duration = Duration::from_millis(300);
pub const ENTER_DURATION: Duration = Duration::from_millis(500);
pub const SLIDE_DISTANCE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    /// Vertical displacement in logical pixels, positive is down.
    pub offset_y: f32,
}

impl Frame {
    pub const VISIBLE: Frame = Frame {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in(t: f32) -> f32 {
    t.powi(3)
}

/// Fades in while rising from `SLIDE_DISTANCE` below.
pub fn enter_frame(elapsed: Duration) -> Frame {
    let e = ease_out(progress(elapsed, ENTER_DURATION));
    Frame {
        opacity: e,
        offset_y: SLIDE_DISTANCE * (1.0 - e),
    }
}

/// Fades out while rising `SLIDE_DISTANCE` above.
pub fn exit_frame(elapsed: Duration) -> Frame {
    let e = ease_in(progress(elapsed, EXIT_DURATION));
    Frame {
        opacity: 1.0 - e,
        offset_y: -SLIDE_DISTANCE * e,
    }
}

/// Backdates an exit so that its first frame has `opacity`.
fn exit_started_at(opacity: f32, now: Instant) -> Instant {
    let t = (1.0 - opacity).clamp(0.0, 1.0).cbrt();
    now.checked_sub(EXIT_DURATION.mul_f32(t)).unwrap_or(now)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Exiting { to: Tab, started: Instant },
    Entering { started: Instant },
}

#[derive(Debug, Clone)]
pub struct TabTransition {
    shown: Tab,
    phase: Phase,
}

impl TabTransition {
    /// Starts with `tab` playing its enter animation.
    pub fn entering(tab: Tab, now: Instant) -> Self {
        Self {
            shown: tab,
            phase: Phase::Entering { started: now },
        }
    }

    /// The tab whose panel is currently rendered.
    pub fn shown(&self) -> Tab {
        self.shown
    }

    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn start(&mut self, to: Tab, now: Instant) {
        self.phase = match self.phase {
            Phase::Exiting { started, .. } => Phase::Exiting { to, started },
            _ if to == self.shown => return,
            Phase::Entering { started } => {
                // Pick up the exit at the opacity the panel has reached.
                let opacity = enter_frame(now.saturating_duration_since(started)).opacity;
                Phase::Exiting {
                    to,
                    started: exit_started_at(opacity, now),
                }
            }
            Phase::Idle => Phase::Exiting { to, started: now },
        };
    }

    pub fn advance(&mut self, now: Instant) {
        match self.phase {
            Phase::Exiting { to, started }
                if now.saturating_duration_since(started) >= EXIT_DURATION =>
            {
                self.shown = to;
                self.phase = Phase::Entering { started: now };
            }
            Phase::Entering { started }
                if now.saturating_duration_since(started) >= ENTER_DURATION =>
            {
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }

    pub fn frame(&self, now: Instant) -> Frame {
        match self.phase {
            Phase::Idle => Frame::VISIBLE,
            Phase::Exiting { started, .. } => exit_frame(now.saturating_duration_since(started)),
            Phase::Entering { started } => enter_frame(now.saturating_duration_since(started)),
        }
    }
}

/// One-shot enter animation, used by the result banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    started: Instant,
}

impl Reveal {
    pub fn new(started: Instant) -> Self {
        Self { started }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < ENTER_DURATION
    }

    pub fn frame(&self, now: Instant) -> Frame {
        enter_frame(now.saturating_duration_since(self.started))
    }
}
