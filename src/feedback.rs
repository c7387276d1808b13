//! Audible/visual feedback cues
//!
//! The core never plays sound itself. It emits [`FeedbackEvent`]s into a
//! [`Feedback`] sink owned by the caller; a front end can turn them into
//! audio, animation, or nothing at all.

use std::fmt;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackEvent {
    GameStart,
    StonePlaced,
    Error,
    PatternComplete,
    ButtonClick,
}

impl fmt::Display for FeedbackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedbackEvent::GameStart => "game_start",
            FeedbackEvent::StonePlaced => "stone_placed",
            FeedbackEvent::Error => "error",
            FeedbackEvent::PatternComplete => "pattern_complete",
            FeedbackEvent::ButtonClick => "button_click",
        };
        f.write_str(name)
    }
}

pub trait Feedback: fmt::Debug {
    fn emit(&mut self, event: FeedbackEvent);
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

/// Events kept by [`FeedbackLog`]; older ones are dropped first
pub const FEEDBACK_WINDOW: usize = 64;

/// Records the most recent emitted events; the default sink
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    enabled: bool,
    events: Vec<FeedbackEvent>,
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FeedbackLog {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    /// Drain recorded events, e.g. once per GUI frame
    pub fn take(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Flip the enabled flag and return the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

impl Feedback for FeedbackLog {
    fn emit(&mut self, event: FeedbackEvent) {
        if !self.enabled {
            return;
        }
        debug!(%event, "feedback");
        if self.events.len() >= FEEDBACK_WINDOW {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl Feedback for Muted {
    fn emit(&mut self, _event: FeedbackEvent) {}

    fn set_enabled(&mut self, _enabled: bool) {}

    fn is_enabled(&self) -> bool {
        false
    }
}
