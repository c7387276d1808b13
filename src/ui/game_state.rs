//! Window-side state: the trainer plus delayed automated actions

use std::time::{Duration, Instant};

use crate::board::Pos;
use crate::feedback::FeedbackEvent;
use crate::session::Submission;
use crate::trainer::{Pending, Trainer};

/// Automated action waiting for its delay to pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub action: Pending,
    pub due: Instant,
}

/// Everything the window shows besides the board itself
pub struct GameState {
    pub trainer: Trainer,
    pub scheduled: Option<Scheduled>,
    /// Hints and verdicts for the current attempt, newest last
    pub hint_log: Vec<String>,
    /// Answer marker requested with "Show Answer"
    pub shown_answer: Option<Pos>,
    pub selected: Option<String>,
    reply_delay: Duration,
    demo_delay: Duration,
}

impl GameState {
    pub fn new(trainer: Trainer) -> Self {
        let config = trainer.config();
        let reply_delay = Duration::from_millis(config.auto_reply_delay_ms);
        let demo_delay = Duration::from_millis(config.demo_delay_ms);
        Self {
            trainer,
            scheduled: None,
            hint_log: Vec::new(),
            shown_answer: None,
            selected: None,
            reply_delay,
            demo_delay,
        }
    }

    pub fn start(&mut self, id: &str) -> bool {
        if !self.trainer.start(id) {
            return false;
        }
        self.selected = Some(id.to_string());
        self.clear_attempt();
        self.schedule(Instant::now());
        true
    }

    pub fn restart(&mut self) {
        self.trainer.emit(FeedbackEvent::ButtonClick);
        self.trainer.restart();
        self.clear_attempt();
        self.schedule(Instant::now());
    }

    pub fn undo(&mut self) {
        self.trainer.emit(FeedbackEvent::ButtonClick);
        if !self.trainer.undo().is_empty() {
            self.clear_attempt();
            self.schedule(Instant::now());
        }
    }

    pub fn show_answer(&mut self) {
        self.trainer.emit(FeedbackEvent::ButtonClick);
        self.shown_answer = self.trainer.answer().map(|m| m.pos);
    }

    pub fn click(&mut self, pos: Pos) {
        if self.is_busy() {
            return;
        }
        let outcome = self.trainer.submit(pos);
        match &outcome.verdict {
            Submission::Correct { .. } => self.clear_attempt(),
            Submission::Wrong { .. } | Submission::Reveal { .. } => {
                self.hint_log.push(outcome.message.clone())
            }
            _ => {}
        }
        self.schedule(Instant::now());
    }

    /// True while an automated move is queued
    pub fn is_busy(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Run the queued action once its delay has passed
    pub fn tick(&mut self, now: Instant) {
        let Some(scheduled) = self.scheduled else {
            return;
        };
        if now < scheduled.due {
            return;
        }
        self.scheduled = None;
        match scheduled.action {
            Pending::AutoReply => {
                self.trainer.auto_reply();
            }
            Pending::Demonstration => {
                self.trainer.demonstrate();
                self.clear_attempt();
            }
            Pending::Nothing | Pending::Finished => {}
        }
        self.schedule(now);
    }

    fn schedule(&mut self, now: Instant) {
        let delay = match self.trainer.pending() {
            Pending::AutoReply => self.reply_delay,
            Pending::Demonstration => self.demo_delay,
            Pending::Nothing | Pending::Finished => {
                self.scheduled = None;
                return;
            }
        };
        self.scheduled = Some(Scheduled {
            action: self.trainer.pending(),
            due: now + delay,
        });
    }

    fn clear_attempt(&mut self) {
        self.hint_log.clear();
        self.shown_answer = None;
    }
}
