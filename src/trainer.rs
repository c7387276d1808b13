//! One training game: board, pattern store, session and feedback together

use tracing::{debug, info};

use crate::board::{Board, Move, Pos};
use crate::config::TrainerConfig;
use crate::feedback::{Feedback, FeedbackEvent, FeedbackLog};
use crate::pattern::{Analysis, Catalogue, PatternInfo, PatternStore, PatternSummary};
use crate::session::{
    LabelProvider, Message, Reply, ReplyOutcome, SubmitOutcome, Submission, TrainingSession, Turn,
};

/// What a front end should schedule next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Waiting for the trainee
    Nothing,
    AutoReply,
    /// Answer was revealed; play it for the trainee
    Demonstration,
    Finished,
}

#[derive(Debug)]
pub struct Trainer {
    config: TrainerConfig,
    board: Board,
    store: PatternStore,
    session: TrainingSession,
    feedback: Box<dyn Feedback>,
    winning_line: Option<Vec<Pos>>,
    revealed: bool,
    status: String,
}

impl Trainer {
    pub fn new(config: TrainerConfig, catalogue: Catalogue) -> Self {
        let feedback = Box::new(FeedbackLog::new(config.sound_enabled));
        Self::with_feedback(config, catalogue, feedback)
    }

    pub fn with_feedback(
        config: TrainerConfig,
        catalogue: Catalogue,
        feedback: Box<dyn Feedback>,
    ) -> Self {
        let session = TrainingSession::new(&config);
        Self::from_parts(config, catalogue, session, feedback)
    }

    pub fn with_labels(
        config: TrainerConfig,
        catalogue: Catalogue,
        labels: Box<dyn LabelProvider>,
    ) -> Self {
        let session = TrainingSession::with_labels(&config, labels);
        let feedback = Box::new(FeedbackLog::new(config.sound_enabled));
        Self::from_parts(config, catalogue, session, feedback)
    }

    fn from_parts(
        config: TrainerConfig,
        catalogue: Catalogue,
        session: TrainingSession,
        feedback: Box<dyn Feedback>,
    ) -> Self {
        Self {
            board: Board::with_size(config.board_size),
            store: PatternStore::new(catalogue),
            session,
            feedback,
            winning_line: None,
            revealed: false,
            status: String::new(),
            config,
        }
    }

    /// Load a pattern and start it from its setup position
    pub fn start(&mut self, id: &str) -> bool {
        if !self.store.load_pattern(id) {
            return false;
        }
        self.restart();
        true
    }

    /// Back to the setup position of the active pattern
    pub fn restart(&mut self) {
        self.board.reset();
        self.store.reset_cursor();
        for &setup in self.store.setup() {
            if !self.board.place(setup.pos, setup.stone) {
                debug!(setup = %setup, "setup stone skipped");
            }
        }
        self.session.reset(&self.store);
        self.winning_line = None;
        self.revealed = false;
        self.status = self.turn_message();
        self.feedback.emit(FeedbackEvent::GameStart);
        info!(
            pattern = self.store.active().map(|p| p.id.as_str()).unwrap_or("-"),
            turn = ?self.session.turn(),
            "restart"
        );
    }

    /// Trainee's move at `pos`
    pub fn submit(&mut self, pos: Pos) -> SubmitOutcome {
        let outcome = self
            .session
            .submit_human_move(&mut self.store, &mut self.board, pos);

        match outcome.verdict {
            Submission::Correct { played, complete, .. } => self.placed(played, complete),
            Submission::Wrong { .. } => self.feedback.emit(FeedbackEvent::Error),
            Submission::Reveal { .. } => {
                self.revealed = true;
                self.feedback.emit(FeedbackEvent::Error);
            }
            _ => {}
        }
        self.status = outcome.message.clone();
        outcome
    }

    /// Automated side's scripted reply
    pub fn auto_reply(&mut self) -> ReplyOutcome {
        let outcome = self
            .session
            .auto_play_opponent_move(&mut self.store, &mut self.board);
        if let Reply::Played { played, complete } = outcome.verdict {
            self.placed(played, complete);
        }
        self.status = outcome.message.clone();
        outcome
    }

    /// Play the revealed answer for the trainee
    pub fn demonstrate(&mut self) -> Option<Move> {
        let played = self
            .session
            .auto_resolve_current_move(&mut self.store, &mut self.board)?;
        self.revealed = false;
        let complete = self.session.turn() == Turn::Complete;
        self.placed(played, complete);
        self.status = self.turn_message();
        Some(played)
    }

    /// Take back to the trainee's last decision point
    pub fn undo(&mut self) -> Vec<Move> {
        let undone = self
            .session
            .undo_to_human(&mut self.store, &mut self.board);
        if !undone.is_empty() {
            self.winning_line = None;
            self.revealed = false;
            self.status = self.turn_message();
        }
        undone
    }

    pub fn answer(&self) -> Option<Move> {
        self.session.answer(&self.store)
    }

    pub fn pending(&self) -> Pending {
        if self.revealed {
            return Pending::Demonstration;
        }
        match self.session.turn() {
            Turn::Human => Pending::Nothing,
            Turn::Automated => Pending::AutoReply,
            Turn::Complete => Pending::Finished,
        }
    }

    fn placed(&mut self, played: Move, complete: bool) {
        self.feedback.emit(FeedbackEvent::StonePlaced);
        if let Some(line) = self.board.winning_line(played.pos, played.stone) {
            info!(winner = %played.stone, at = %played.pos, "five in a row");
            self.winning_line = Some(line);
        }
        if complete {
            self.feedback.emit(FeedbackEvent::PatternComplete);
        }
    }

    fn turn_message(&self) -> String {
        let message = match self.session.turn() {
            Turn::Human => Message::HumanTurn,
            Turn::Automated => Message::AutomatedTurn,
            Turn::Complete => Message::PatternComplete,
        };
        self.session.labels().message(message)
    }

    pub fn emit(&mut self, event: FeedbackEvent) {
        self.feedback.emit(event);
    }

    /// Flip sound on or off and return the new state
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = !self.feedback.is_enabled();
        self.feedback.set_enabled(enabled);
        self.config.sound_enabled = enabled;
        enabled
    }

    pub fn sound_enabled(&self) -> bool {
        self.feedback.is_enabled()
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &PatternStore {
        &self.store
    }

    pub fn session(&self) -> &TrainingSession {
        &self.session
    }

    pub fn list_patterns(&self) -> Vec<PatternSummary> {
        self.store.list_patterns()
    }

    pub fn pattern_info(&self) -> Option<PatternInfo> {
        self.store.pattern_info()
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.store.analysis()
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.session.turn() == Turn::Complete
    }

    /// Latest status text
    pub fn status(&self) -> &str {
        &self.status
    }
}
