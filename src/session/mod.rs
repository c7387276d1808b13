//! Training session: turn tracking and scripted-move validation
//!
//! The session never decides what a good move is. A submission is correct
//! iff its coordinate equals the scripted move at the pattern cursor. Wrong
//! submissions earn a coarse region hint until the configured number of
//! attempts is used up, at which point the answer is revealed and the caller
//! is expected to play it with [`TrainingSession::auto_resolve_current_move`].
//!
//! The session owns only its own state. The [`Board`] and [`PatternStore`]
//! are passed into every operation, and an accepted move updates board,
//! cursor and turn together before the call returns.

pub mod hint;
pub mod labels;

pub use hint::{positional_hint, region_of, RegionHint};
pub use labels::{EnglishLabels, LabelProvider, Message, Region};

use tracing::{debug, info, instrument, warn};

use crate::board::{format_coord, Board, Move, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::config::{ColorAssignment, TrainerConfig};
use crate::pattern::PatternStore;

/// Whose move the script expects next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Automated,
    Complete,
}

/// Result of a session operation: a verdict plus a display message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<V> {
    pub verdict: V,
    pub message: String,
}

/// Verdicts for [`TrainingSession::submit_human_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Coordinate matched the script; the move is on the board
    Correct {
        played: Move,
        complete: bool,
        automated_next: bool,
    },
    /// Coordinate did not match; board and cursor unchanged
    Wrong {
        attempted: Pos,
        hint: String,
        errors: u32,
        remaining: u32,
    },
    /// Attempts exhausted; the caller should demonstrate `answer`
    Reveal { attempted: Pos, answer: Move },
    /// Point is occupied or off the board; not counted as an error
    Unplaceable { attempted: Pos },
    NotYourTurn,
    AlreadyComplete,
}

/// Verdicts for [`TrainingSession::auto_play_opponent_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Played { played: Move, complete: bool },
    HumanTurn,
    AlreadyComplete,
    /// The scripted point could not be played
    Blocked { scripted: Move },
}

pub type SubmitOutcome = Outcome<Submission>;
pub type ReplyOutcome = Outcome<Reply>;

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.verdict, Submission::Correct { .. })
    }

    /// True when the automated side should reply next
    pub fn automated_next(&self) -> bool {
        matches!(self.verdict, Submission::Correct { automated_next: true, .. })
    }

    pub fn is_complete(&self) -> bool {
        matches!(
            self.verdict,
            Submission::Correct { complete: true, .. } | Submission::AlreadyComplete
        )
    }

    /// True when the answer was revealed and should be demonstrated
    pub fn reveals_answer(&self) -> bool {
        matches!(self.verdict, Submission::Reveal { .. })
    }

    pub fn hint(&self) -> Option<&str> {
        match &self.verdict {
            Submission::Wrong { hint, .. } => Some(hint),
            _ => None,
        }
    }
}

impl ReplyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.verdict, Reply::Played { .. })
    }

    pub fn played(&self) -> Option<Move> {
        match self.verdict {
            Reply::Played { played, .. } => Some(played),
            _ => None,
        }
    }
}

/// Snapshot of the error ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorInfo {
    pub error_count: u32,
    pub max_errors: u32,
    pub remaining: u32,
    pub last_rejected: Option<Pos>,
}

#[derive(Debug)]
pub struct TrainingSession {
    board_size: usize,
    max_errors: u32,
    assignment: ColorAssignment,
    labels: Box<dyn LabelProvider>,
    human: Stone,
    automated: Stone,
    turn: Turn,
    error_count: u32,
    last_rejected: Option<Pos>,
}

impl TrainingSession {
    pub fn new(config: &TrainerConfig) -> Self {
        Self::with_labels(config, Box::new(EnglishLabels))
    }

    pub fn with_labels(config: &TrainerConfig, labels: Box<dyn LabelProvider>) -> Self {
        let human = config.color_assignment.human_color(None);
        Self {
            board_size: config.board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE),
            max_errors: config.max_errors.max(1),
            assignment: config.color_assignment,
            labels,
            human,
            automated: human.opponent(),
            turn: Turn::Complete,
            error_count: 0,
            last_rejected: None,
        }
    }

    /// Assign human and automated colors for the active pattern and set the
    /// turn from the next scripted move. Call after every (re)load.
    pub fn initialize_colors(&mut self, store: &PatternStore) {
        let first_mover = store
            .active()
            .and_then(|p| p.script.first())
            .map(|m| m.stone);
        self.human = self.assignment.human_color(first_mover);
        self.automated = self.human.opponent();
        self.turn = self.turn_for(store);
        debug!(human = %self.human, turn = ?self.turn, "colors assigned");
    }

    fn turn_for(&self, store: &PatternStore) -> Turn {
        match store.current_move() {
            None => Turn::Complete,
            Some(m) if m.stone == self.human => Turn::Human,
            Some(_) => Turn::Automated,
        }
    }

    fn outcome<V>(&self, verdict: V, message: Message<'_>) -> Outcome<V> {
        Outcome {
            verdict,
            message: self.labels.message(message),
        }
    }

    /// Check a trainee's coordinate against the scripted move
    #[instrument(skip(self, store, board, pos), fields(pos = %pos))]
    pub fn submit_human_move(
        &mut self,
        store: &mut PatternStore,
        board: &mut Board,
        pos: Pos,
    ) -> SubmitOutcome {
        match self.turn {
            Turn::Complete => {
                return self.outcome(Submission::AlreadyComplete, Message::PatternComplete)
            }
            Turn::Automated => return self.outcome(Submission::NotYourTurn, Message::AutomatedTurn),
            Turn::Human => {}
        }

        let Some(expected) = store.current_move() else {
            return self.outcome(Submission::AlreadyComplete, Message::PatternComplete);
        };

        if expected.stone != self.human {
            warn!(scripted = %expected, human = %self.human, "scripted color does not match the human side");
            return self.outcome(Submission::NotYourTurn, Message::AutomatedTurn);
        }

        if !board.is_placeable(pos) {
            debug!("unplaceable submission");
            return self.outcome(Submission::Unplaceable { attempted: pos }, Message::Unplaceable);
        }

        if pos == expected.pos {
            if !board.place(expected.pos, expected.stone) {
                return self.outcome(Submission::Unplaceable { attempted: pos }, Message::Unplaceable);
            }
            store.advance();
            self.error_count = 0;
            self.last_rejected = None;

            let complete = store.is_complete();
            self.turn = if complete { Turn::Complete } else { Turn::Automated };
            info!(step = store.cursor(), complete, "correct move");

            let message = if complete {
                Message::Correct
            } else {
                Message::CorrectAutomatedNext
            };
            return self.outcome(
                Submission::Correct {
                    played: expected,
                    complete,
                    automated_next: !complete,
                },
                message,
            );
        }

        self.error_count = (self.error_count + 1).min(self.max_errors);
        self.last_rejected = Some(pos);

        if self.error_count >= self.max_errors {
            info!(answer = %expected.pos, "attempts exhausted, revealing answer");
            let coord = format_coord(expected.pos);
            return self.outcome(
                Submission::Reveal {
                    attempted: pos,
                    answer: expected,
                },
                Message::Reveal {
                    max_errors: self.max_errors,
                    coord: &coord,
                },
            );
        }

        let hint = self.positional_hint(expected.pos);
        let remaining = self.max_errors - self.error_count;
        debug!(errors = self.error_count, remaining, "wrong move");
        let message = self.labels.message(Message::Wrong {
            remaining,
            hint: &hint,
        });
        Outcome {
            verdict: Submission::Wrong {
                attempted: pos,
                hint,
                errors: self.error_count,
                remaining,
            },
            message,
        }
    }

    /// Play the scripted move at the cursor for whichever side it belongs
    /// to, then hand the turn to the other side.
    ///
    /// Serves both as the automated reply and as the forced demonstration
    /// after a reveal. Returns `None` when the script is exhausted or the
    /// scripted point cannot be played.
    #[instrument(skip_all)]
    pub fn auto_resolve_current_move(
        &mut self,
        store: &mut PatternStore,
        board: &mut Board,
    ) -> Option<Move> {
        let scripted = store.current_move()?;
        if !board.place(scripted.pos, scripted.stone) {
            warn!(scripted = %scripted, "scripted point is not playable");
            return None;
        }
        store.advance();
        self.error_count = 0;
        self.last_rejected = None;

        self.turn = if store.is_complete() {
            Turn::Complete
        } else if scripted.stone == self.human {
            Turn::Automated
        } else {
            Turn::Human
        };
        debug!(played = %scripted, turn = ?self.turn, "scripted move played");
        Some(scripted)
    }

    /// The automated side's reply, only when it is the automated side's turn
    #[instrument(skip_all)]
    pub fn auto_play_opponent_move(
        &mut self,
        store: &mut PatternStore,
        board: &mut Board,
    ) -> ReplyOutcome {
        match self.turn {
            Turn::Complete => return self.outcome(Reply::AlreadyComplete, Message::PatternComplete),
            Turn::Human => return self.outcome(Reply::HumanTurn, Message::HumanTurn),
            Turn::Automated => {}
        }

        let Some(scripted) = store.current_move() else {
            return self.outcome(Reply::AlreadyComplete, Message::PatternComplete);
        };
        if scripted.stone != self.automated {
            warn!(scripted = %scripted, automated = %self.automated, "scripted color does not match the automated side");
            return self.outcome(Reply::HumanTurn, Message::HumanTurn);
        }

        match self.auto_resolve_current_move(store, board) {
            Some(played) => {
                let complete = self.turn == Turn::Complete;
                let message = if complete {
                    Message::PatternComplete
                } else {
                    Message::AutomatedMoved
                };
                self.outcome(Reply::Played { played, complete }, message)
            }
            None => self.outcome(Reply::Blocked { scripted }, Message::AutomatedBlocked),
        }
    }

    /// Region hint for `pos` on this session's board size
    pub fn positional_hint(&self, pos: Pos) -> String {
        positional_hint(pos, self.board_size, self.labels.as_ref())
    }

    /// Clear the error ladder and re-derive colors and turn.
    ///
    /// Board and cursor resets belong to the caller.
    pub fn reset(&mut self, store: &PatternStore) {
        self.error_count = 0;
        self.last_rejected = None;
        self.initialize_colors(store);
    }

    /// Take back stones until the trainee is to move again.
    ///
    /// Undoes one stone at a time, stepping the cursor back with each, and
    /// stops after removing a human stone. Setup stones are never undone.
    pub fn undo_to_human(&mut self, store: &mut PatternStore, board: &mut Board) -> Vec<Move> {
        let floor = store.setup().len();
        let mut undone = Vec::new();

        while board.history().len() > floor && store.cursor() > 0 {
            let Some(last) = board.undo() else { break };
            store.step_back();
            undone.push(last);
            if last.stone == self.human {
                break;
            }
        }

        self.error_count = 0;
        self.last_rejected = None;
        self.turn = self.turn_for(store);
        debug!(count = undone.len(), turn = ?self.turn, "undo");
        undone
    }

    /// The scripted answer, when the trainee is to move
    pub fn answer(&self, store: &PatternStore) -> Option<Move> {
        match self.turn {
            Turn::Human => store.current_move(),
            _ => None,
        }
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[inline]
    pub fn is_human_turn(&self) -> bool {
        self.turn == Turn::Human
    }

    #[inline]
    pub fn is_automated_turn(&self) -> bool {
        self.turn == Turn::Automated
    }

    pub fn human_color(&self) -> Stone {
        self.human
    }

    pub fn automated_color(&self) -> Stone {
        self.automated
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    pub fn max_errors(&self) -> u32 {
        self.max_errors
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.max_errors - self.error_count
    }

    pub fn last_rejected(&self) -> Option<Pos> {
        self.last_rejected
    }

    pub fn error_info(&self) -> ErrorInfo {
        ErrorInfo {
            error_count: self.error_count,
            max_errors: self.max_errors,
            remaining: self.remaining_attempts(),
            last_rejected: self.last_rejected,
        }
    }

    pub fn labels(&self) -> &dyn LabelProvider {
        self.labels.as_ref()
    }
}
