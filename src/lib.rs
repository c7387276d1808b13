//! Gomoku endgame trainer
//!
//! Replays scripted winning sequences and checks the trainee's moves
//! against them:
//! - 15x15 board by default, five in a row wins
//! - The trainee plays one color, the computer replays the other side
//! - A wrong move earns a region hint ("upper left")
//! - After three wrong moves the answer is revealed and played
//!
//! # Architecture
//!
//! - [`board`]: grid state, move history and coordinate notation
//! - [`rules`]: line detection for five in a row
//! - [`pattern`]: pattern catalogue and script cursor
//! - [`session`]: turn tracking and move validation
//! - [`trainer`]: everything above wired into one game
//! - [`feedback`]: sound/animation cues
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku_trainer::{Catalogue, Trainer, TrainerConfig, BOARD_SIZE};
//!
//! let catalogue = Catalogue::builtin(BOARD_SIZE).unwrap();
//! let mut trainer = Trainer::new(TrainerConfig::default(), catalogue);
//! assert!(trainer.start("classic_1"));
//!
//! // The computer opens, then the trainee answers
//! trainer.auto_reply();
//! let answer = trainer.answer().unwrap();
//! assert!(trainer.submit(answer.pos).is_success());
//! ```

pub mod board;
pub mod config;
pub mod feedback;
pub mod pattern;
pub mod rules;
pub mod session;
pub mod trainer;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{format_coord, parse_coord, Board, Move, Pos, Stone, BOARD_SIZE};
pub use config::{ColorAssignment, TrainerConfig};
pub use feedback::{Feedback, FeedbackEvent, FeedbackLog};
pub use pattern::{Catalogue, CatalogueError, PatternStore};
pub use session::{Reply, Submission, TrainingSession, Turn};
pub use trainer::{Pending, Trainer};
