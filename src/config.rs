//! Trainer configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::board::MIN_BOARD_SIZE;
use crate::board::{is_supported_size, Stone, BOARD_SIZE, MAX_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSize(usize),

    #[error("max_errors must be at least 1")]
    NoAttempts,
}

/// Which color the trainee plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorAssignment {
    /// Trainee takes the color that does not open the script, so the
    /// automated side always plays first
    #[default]
    OppositeOfFirstMover,
    AlwaysBlack,
    AlwaysWhite,
}

impl ColorAssignment {
    /// Resolve to the human color given the script's first mover
    pub fn human_color(self, first_mover: Option<Stone>) -> Stone {
        match self {
            ColorAssignment::AlwaysBlack => Stone::Black,
            ColorAssignment::AlwaysWhite => Stone::White,
            ColorAssignment::OppositeOfFirstMover => match first_mover {
                Some(stone) if stone != Stone::Empty => stone.opponent(),
                _ => Stone::White,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub board_size: usize,

    /// Wrong submissions allowed before the answer is revealed
    pub max_errors: u32,

    pub color_assignment: ColorAssignment,

    /// Pause before the automated reply, GUI only
    pub auto_reply_delay_ms: u64,

    /// Pause before a forced demonstration, GUI only
    pub demo_delay_ms: u64,

    pub sound_enabled: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            max_errors: 3,
            color_assignment: ColorAssignment::default(),
            auto_reply_delay_ms: 800,
            demo_delay_ms: 1000,
            sound_enabled: true,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_supported_size(self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.max_errors == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }
}
