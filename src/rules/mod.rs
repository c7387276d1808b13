//! Game rules for the trainer
//!
//! Standard Gomoku: five or more in a row wins. No captures, no forbidden
//! moves; scripted play decides everything else.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line_at_pos, has_five_at_pos, longest_line_at_pos, DIRECTIONS};
