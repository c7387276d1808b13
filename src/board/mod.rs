//! Board representation for the trainer

pub mod board;
pub mod notation;


// Re-exports
pub use board::Board;
pub use notation::{format_coord, parse_coord, NotationError};

use serde::{Deserialize, Serialize};

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;

/// Smallest board a five can fit on
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest board the letter-column notation can address (A-Z)
pub const MAX_BOARD_SIZE: usize = 26;

/// True for sizes the board, notation and `u8` coordinates all support
#[inline]
pub fn is_supported_size(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "black",
            Stone::White => "white",
            Stone::Empty => "empty",
        }
    }

    /// Parse a stone color as written in pattern data ("black" / "white")
    pub fn from_name(name: &str) -> Option<Stone> {
        match name.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Some(Stone::Black),
            "white" | "w" => Some(Stone::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position on the board
///
/// A `Pos` is not tied to a board size; range is checked by the board
/// that receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Checked conversion from signed grid coordinates
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Pos> {
        Pos::is_valid(row, col, size).then(|| Pos::new(row as u8, col as u8))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_coord(*self))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// A placed or scripted stone: (row, column, color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

impl Move {
    #[inline]
    pub fn new(row: u8, col: u8, stone: Stone) -> Self {
        Self {
            pos: Pos::new(row, col),
            stone,
        }
    }

    #[inline]
    pub fn at(pos: Pos, stone: Stone) -> Self {
        Self { pos, stone }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.stone, self.pos)
    }
}
