//! Board structure with move history

use super::{Move, Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::rules::{find_five_line_at_pos, has_five_at_pos};

/// Game board with an undo-capable move log
///
/// Every non-empty cell corresponds to exactly one entry in the history, so
/// `history().len()` always equals the number of stones on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    history: Vec<Move>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Board of `size` lines, clamped to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
    pub fn with_size(size: usize) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            history: Vec::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_range(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position (`Empty` when out of range)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.in_range(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            Stone::Empty
        }
    }

    /// True iff the position is on the board and unoccupied
    #[inline]
    pub fn is_placeable(&self, pos: Pos) -> bool {
        self.in_range(pos) && self.cells[pos.to_index(self.size)] == Stone::Empty
    }

    /// Place a stone and record it in the history.
    ///
    /// Returns false without touching the board when the cell is occupied,
    /// out of range, or `stone` is `Empty`.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone == Stone::Empty || !self.is_placeable(pos) {
            return false;
        }
        self.cells[pos.to_index(self.size)] = stone;
        self.history.push(Move::at(pos, stone));
        true
    }

    /// Remove the most recent stone, returning it
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.cells[last.pos.to_index(self.size)] = Stone::Empty;
        Some(last)
    }

    /// Five-or-more check through a just-placed stone.
    ///
    /// Only the four lines through `pos` are scanned, so this must be called
    /// right after each placement to catch every win.
    #[inline]
    pub fn check_win(&self, pos: Pos, stone: Stone) -> bool {
        has_five_at_pos(self, pos, stone)
    }

    /// The run of five or more through `pos`, if any
    pub fn winning_line(&self, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
        find_five_line_at_pos(self, pos, stone)
    }

    /// Copy of the grid, row-major
    pub fn occupancy_snapshot(&self) -> Vec<Vec<Stone>> {
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.history.clear();
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == Stone::Empty)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .collect()
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
