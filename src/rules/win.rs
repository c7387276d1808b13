//! Five-in-a-row detection
//!
//! Overlines (six or more) count as a win. Detection is incremental: only the
//! four lines through the stone that was just placed are examined.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count same-colored stones stepping away from `pos` along `(dr, dc)`,
/// not including `pos` itself.
#[inline]
fn run_length(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while Pos::is_valid(r, c, size) && board.get(Pos::new(r as u8, c as u8)) == color {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Longest line through `pos` for `color`, counting `pos` itself.
pub fn longest_line_at_pos(board: &Board, pos: Pos, color: Stone) -> usize {
    if color == Stone::Empty || !board.in_range(pos) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            1 + run_length(board, pos, color, dr, dc) + run_length(board, pos, color, -dr, -dc)
        })
        .max()
        .unwrap_or(0)
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    longest_line_at_pos(board, pos, color) >= 5
}

/// Positions of the five-or-more line through `pos`, ordered from one end
/// to the other. Used for highlighting the winning stones.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || !board.in_range(pos) {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, color, -dr, -dc) as i32;
        let forward = run_length(board, pos, color, dr, dc) as i32;
        if back + forward + 1 >= 5 {
            let line = (-back..=forward)
                .map(|i| Pos::new((pos.row as i32 + dr * i) as u8, (pos.col as i32 + dc * i) as u8))
                .collect();
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place a run of `len` stones through (7, 7) along `dir`, starting
    /// `offset` cells before the center, and return the board.
    fn board_with_run(dir: (i32, i32), offset: i32, len: i32, color: Stone) -> Board {
        let mut board = Board::new();
        for i in 0..len {
            let k = i - offset;
            let pos = Pos::new((7 + dir.0 * k) as u8, (7 + dir.1 * k) as u8);
            assert!(board.place(pos, color));
        }
        board
    }

    #[test]
    fn test_run_lengths_in_every_direction() {
        for &dir in &DIRECTIONS {
            for len in 1..=6 {
                // Center stone placed last sits at the start of the run
                let board = board_with_run(dir, 0, len, Stone::Black);
                let center = Pos::new(7, 7);
                assert_eq!(
                    has_five_at_pos(&board, center, Stone::Black),
                    len >= 5,
                    "dir {:?} len {}",
                    dir,
                    len
                );
                assert_eq!(longest_line_at_pos(&board, center, Stone::Black), len as usize);
            }
        }
    }

    #[test]
    fn test_no_stones_no_win() {
        let board = Board::new();
        assert!(!has_five_at_pos(&board, Pos::new(7, 7), Stone::Black));
        assert_eq!(longest_line_at_pos(&board, Pos::new(7, 7), Stone::White), 1);
    }

    #[test]
    fn test_win_completed_from_the_middle() {
        // Stone placed in the middle joins two shorter runs
        for &dir in &DIRECTIONS {
            for offset in 1..=3 {
                let board = board_with_run(dir, offset, 5, Stone::White);
                assert!(
                    has_five_at_pos(&board, Pos::new(7, 7), Stone::White),
                    "dir {:?} offset {}",
                    dir,
                    offset
                );
            }
            let four = board_with_run(dir, 2, 4, Stone::White);
            assert!(!has_five_at_pos(&four, Pos::new(7, 7), Stone::White));
        }
    }

    #[test]
    fn test_overline_wins() {
        for &dir in &DIRECTIONS {
            let board = board_with_run(dir, 3, 6, Stone::Black);
            assert!(has_five_at_pos(&board, Pos::new(7, 7), Stone::Black));
        }
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new();
        for col in [3, 4, 6, 7] {
            board.place(Pos::new(7, col), Stone::Black);
        }
        board.place(Pos::new(7, 5), Stone::White);
        board.place(Pos::new(7, 8), Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(7, 8), Stone::Black));
        assert!(!has_five_at_pos(&board, Pos::new(7, 5), Stone::White));
    }

    #[test]
    fn test_other_color_not_counted() {
        let board = board_with_run((0, 1), 0, 5, Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(7, 7), Stone::White));
        assert!(!has_five_at_pos(&board, Pos::new(7, 7), Stone::Empty));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(14, i), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(14, 4), Stone::Black));
        assert!(has_five_at_pos(&board, Pos::new(14, 0), Stone::Black));
    }

    #[test]
    fn test_five_at_corner_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(10 + i, 14 - i), Stone::White);
        }
        assert!(has_five_at_pos(&board, Pos::new(14, 10), Stone::White));
    }

    #[test]
    fn test_out_of_range_is_not_a_win() {
        let board = board_with_run((1, 0), 0, 5, Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(15, 7), Stone::Black));
    }

    #[test]
    fn test_find_line_is_ordered() {
        let board = board_with_run((1, -1), 2, 5, Stone::Black);
        let line = find_five_line_at_pos(&board, Pos::new(7, 7), Stone::Black).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line.first(), Some(&Pos::new(5, 9)));
        assert_eq!(line.last(), Some(&Pos::new(9, 5)));
        assert!(line.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_find_line_none_for_four() {
        let board = board_with_run((1, 1), 0, 4, Stone::Black);
        assert!(find_five_line_at_pos(&board, Pos::new(7, 7), Stone::Black).is_none());
    }
}
