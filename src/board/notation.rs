//! Letter-column / 1-based-row coordinate notation ("H8")
//!
//! Column is the letter's offset from 'A', row is the number minus one.

use thiserror::Error;

use super::{Pos, MAX_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty coordinate")]
    Empty,

    #[error("invalid column letter in '{0}'")]
    InvalidColumn(String),

    #[error("invalid row number in '{0}'")]
    InvalidRow(String),

    #[error("coordinate '{text}' is outside a {size}x{size} board")]
    OutOfRange { text: String, size: usize },
}

/// Parse "H8" (case-insensitive) into a zero-based position on a board of `size`
pub fn parse_coord(text: &str, size: usize) -> Result<Pos, NotationError> {
    let text = text.trim();
    let mut chars = text.chars();
    let letter = chars.next().ok_or(NotationError::Empty)?;
    if !letter.is_ascii_alphabetic() {
        return Err(NotationError::InvalidColumn(text.to_string()));
    }
    let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;

    let number: usize = chars
        .as_str()
        .parse()
        .map_err(|_| NotationError::InvalidRow(text.to_string()))?;
    if number == 0 {
        return Err(NotationError::InvalidRow(text.to_string()));
    }
    let row = number - 1;

    if row >= size || col >= size || row >= MAX_BOARD_SIZE {
        return Err(NotationError::OutOfRange {
            text: text.to_string(),
            size,
        });
    }
    Ok(Pos::new(row as u8, col as u8))
}

/// Format a position as "H8".
///
/// Columns past 'Z' have no letter and are written as a bracketed number,
/// e.g. "[201]4", so any `Pos` formats without overflow.
pub fn format_coord(pos: Pos) -> String {
    let row = pos.row as u32 + 1;
    match char::from_u32(u32::from(b'A') + u32::from(pos.col)) {
        Some(letter) if letter.is_ascii_uppercase() => format!("{letter}{row}"),
        _ => format!("[{}]{row}", pos.col as u32 + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_center() {
        assert_eq!(parse_coord("H8", 15), Ok(Pos::new(7, 7)));
        assert_eq!(parse_coord("h8", 15), Ok(Pos::new(7, 7)));
        assert_eq!(parse_coord(" A1 ", 15), Ok(Pos::new(0, 0)));
        assert_eq!(parse_coord("O15", 15), Ok(Pos::new(14, 14)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_coord("", 15), Err(NotationError::Empty));
        assert!(matches!(parse_coord("8H", 15), Err(NotationError::InvalidColumn(_))));
        assert!(matches!(parse_coord("H", 15), Err(NotationError::InvalidRow(_))));
        assert!(matches!(parse_coord("H0", 15), Err(NotationError::InvalidRow(_))));
        assert!(matches!(parse_coord("H-1", 15), Err(NotationError::InvalidRow(_))));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(parse_coord("P1", 15), Err(NotationError::OutOfRange { .. })));
        assert!(matches!(parse_coord("A16", 15), Err(NotationError::OutOfRange { .. })));
        assert_eq!(parse_coord("S19", 19), Ok(Pos::new(18, 18)));
        // Rows never wrap into u8 range, whatever size is passed
        assert!(matches!(parse_coord("A300", 400), Err(NotationError::OutOfRange { .. })));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_coord(Pos::new(7, 7)), "H8");
        assert_eq!(format_coord(Pos::new(0, 0)), "A1");
        assert_eq!(format_coord(Pos::new(2, 11)), "L3");
        assert_eq!(format_coord(Pos::new(0, 25)), "Z1");
    }

    #[test]
    fn test_format_past_letter_range() {
        assert_eq!(format_coord(Pos::new(3, 26)), "[27]4");
        assert_eq!(format_coord(Pos::new(3, 200)), "[201]4");
        assert_eq!(format_coord(Pos::new(255, 255)), "[256]256");
    }
}
