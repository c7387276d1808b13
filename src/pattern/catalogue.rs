//! Pattern tables
//!
//! Patterns are authored as JSON with moves written `"H8:black"`. Notation is
//! converted to zero-based positions once, when the table is loaded. The
//! authoring invariants (alternating colors, no reused cell, stone balance)
//! are checked by [`Catalogue::validate`], not on load.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{Analysis, Difficulty, Pattern};
use crate::board::{
    format_coord, is_supported_size, parse_coord, Move, NotationError, Stone, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};

const BUILTIN_JSON: &str = include_str!("../../patterns/builtin.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogueError {
    #[error("failed to read catalogue {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("board size {0} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSize(usize),

    #[error("malformed catalogue: {0}")]
    Json(#[from] serde_json::Error),

    #[error("pattern '{pattern}': move '{entry}' is not of the form COORD:COLOR")]
    MalformedMove { pattern: String, entry: String },

    #[error("pattern '{pattern}': unknown color in move '{entry}'")]
    InvalidColor { pattern: String, entry: String },

    #[error("pattern '{pattern}': {source}")]
    Notation {
        pattern: String,
        #[source]
        source: NotationError,
    },

    #[error("duplicate pattern id '{0}'")]
    DuplicateId(String),

    #[error("pattern '{0}' has an empty script")]
    EmptyScript(String),

    #[error("pattern '{pattern}': {coord} is used more than once")]
    Overlap { pattern: String, coord: String },

    #[error("pattern '{pattern}': move {index} should be {expected} but is {found}")]
    Alternation {
        pattern: String,
        index: usize,
        expected: Stone,
        found: Stone,
    },

    #[error("pattern '{pattern}': {black} black vs {white} white stones (black must equal white or lead by one)")]
    StoneBalance {
        pattern: String,
        black: usize,
        white: usize,
    },
}

#[derive(Debug, Deserialize)]
struct RawCatalogue {
    patterns: Vec<RawPattern>,
}

#[derive(Debug, Deserialize)]
struct RawPattern {
    id: String,
    name: String,
    difficulty: Difficulty,
    #[serde(default)]
    description: String,
    #[serde(default)]
    setup: Vec<String>,
    script: Vec<String>,
    #[serde(default)]
    analysis: Analysis,
}

/// Ordered, read-only table of patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    patterns: Vec<Pattern>,
}

impl Catalogue {
    /// The table compiled into the binary, for a board of `size`
    pub fn builtin(size: usize) -> Result<Self, CatalogueError> {
        Self::from_json(BUILTIN_JSON, size)
    }

    pub fn from_json(json: &str, size: usize) -> Result<Self, CatalogueError> {
        if !is_supported_size(size) {
            return Err(CatalogueError::BoardSize(size));
        }
        let raw: RawCatalogue = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        let mut patterns = Vec::with_capacity(raw.patterns.len());

        for entry in raw.patterns {
            if !seen.insert(entry.id.clone()) {
                return Err(CatalogueError::DuplicateId(entry.id));
            }
            patterns.push(convert(entry, size)?);
        }

        debug!(count = patterns.len(), "loaded pattern catalogue");
        Ok(Self { patterns })
    }

    pub fn from_path(path: &Path, size: usize) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, size)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn get(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check every pattern against the authoring invariants
    pub fn validate(&self) -> Result<(), CatalogueError> {
        self.patterns.iter().try_for_each(validate_pattern)
    }
}

fn convert(raw: RawPattern, size: usize) -> Result<Pattern, CatalogueError> {
    let setup = parse_moves(&raw.id, &raw.setup, size)?;
    let script = parse_moves(&raw.id, &raw.script, size)?;
    Ok(Pattern {
        id: raw.id,
        name: raw.name,
        difficulty: raw.difficulty,
        description: raw.description,
        setup,
        script,
        analysis: raw.analysis,
    })
}

fn parse_moves(pattern: &str, entries: &[String], size: usize) -> Result<Vec<Move>, CatalogueError> {
    entries
        .iter()
        .map(|entry| parse_move(pattern, entry, size))
        .collect()
}

fn parse_move(pattern: &str, entry: &str, size: usize) -> Result<Move, CatalogueError> {
    let (coord, color) = entry
        .split_once(':')
        .ok_or_else(|| CatalogueError::MalformedMove {
            pattern: pattern.to_string(),
            entry: entry.to_string(),
        })?;

    let stone = Stone::from_name(color).ok_or_else(|| CatalogueError::InvalidColor {
        pattern: pattern.to_string(),
        entry: entry.to_string(),
    })?;

    let pos = parse_coord(coord, size).map_err(|source| CatalogueError::Notation {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(Move::at(pos, stone))
}

/// Authoring-time consistency check for a single pattern.
///
/// Over `setup ++ script`: the script is non-empty, no cell is used twice,
/// colors alternate starting from the first mover, and black equals white or
/// leads by one.
pub fn validate_pattern(pattern: &Pattern) -> Result<(), CatalogueError> {
    if pattern.script.is_empty() {
        return Err(CatalogueError::EmptyScript(pattern.id.clone()));
    }

    let mut cells = HashSet::new();
    for m in pattern.full_sequence() {
        if !cells.insert(m.pos) {
            return Err(CatalogueError::Overlap {
                pattern: pattern.id.clone(),
                coord: format_coord(m.pos),
            });
        }
    }

    let first_mover = pattern
        .full_sequence()
        .next()
        .map_or(Stone::Black, |m| m.stone);
    for (i, m) in pattern.full_sequence().enumerate() {
        let expected = if i % 2 == 0 { first_mover } else { first_mover.opponent() };
        if m.stone != expected {
            return Err(CatalogueError::Alternation {
                pattern: pattern.id.clone(),
                index: i + 1,
                expected,
                found: m.stone,
            });
        }
    }

    let black = pattern.full_sequence().filter(|m| m.stone == Stone::Black).count();
    let white = pattern.full_sequence().filter(|m| m.stone == Stone::White).count();
    if black != white && black != white + 1 {
        return Err(CatalogueError::StoneBalance {
            pattern: pattern.id.clone(),
            black,
            white,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn single(setup: &str, script: &str) -> String {
        format!(
            r#"{{"patterns": [{{"id": "t", "name": "T", "difficulty": "beginner",
                "setup": [{setup}], "script": [{script}]}}]}}"#
        )
    }

    #[test]
    fn test_builtin_catalogue_loads() {
        let catalogue = Catalogue::builtin(BOARD_SIZE).unwrap();
        assert!(catalogue.len() >= 3);
        let first = catalogue.get("classic_1").unwrap();
        assert_eq!(first.script[0], Move::new(7, 7, Stone::Black));
    }

    #[test]
    fn test_builtin_catalogue_is_consistent() {
        let catalogue = Catalogue::builtin(BOARD_SIZE).unwrap();
        for pattern in catalogue.patterns() {
            validate_pattern(pattern).unwrap_or_else(|e| panic!("{e}"));
        }
    }

    #[test]
    fn test_builtin_scripts_end_in_five() {
        let catalogue = Catalogue::builtin(BOARD_SIZE).unwrap();
        for pattern in catalogue.patterns() {
            let mut board = crate::board::Board::new();
            for m in pattern.full_sequence() {
                assert!(board.place(m.pos, m.stone), "{}: {}", pattern.id, m);
            }
            let last = pattern.script.last().unwrap();
            assert!(board.check_win(last.pos, last.stone), "{} does not finish with five", pattern.id);
        }
    }

    #[test]
    fn test_notation_converted_on_load() {
        let json = single(r#""A1:black""#, r#""C3:white", "O15:black""#);
        let catalogue = Catalogue::from_json(&json, BOARD_SIZE).unwrap();
        let pattern = catalogue.get("t").unwrap();
        assert_eq!(pattern.setup, vec![Move::new(0, 0, Stone::Black)]);
        assert_eq!(
            pattern.script,
            vec![Move::new(2, 2, Stone::White), Move::new(14, 14, Stone::Black)]
        );
        assert_eq!(pattern.analysis, Analysis::default());
    }

    #[test]
    fn test_malformed_entries_rejected() {
        let no_colon = single("", r#""H8""#);
        assert!(matches!(
            Catalogue::from_json(&no_colon, BOARD_SIZE),
            Err(CatalogueError::MalformedMove { .. })
        ));

        let bad_color = single("", r#""H8:red""#);
        assert!(matches!(
            Catalogue::from_json(&bad_color, BOARD_SIZE),
            Err(CatalogueError::InvalidColor { .. })
        ));

        let off_board = single("", r#""Z9:black""#);
        assert!(matches!(
            Catalogue::from_json(&off_board, BOARD_SIZE),
            Err(CatalogueError::Notation { .. })
        ));

        assert!(matches!(
            Catalogue::from_json("{", BOARD_SIZE),
            Err(CatalogueError::Json(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"patterns": [
            {"id": "a", "name": "A", "difficulty": "beginner", "script": ["H8:black"]},
            {"id": "a", "name": "B", "difficulty": "advanced", "script": ["H8:black"]}
        ]}"#;
        assert!(matches!(
            Catalogue::from_json(json, BOARD_SIZE),
            Err(CatalogueError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Catalogue::from_path(Path::new("/nonexistent/patterns.json"), BOARD_SIZE);
        assert!(matches!(result, Err(CatalogueError::Io { .. })));
    }

    fn pattern(setup: Vec<Move>, script: Vec<Move>) -> Pattern {
        Pattern {
            id: "p".to_string(),
            name: "P".to_string(),
            difficulty: Difficulty::Beginner,
            description: String::new(),
            setup,
            script,
            analysis: Analysis::default(),
        }
    }

    #[test]
    fn test_validate_accepts_alternating() {
        let p = pattern(
            vec![Move::new(7, 7, Stone::Black)],
            vec![Move::new(6, 6, Stone::White), Move::new(8, 8, Stone::Black)],
        );
        assert!(validate_pattern(&p).is_ok());
    }

    #[test]
    fn test_validate_overlap_across_setup_and_script() {
        let p = pattern(
            vec![Move::new(7, 7, Stone::Black)],
            vec![Move::new(7, 7, Stone::White)],
        );
        assert!(matches!(
            validate_pattern(&p),
            Err(CatalogueError::Overlap { coord, .. }) if coord == "H8"
        ));
    }

    #[test]
    fn test_validate_alternation() {
        let p = pattern(
            vec![Move::new(7, 7, Stone::Black)],
            vec![Move::new(6, 6, Stone::Black)],
        );
        assert!(matches!(
            validate_pattern(&p),
            Err(CatalogueError::Alternation { index: 2, expected: Stone::White, .. })
        ));
    }

    #[test]
    fn test_validate_balance() {
        // Alternates correctly but white moves first and leads
        let p = pattern(vec![], vec![Move::new(7, 7, Stone::White)]);
        assert!(matches!(
            validate_pattern(&p),
            Err(CatalogueError::StoneBalance { black: 0, white: 1, .. })
        ));
    }

    #[test]
    fn test_validate_empty_script() {
        let p = pattern(vec![Move::new(7, 7, Stone::Black)], vec![]);
        assert!(matches!(validate_pattern(&p), Err(CatalogueError::EmptyScript(_))));
    }

    #[test]
    fn test_rejects_unsupported_board_size() {
        let json = single("", r#""A1:black""#);
        assert!(matches!(Catalogue::from_json(&json, 0), Err(CatalogueError::BoardSize(0))));
        assert!(matches!(Catalogue::from_json(&json, 300), Err(CatalogueError::BoardSize(300))));
        assert!(Catalogue::from_json(&json, 5).is_ok());
        assert!(matches!(Catalogue::builtin(4), Err(CatalogueError::BoardSize(4))));
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalogue = Catalogue::builtin(BOARD_SIZE).unwrap();
        let ids: Vec<_> = catalogue.patterns().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(&ids[..3], &["classic_1", "classic_2", "classic_3"]);
        assert!(catalogue.get("missing").is_none());
        assert!(catalogue.get("classic_1").unwrap().setup.is_empty());
    }
}
