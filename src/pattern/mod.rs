//! Training patterns: a setup position followed by a scripted continuation
//!
//! - [`catalogue`]: loading and authoring-time validation of pattern tables
//! - [`store`]: the active pattern and its cursor

pub mod catalogue;
pub mod store;

pub use catalogue::{validate_pattern, Catalogue, CatalogueError};
pub use store::PatternStore;

use serde::{Deserialize, Serialize};

use crate::board::Move;

/// Difficulty tier shown in the pattern picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text commentary shown once a pattern is finished
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    pub opening: String,
    pub strategy: String,
    pub key_points: Vec<String>,
    pub win_reason: String,
}

/// A named exercise.
///
/// `setup` is on the board before training starts; `script` is replayed and
/// validated one move at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub setup: Vec<Move>,
    pub script: Vec<Move>,
    pub analysis: Analysis,
}

impl Pattern {
    pub fn summary(&self) -> PatternSummary {
        PatternSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            difficulty: self.difficulty,
            description: self.description.clone(),
        }
    }

    /// `setup ++ script`, in play order
    pub fn full_sequence(&self) -> impl Iterator<Item = &Move> {
        self.setup.iter().chain(self.script.iter())
    }
}

/// Catalogue listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSummary {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub description: String,
}

/// Metadata of the active pattern plus progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternInfo {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub total_moves: usize,
    pub current_step: usize,
}
