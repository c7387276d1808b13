//! Active pattern selection and script cursor

use tracing::{debug, info};

use super::{Analysis, Catalogue, Pattern, PatternInfo, PatternSummary};
use crate::board::Move;

/// Holds the catalogue, the active pattern and a cursor into its script.
///
/// Script moves with index below the cursor are resolved.
#[derive(Debug, Clone)]
pub struct PatternStore {
    catalogue: Catalogue,
    active: Option<usize>,
    cursor: usize,
}

impl PatternStore {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            active: None,
            cursor: 0,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn list_patterns(&self) -> Vec<PatternSummary> {
        self.catalogue.patterns().iter().map(Pattern::summary).collect()
    }

    /// Activate a pattern and rewind its cursor.
    ///
    /// Unknown ids leave the current selection untouched.
    pub fn load_pattern(&mut self, id: &str) -> bool {
        match self.catalogue.patterns().iter().position(|p| p.id == id) {
            Some(idx) => {
                self.active = Some(idx);
                self.cursor = 0;
                info!(pattern = id, "pattern loaded");
                true
            }
            None => {
                debug!(pattern = id, "unknown pattern id");
                false
            }
        }
    }

    pub fn active(&self) -> Option<&Pattern> {
        self.active.map(|idx| &self.catalogue.patterns()[idx])
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn script(&self) -> &[Move] {
        self.active().map(|p| p.script.as_slice()).unwrap_or_default()
    }

    /// The scripted move at the cursor
    pub fn current_move(&self) -> Option<Move> {
        self.script().get(self.cursor).copied()
    }

    /// The scripted move after the current one
    pub fn peek_next_move(&self) -> Option<Move> {
        self.script().get(self.cursor + 1).copied()
    }

    pub fn advance(&mut self) {
        if self.cursor < self.script().len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor back one step (no-op at the start)
    pub fn step_back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// True once every scripted move is resolved, or when nothing is loaded
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.script().len()
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Setup placements of the active pattern
    pub fn setup(&self) -> &[Move] {
        self.active().map(|p| p.setup.as_slice()).unwrap_or_default()
    }

    pub fn pattern_info(&self) -> Option<PatternInfo> {
        self.active().map(|p| PatternInfo {
            id: p.id.clone(),
            name: p.name.clone(),
            difficulty: p.difficulty,
            description: p.description.clone(),
            total_moves: p.script.len(),
            current_step: self.cursor,
        })
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.active().map(|p| &p.analysis)
    }
}
