//! Positional hints: which third of the board, by row and by column

use super::labels::{LabelProvider, Region};
use crate::board::Pos;

/// Zone of a coordinate on a 3x3 split of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHint {
    pub row: Region,
    pub col: Region,
}

/// Split each axis into thirds using integer `size / 3` and `2 * size / 3`
pub fn region_of(pos: Pos, size: usize) -> RegionHint {
    let third = |v: usize| {
        if v < size / 3 {
            0
        } else if v < 2 * size / 3 {
            1
        } else {
            2
        }
    };
    let row = [Region::Upper, Region::Middle, Region::Lower][third(pos.row as usize)];
    let col = [Region::Left, Region::Center, Region::Right][third(pos.col as usize)];
    RegionHint { row, col }
}

/// "row-zone column-zone" description of `pos`, e.g. "upper left"
pub fn positional_hint(pos: Pos, size: usize, labels: &dyn LabelProvider) -> String {
    let hint = region_of(pos, size);
    labels.area(&labels.region(hint.row), &labels.region(hint.col))
}
