//! Editable inputs for the cifra (lyric sheet) tools: the tab grid and the
//! strumming pattern. Rendering lives in the renderer module.

use serde::{Deserialize, Serialize};

use crate::model::STRING_COUNT;

pub const TAB_GRID_COLUMNS: usize = 8;

/// Longest value a grid cell accepts, in characters.
pub const TAB_CELL_MAX_CHARS: usize = 2;

/// Hand-entered tablature: 6 strings (high e first) by 8 steps.
///
/// Deserialized grids go through [`TabGrid::set`], so stored JSON obeys the
/// same cell rules as typed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TabGridCells")]
pub struct TabGrid {
    cells: [[String; TAB_GRID_COLUMNS]; STRING_COUNT],
}

#[derive(Deserialize)]
struct TabGridCells {
    cells: Vec<Vec<String>>,
}

impl TryFrom<TabGridCells> for TabGrid {
    type Error = String;

    fn try_from(raw: TabGridCells) -> Result<Self, Self::Error> {
        let mut grid = TabGrid::new();
        for (row, values) in raw.cells.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                if !grid.set(row, col, value) {
                    return Err(format!("invalid tab cell ({}, {}): {:?}", row, col, value));
                }
            }
        }
        Ok(grid)
    }
}

impl TabGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one cell. Values longer than two characters are rejected and the
    /// cell keeps its previous content; accepted values are upper-cased
    /// (`x` → `X`). Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: &str) -> bool {
        if value.chars().count() > TAB_CELL_MAX_CHARS {
            return false;
        }
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value.to_uppercase();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String; TAB_GRID_COLUMNS]> {
        self.cells.iter()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(String::is_empty)
    }
}

/// One strum in a rhythm pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RhythmMove {
    Down,
    Up,
    Mute,
    Pause,
}

/// Longest pattern the rhythm strip holds.
pub const MAX_RHYTHM_MOVES: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RhythmMoves")]
pub struct RhythmPattern {
    moves: Vec<RhythmMove>,
}

#[derive(Deserialize)]
struct RhythmMoves {
    moves: Vec<RhythmMove>,
}

impl TryFrom<RhythmMoves> for RhythmPattern {
    type Error = String;

    fn try_from(raw: RhythmMoves) -> Result<Self, Self::Error> {
        if raw.moves.len() > MAX_RHYTHM_MOVES {
            return Err(format!(
                "rhythm pattern has {} moves, at most {} allowed",
                raw.moves.len(),
                MAX_RHYTHM_MOVES
            ));
        }
        Ok(Self { moves: raw.moves })
    }
}

impl RhythmPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move; refused once the pattern is full.
    pub fn push(&mut self, m: RhythmMove) -> bool {
        if self.moves.len() >= MAX_RHYTHM_MOVES {
            return false;
        }
        self.moves.push(m);
        true
    }

    pub fn remove_last(&mut self) -> Option<RhythmMove> {
        self.moves.pop()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn moves(&self) -> &[RhythmMove] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
