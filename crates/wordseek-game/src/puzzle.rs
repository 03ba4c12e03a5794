use wordseek_core::Grid;

use crate::Placement;

/// A word-search puzzle: the letter grid and its answer key.
///
/// Both parts come from one external payload and stay together for the whole
/// session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<Placement>,
}

impl Puzzle {
    /// Creates a puzzle from a parsed grid and its placements.
    #[must_use]
    pub fn new(grid: Grid, placements: Vec<Placement>) -> Self {
        if !grid.is_rectangular() {
            log::warn!(
                "puzzle grid is not rectangular ({} rows, longest row {})",
                grid.row_count(),
                grid.max_row_len()
            );
        }
        Self { grid, placements }
    }

    /// Parses the textual grid format and pairs it with `placements`.
    #[must_use]
    pub fn from_text(text: &str, placements: Vec<Placement>) -> Self {
        Self::new(Grid::parse(text), placements)
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the answer key in payload order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the words of the answer key in payload order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|p| p.word.as_str())
    }
}
