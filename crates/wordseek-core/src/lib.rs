//! Core data structures for word-search puzzles.
//!
//! This crate provides the fundamental types shared by the game engine and the
//! application shell:
//!
//! - [`position`]: zero-based `(row, col)` cell coordinates
//! - [`grid`]: the letter grid and its textual format
//! - [`line`]: straight-line (horizontal, vertical, diagonal) paths between two cells
//!
//! # Examples
//!
//! ```
//! use wordseek_core::{Grid, Line, Position};
//!
//! let grid = Grid::parse("C A T\nX Y Z");
//! assert_eq!(grid.cell(Position::new(0, 2)), Some("T"));
//!
//! let line = Line::new(Position::new(0, 0), Position::new(0, 2)).unwrap();
//! let word: String = line.cells().filter_map(|pos| grid.cell(pos)).collect();
//! assert_eq!(word, "CAT");
//! ```

pub mod grid;
pub mod line;
pub mod position;

pub use self::{
    grid::Grid,
    line::{Direction, Line, LineCells},
    position::Position,
};
