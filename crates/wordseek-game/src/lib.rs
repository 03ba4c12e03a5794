//! Word-search game engine.
//!
//! This crate turns pointer gestures on a [`Grid`](wordseek_core::Grid) into
//! found words:
//!
//! - [`Puzzle`]: a grid together with its answer key ([`Placement`]s)
//! - [`Selection`]: the in-progress anchor → current line selection
//! - [`find_match`]: endpoint matching against the answer key, in either direction
//! - [`project_found`] / [`SolvedCells`]: which cells belong to solved words
//! - [`Game`]: a session tying the above together
//!
//! # Example
//!
//! ```
//! use wordseek_core::{Grid, Position};
//! use wordseek_game::{Game, Placement, Puzzle};
//!
//! let grid = Grid::parse("C A T\nX Y Z");
//! let cat = Placement::new("CAT", Position::new(0, 0), Position::new(0, 2));
//! let mut game = Game::new(Puzzle::new(grid, vec![cat]));
//!
//! game.begin_selection(Position::new(0, 2));
//! let found = game.end_selection(Position::new(0, 0));
//!
//! assert_eq!(found.map(|f| f.word), Some("CAT".to_owned()));
//! assert!(game.is_solved());
//! ```

pub use self::{found::*, game::*, matcher::*, placement::*, puzzle::*, selection::*};

mod found;
mod game;
mod matcher;
mod placement;
mod puzzle;
mod selection;
