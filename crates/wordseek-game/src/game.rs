use std::collections::BTreeSet;

use wordseek_core::{Grid, Position};

use crate::{
    ClickOutcome, FoundPath, Placement, Puzzle, Selection, SolvedCells, find_match, project_found,
};

/// Notification that a selection matched a placement.
///
/// Emitted on every matching selection, including re-selections of a word that
/// is already solved. Consumers that need exactly-once delivery should check
/// [`WordFound::newly_solved`] or de-duplicate on `word`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFound {
    /// The matched word.
    pub word: String,
    /// Index of the matched placement in the answer key.
    pub index: usize,
    /// `false` if the word was already in the solved set.
    pub newly_solved: bool,
}

/// Number of solved placements out of all placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Placements whose word is solved.
    pub found: usize,
    /// All placements in the answer key.
    pub total: usize,
}

/// A word-search session.
///
/// Owns the puzzle, the selection gesture and the set of solved words. Loading
/// a new puzzle replaces all three.
///
/// # Example
///
/// ```
/// use wordseek_core::Position;
/// use wordseek_game::{Game, Placement, Puzzle};
///
/// let puzzle = Puzzle::from_text(
///     "C A T\nX Y Z",
///     vec![Placement::new("CAT", Position::new(0, 0), Position::new(0, 2))],
/// );
/// let mut game = Game::new(puzzle);
///
/// // Diagonal selection with no word on it.
/// game.begin_selection(Position::new(0, 0));
/// game.extend_selection(Position::new(1, 1));
/// assert!(game.end_selection(Position::new(1, 1)).is_none());
/// assert_eq!(game.progress().found, 0);
///
/// // Click-click selection of CAT.
/// assert!(game.click(Position::new(0, 0)).is_none());
/// let found = game.click(Position::new(0, 2)).unwrap();
/// assert_eq!(found.word, "CAT");
/// assert!(game.solved_cells().contains(Position::new(0, 1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Game {
    puzzle: Puzzle,
    selection: Selection,
    solved: BTreeSet<String>,
    solved_cells: SolvedCells,
}

impl Game {
    /// Starts a session for `puzzle`.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        log::debug!(
            "new game: {}x{} grid, {} placements",
            puzzle.grid().row_count(),
            puzzle.grid().max_row_len(),
            puzzle.placements().len()
        );
        Self {
            puzzle,
            selection: Selection::default(),
            solved: BTreeSet::new(),
            solved_cells: SolvedCells::default(),
        }
    }

    /// Replaces the puzzle, resetting the selection and the solved words.
    pub fn load(&mut self, puzzle: Puzzle) {
        *self = Self::new(puzzle);
    }

    /// Returns the current puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    /// Returns the answer key.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        self.puzzle.placements()
    }

    /// Returns the selection gesture.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the solved words.
    #[must_use]
    pub fn solved_words(&self) -> &BTreeSet<String> {
        &self.solved
    }

    /// Returns `true` if `word` has been found.
    #[must_use]
    pub fn is_word_solved(&self, word: &str) -> bool {
        self.solved.contains(word)
    }

    /// Returns the cell lookup for solved words.
    #[must_use]
    pub fn solved_cells(&self) -> &SolvedCells {
        &self.solved_cells
    }

    /// Returns the paths of all solved placements.
    #[must_use]
    pub fn found_paths(&self) -> Vec<FoundPath<'_>> {
        project_found(self.puzzle.grid(), &self.solved, self.puzzle.placements())
    }

    /// Returns how many placements have been found.
    #[must_use]
    pub fn progress(&self) -> Progress {
        let placements = self.puzzle.placements();
        Progress {
            found: placements
                .iter()
                .filter(|p| self.solved.contains(&p.word))
                .count(),
            total: placements.len(),
        }
    }

    /// Returns `true` once every placement has been found.
    ///
    /// A puzzle without placements is never solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let Progress { found, total } = self.progress();
        total > 0 && found == total
    }

    /// Starts a selection gesture at `cell`.
    pub fn begin_selection(&mut self, cell: Position) {
        log_begin(cell);
        self.selection.begin(cell);
    }

    /// Moves the pointer of the active gesture to `cell`.
    pub fn extend_selection(&mut self, cell: Position) {
        self.selection.extend(cell);
    }

    /// Completes the gesture at `cell` and evaluates it against the answer key.
    ///
    /// Returns `None` if no gesture was active, an endpoint lies outside the
    /// grid, or the endpoints match no placement; none of these is an error.
    pub fn end_selection(&mut self, cell: Position) -> Option<WordFound> {
        let (anchor, end) = self.selection.end(cell)?;
        self.evaluate(anchor, end)
    }

    /// Applies a click on `cell`: begins a gesture while idle, completes it while active.
    pub fn click(&mut self, cell: Position) -> Option<WordFound> {
        match self.selection.click(cell) {
            ClickOutcome::Began => {
                log_begin(cell);
                None
            }
            ClickOutcome::Ended(anchor, end) => self.evaluate(anchor, end),
        }
    }

    fn evaluate(&mut self, anchor: Position, end: Position) -> Option<WordFound> {
        let grid = self.puzzle.grid();
        if !(grid.contains(anchor) && grid.contains(end)) {
            log::debug!("selection {anchor}-{end} leaves the grid");
            return None;
        }
        let Some((index, placement)) = find_match(self.puzzle.placements(), anchor, end) else {
            log::debug!("selection {anchor}-{end} matches no word");
            return None;
        };
        let word = placement.word.clone();
        let newly_solved = self.solved.insert(word.clone());
        if newly_solved {
            log::info!("found word {word:?}");
            self.solved_cells = SolvedCells::build(
                self.puzzle.grid(),
                &self.solved,
                self.puzzle.placements(),
            );
        } else {
            log::debug!("word {word:?} selected again");
        }
        Some(WordFound {
            word,
            index,
            newly_solved,
        })
    }
}

fn log_begin(cell: Position) {
    log::debug!("selection begins at {cell}");
}
