use std::collections::{BTreeSet, HashMap};

use wordseek_core::{Grid, Line, Position};

use crate::Placement;

/// The path of one solved placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundPath<'a> {
    /// Index of the placement in the answer key.
    pub index: usize,
    /// The solved placement.
    pub placement: &'a Placement,
    /// Cells covered by the placement, from its start to its end.
    pub line: Line,
}

/// Projects the solved words onto the grid.
///
/// Returns one [`FoundPath`] per placement whose word is in `solved`, in
/// answer-key order. Unsolved placements are never projected. Malformed
/// placements (endpoints not on a straight line, or outside `grid`) are skipped.
///
/// This is a pure function of its inputs; [`SolvedCells`] caches the same
/// information as a per-cell lookup.
#[must_use]
pub fn project_found<'a>(
    grid: &Grid,
    solved: &BTreeSet<String>,
    placements: &'a [Placement],
) -> Vec<FoundPath<'a>> {
    placements
        .iter()
        .enumerate()
        .filter(|(_, placement)| solved.contains(&placement.word))
        .filter(|(_, placement)| grid.contains(placement.start) && grid.contains(placement.end))
        .filter_map(|(index, placement)| {
            let line = placement.line()?;
            Some(FoundPath {
                index,
                placement,
                line,
            })
        })
        .collect()
}

/// Lookup from cell to the solved placement covering it.
///
/// Built once per change of the solved set. A cell shared by several solved
/// placements maps to the first one in answer-key order.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
///
/// use wordseek_core::{Grid, Position};
/// use wordseek_game::{Placement, SolvedCells};
///
/// let grid = Grid::parse("C A T\nX Y Z");
/// let placements = [Placement::new("CAT", Position::new(0, 0), Position::new(0, 2))];
/// let solved = BTreeSet::from(["CAT".to_owned()]);
///
/// let cells = SolvedCells::build(&grid, &solved, &placements);
/// assert!(cells.contains(Position::new(0, 1)));
/// assert!(!cells.contains(Position::new(1, 1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolvedCells {
    cells: HashMap<Position, usize>,
}

impl SolvedCells {
    /// Builds the lookup from the solved words and the answer key.
    #[must_use]
    pub fn build(grid: &Grid, solved: &BTreeSet<String>, placements: &[Placement]) -> Self {
        let mut cells = HashMap::new();
        for found in project_found(grid, solved, placements) {
            for pos in found.line {
                cells.entry(pos).or_insert(found.index);
            }
        }
        Self { cells }
    }

    /// Returns `true` if `pos` belongs to a solved word.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Returns the index of the solved placement covering `pos`.
    #[must_use]
    pub fn placement_at(&self, pos: Position) -> Option<usize> {
        self.cells.get(&pos).copied()
    }

    /// Returns the number of highlighted cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns an iterator over the highlighted cells, in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.cells.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn solved(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|&w| w.to_owned()).collect()
    }

    fn grid() -> Grid {
        Grid::parse("C A T\nB Y D\nX O G")
    }

    fn placements() -> Vec<Placement> {
        vec![
            Placement::new("CAT", p(0, 0), p(0, 2)),
            Placement::new("TYX", p(0, 2), p(2, 0)),
            Placement::new("BAD", p(0, 0), p(1, 2)),
        ]
    }

    #[test]
    fn test_only_solved_placements_are_projected() {
        let placements = placements();
        assert!(project_found(&grid(), &solved(&[]), &placements).is_empty());

        let found = project_found(&grid(), &solved(&["CAT"]), &placements);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].index, 0);
        assert_eq!(
            found[0].line.cells().collect::<Vec<_>>(),
            [p(0, 0), p(0, 1), p(0, 2)]
        );
    }

    #[test]
    fn test_projection_follows_recorded_direction() {
        let placements = placements();
        let found = project_found(&grid(), &solved(&["TYX"]), &placements);
        assert_eq!(
            found[0].line.cells().collect::<Vec<_>>(),
            [p(0, 2), p(1, 1), p(2, 0)]
        );
    }

    #[test]
    fn test_malformed_placement_is_skipped() {
        let placements = placements();
        assert!(project_found(&grid(), &solved(&["BAD"]), &placements).is_empty());
        assert!(SolvedCells::build(&grid(), &solved(&["BAD"]), &placements).is_empty());
    }

    #[test]
    fn test_unknown_solved_word_is_ignored() {
        let placements = placements();
        assert!(project_found(&grid(), &solved(&["DOG"]), &placements).is_empty());
    }

    #[test]
    fn test_solved_cells_matches_projection() {
        let placements = placements();
        let solved = solved(&["CAT", "TYX"]);
        let cells = SolvedCells::build(&grid(), &solved, &placements);

        let mut projected: Vec<_> = project_found(&grid(), &solved, &placements)
            .iter()
            .flat_map(|found| found.line.cells())
            .collect();
        projected.sort();
        projected.dedup();
        let mut looked_up: Vec<_> = cells.positions().collect();
        looked_up.sort();
        assert_eq!(looked_up, projected);
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn test_shared_cell_maps_to_first_placement() {
        let placements = placements();
        let cells = SolvedCells::build(&grid(), &solved(&["CAT", "TYX"]), &placements);
        assert_eq!(cells.placement_at(p(0, 2)), Some(0));
        assert_eq!(cells.placement_at(p(1, 1)), Some(1));
        assert_eq!(cells.placement_at(p(2, 2)), None);
    }

    #[test]
    fn test_placement_outside_grid_is_skipped() {
        let placements = vec![
            Placement::new("HUGE", p(0, 0), p(0, usize::MAX)),
            Placement::new("FAR", p(0, 0), p(1_000_000_000, 1_000_000_000)),
        ];
        let solved = solved(&["HUGE", "FAR"]);
        assert!(project_found(&grid(), &solved, &placements).is_empty());
        assert!(SolvedCells::build(&grid(), &solved, &placements).is_empty());
    }
}
