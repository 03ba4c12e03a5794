//! The letter grid of a word-search puzzle.
//!
//! Grids arrive as plain text: rows separated by `'\n'`, cells within a row
//! separated by a single `' '`.
//!
//! ```text
//! C A T
//! X Y Z
//! ```
//!
//! Parsing never fails. Ragged input produces rows of differing length, and
//! lookups outside a row return `None`.

use std::{convert::Infallible, fmt, str::FromStr};

use crate::Position;

/// A parsed word-search grid.
///
/// The grid is immutable once parsed. Cells are kept verbatim, so a malformed
/// payload may contain empty or multi-character cells.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Grid, Position};
///
/// let grid = Grid::parse("C A T\nX Y Z");
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.row_len(0), Some(3));
/// assert_eq!(grid.cell(Position::new(1, 1)), Some("Y"));
/// assert_eq!(grid.cell(Position::new(2, 0)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Parses the textual grid format.
    ///
    /// An empty text yields a grid without rows. A trailing `'\r'` on a row is
    /// dropped, so CRLF text parses like LF text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        let rows = text
            .split('\n')
            .map(|row| {
                let row = row.strip_suffix('\r').unwrap_or(row);
                row.split(' ').map(str::to_owned).collect()
            })
            .collect();
        Self { rows }
    }

    /// Builds a grid from already split rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells in `row`, or `None` if the row does not exist.
    #[must_use]
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Returns the length of the longest row.
    #[must_use]
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns `true` if the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if every row has the same length.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].len() == w[1].len())
    }

    /// Returns `true` if `pos` addresses an existing cell.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cell(pos).is_some()
    }

    /// Returns the cell text at `pos`, or `None` if out of range.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&str> {
        self.rows
            .get(pos.row())
            .and_then(|row| row.get(pos.col()))
            .map(String::as_str)
    }

    /// Returns the cells of `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns an iterator over all rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns an iterator over every existing cell with its position, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (Position, &str)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (Position::new(r, c), cell.as_str()))
        })
    }
}

impl FromStr for Grid {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangular() {
        let grid = Grid::parse("C A T\nX Y Z");
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.row(0).unwrap(), ["C", "A", "T"]);
        assert_eq!(grid.row(1).unwrap(), ["X", "Y", "Z"]);
        assert!(grid.is_rectangular());
        assert_eq!(grid.max_row_len(), 3);
    }

    #[test]
    fn test_parse_ragged_rows_are_kept() {
        let grid = Grid::parse("A B C D\nE F\nG H I");
        assert_eq!(grid.row_len(0), Some(4));
        assert_eq!(grid.row_len(1), Some(2));
        assert_eq!(grid.row_len(2), Some(3));
        assert!(!grid.is_rectangular());
        assert_eq!(grid.cell(Position::new(1, 3)), None);
        assert!(grid.contains(Position::new(0, 3)));
        assert!(!grid.contains(Position::new(1, 2)));
    }

    #[test]
    fn test_parse_empty_text() {
        let grid = Grid::parse("");
        assert!(grid.is_empty());
        assert_eq!(grid.max_row_len(), 0);
        assert!(grid.is_rectangular());
    }

    #[test]
    fn test_parse_keeps_malformed_cells_verbatim() {
        // Double spaces yield an empty cell, missing spaces a multi-letter cell.
        let grid = Grid::parse("A  B\nCD E");
        assert_eq!(grid.row(0).unwrap(), ["A", "", "B"]);
        assert_eq!(grid.row(1).unwrap(), ["CD", "E"]);
    }

    #[test]
    fn test_parse_strips_carriage_returns() {
        let grid = Grid::parse("C A T\r\nX Y Z\r");
        assert_eq!(grid, Grid::parse("C A T\nX Y Z"));
    }

    #[test]
    fn test_trailing_newline_adds_empty_row() {
        let grid = Grid::parse("A B\n");
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.row(1).unwrap(), [""]);
    }

    #[test]
    fn test_display_round_trip() {
        let text = "C A T\nX Y Z";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::parse("A B\nC");
        let cells: Vec<_> = grid.positions().collect();
        assert_eq!(
            cells,
            [
                (Position::new(0, 0), "A"),
                (Position::new(0, 1), "B"),
                (Position::new(1, 0), "C"),
            ]
        );
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec!["Q".to_owned()]]);
        assert_eq!(grid.cell(Position::new(0, 0)), Some("Q"));
    }
}
