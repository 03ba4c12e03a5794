//! Straight-line paths between two cells.
//!
//! Word-search words lie on horizontal, vertical, or exact 45° diagonal lines.
//! A [`Line`] can only be built between two positions that share a row, share a
//! column, or whose row and column distances are equal.

use std::{cmp::Ordering, iter::FusedIterator};

use crate::Position;

/// An inclusive straight-line path between two positions.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Direction, Line, Position};
///
/// let line = Line::new(Position::new(2, 2), Position::new(0, 0)).unwrap();
/// assert_eq!(line.direction(), Direction::UpLeft);
/// assert_eq!(
///     line.cells().collect::<Vec<_>>(),
///     [Position::new(2, 2), Position::new(1, 1), Position::new(0, 0)]
/// );
///
/// // Knight-like jumps are not lines.
/// assert!(Line::new(Position::new(0, 0), Position::new(1, 2)).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    start: Position,
    end: Position,
}

impl Line {
    /// Creates the line from `start` to `end`.
    ///
    /// Returns `None` when the two positions are neither on a common row, a
    /// common column, nor an exact diagonal. Equal positions form a one-cell line.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Option<Self> {
        let dr = start.row().abs_diff(end.row());
        let dc = start.col().abs_diff(end.col());
        (dr == 0 || dc == 0 || dr == dc).then_some(Self { start, end })
    }

    /// Creates the one-cell line at `pos`.
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns the first cell of the line.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the last cell of the line.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Returns the same cells traversed in the opposite order.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns the number of cells on the line (always at least one).
    ///
    /// Saturates at `usize::MAX` for a line spanning the whole `usize` range.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.steps().saturating_add(1)
    }

    fn steps(&self) -> usize {
        usize::max(
            self.start.row().abs_diff(self.end.row()),
            self.start.col().abs_diff(self.end.col()),
        )
    }

    /// Returns the direction of travel from start to end.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::from_orderings(
            self.end.row().cmp(&self.start.row()),
            self.end.col().cmp(&self.start.col()),
        )
    }

    /// Returns `true` if `pos` is one of the cells on the line.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        Self::new(self.start, pos).is_some_and(|to_pos| {
            let same_way = pos == self.start || to_pos.direction() == self.direction();
            same_way && to_pos.steps() <= self.steps()
        })
    }

    /// Returns an iterator over the cells from start to end, inclusive.
    #[must_use]
    pub fn cells(&self) -> LineCells {
        LineCells {
            line: *self,
            front: 0,
            back: self.len(),
        }
    }

    fn cell_at(&self, i: usize) -> Position {
        debug_assert!(i <= self.steps());
        Position::new(
            step_axis(self.start.row(), self.end.row(), i),
            step_axis(self.start.col(), self.end.col(), i),
        )
    }
}

fn step_axis(from: usize, to: usize, i: usize) -> usize {
    match to.cmp(&from) {
        Ordering::Greater => from + i,
        Ordering::Less => from - i,
        Ordering::Equal => from,
    }
}

impl IntoIterator for Line {
    type Item = Position;
    type IntoIter = LineCells;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

impl IntoIterator for &Line {
    type Item = Position;
    type IntoIter = LineCells;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

/// Iterator over the cells of a [`Line`].
#[derive(Debug, Clone)]
pub struct LineCells {
    line: Line,
    front: usize,
    back: usize,
}

impl Iterator for LineCells {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.line.cell_at(self.front);
        self.front += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for LineCells {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.line.cell_at(self.back))
    }
}

impl ExactSizeIterator for LineCells {}

impl FusedIterator for LineCells {}

/// Direction of travel along a [`Line`].
///
/// Derived from the endpoints only; a one-cell line has direction [`Direction::Point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// Start and end are the same cell.
    #[display("point")]
    Point,
    /// Towards smaller row indices.
    #[display("up")]
    Up,
    /// Towards larger row indices.
    #[display("down")]
    Down,
    /// Towards smaller column indices.
    #[display("left")]
    Left,
    /// Towards larger column indices.
    #[display("right")]
    Right,
    /// Towards smaller row and column indices.
    #[display("up-left")]
    UpLeft,
    /// Towards smaller row and larger column indices.
    #[display("up-right")]
    UpRight,
    /// Towards larger row and smaller column indices.
    #[display("down-left")]
    DownLeft,
    /// Towards larger row and column indices.
    #[display("down-right")]
    DownRight,
}

impl Direction {
    fn from_orderings(row: Ordering, col: Ordering) -> Self {
        match (row, col) {
            (Ordering::Equal, Ordering::Equal) => Self::Point,
            (Ordering::Less, Ordering::Equal) => Self::Up,
            (Ordering::Greater, Ordering::Equal) => Self::Down,
            (Ordering::Equal, Ordering::Less) => Self::Left,
            (Ordering::Equal, Ordering::Greater) => Self::Right,
            (Ordering::Less, Ordering::Less) => Self::UpLeft,
            (Ordering::Less, Ordering::Greater) => Self::UpRight,
            (Ordering::Greater, Ordering::Less) => Self::DownLeft,
            (Ordering::Greater, Ordering::Greater) => Self::DownRight,
        }
    }

    /// Returns `true` for the four diagonal directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpLeft | Self::UpRight | Self::DownLeft | Self::DownRight
        )
    }
}
