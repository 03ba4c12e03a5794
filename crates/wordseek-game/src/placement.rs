use wordseek_core::{Line, Position};

/// Location of one hidden word in the grid.
///
/// Placements come from the external puzzle source and are read-only. The
/// `direction` label is advisory: matching and highlighting derive the real
/// direction from `start` and `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The hidden word.
    pub word: String,
    /// First cell of the word.
    pub start: Position,
    /// Last cell of the word.
    pub end: Position,
    /// Direction label supplied with the placement.
    pub direction: String,
}

impl Placement {
    /// Creates a placement without a direction label.
    #[must_use]
    pub fn new(word: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            word: word.into(),
            start,
            end,
            direction: String::new(),
        }
    }

    /// Sets the advisory direction label.
    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Returns the straight line from `start` to `end`.
    ///
    /// Returns `None` for malformed placements whose endpoints are not on a
    /// common row, column, or diagonal.
    #[must_use]
    pub fn line(&self) -> Option<Line> {
        Line::new(self.start, self.end)
    }

    /// Returns `true` if `{a, b}` equals `{start, end}` as an unordered pair.
    #[must_use]
    pub fn has_endpoints(&self, a: Position, b: Position) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }
}
