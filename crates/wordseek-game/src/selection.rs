use wordseek_core::{Line, Position};

/// The in-progress selection gesture.
///
/// A gesture starts at an anchor cell, follows the pointer while active, and
/// completes on the next click:
///
/// ```text
/// Idle -[begin]-> Active -[extend]-> Active -[end]-> Idle
/// ```
///
/// There is no cancel transition. An abandoned gesture stays active until the
/// next click completes it.
///
/// # Example
///
/// ```
/// use wordseek_core::Position;
/// use wordseek_game::Selection;
///
/// let mut selection = Selection::default();
/// selection.begin(Position::new(0, 0));
/// selection.extend(Position::new(2, 2));
/// assert_eq!(selection.path().map(|line| line.len()), Some(3));
///
/// // Not a straight line: the previous path stays highlighted.
/// selection.extend(Position::new(1, 2));
/// assert_eq!(selection.path().map(|line| line.end()), Some(Position::new(2, 2)));
///
/// let endpoints = selection.end(Position::new(1, 2));
/// assert_eq!(endpoints, Some((Position::new(0, 0), Position::new(1, 2))));
/// assert!(selection.is_idle());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress.
    Active {
        /// Cell where the gesture started.
        anchor: Position,
        /// Cell most recently visited by the pointer.
        current: Position,
        /// Highlighted path: the last straight line from `anchor` the pointer reached.
        path: Line,
    },
}

/// Result of [`Selection::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// The click started a new gesture.
    Began,
    /// The click completed a gesture with these endpoints (anchor first).
    Ended(Position, Position),
}

impl Selection {
    /// Starts a new gesture at `cell`, discarding any previous path.
    pub fn begin(&mut self, cell: Position) {
        *self = Self::Active {
            anchor: cell,
            current: cell,
            path: Line::point(cell),
        };
    }

    /// Moves the pointer of an active gesture to `cell`.
    ///
    /// The highlighted path follows only when `cell` is on a straight line from
    /// the anchor; otherwise the previous path is kept. Does nothing while idle.
    pub fn extend(&mut self, cell: Position) {
        if let Self::Active {
            anchor,
            current,
            path,
        } = self
        {
            *current = cell;
            if let Some(line) = Line::new(*anchor, cell) {
                *path = line;
            }
        }
    }

    /// Completes the gesture at `cell` and returns `(anchor, cell)`.
    ///
    /// The pointer does not need to have visited the cells in between. Returns
    /// `None` while idle.
    pub fn end(&mut self, cell: Position) -> Option<(Position, Position)> {
        match *self {
            Self::Idle => None,
            Self::Active { anchor, .. } => {
                *self = Self::Idle;
                Some((anchor, cell))
            }
        }
    }

    /// Applies a click: begins a gesture while idle, completes it while active.
    pub fn click(&mut self, cell: Position) -> ClickOutcome {
        match self.end(cell) {
            Some((anchor, end)) => ClickOutcome::Ended(anchor, end),
            None => {
                self.begin(cell);
                ClickOutcome::Began
            }
        }
    }

    /// Returns the anchor of the active gesture.
    #[must_use]
    pub fn anchor(&self) -> Option<Position> {
        match self {
            Self::Idle => None,
            Self::Active { anchor, .. } => Some(*anchor),
        }
    }

    /// Returns the last pointer position of the active gesture.
    #[must_use]
    pub fn current(&self) -> Option<Position> {
        match self {
            Self::Idle => None,
            Self::Active { current, .. } => Some(*current),
        }
    }

    /// Returns the highlighted path of the active gesture.
    #[must_use]
    pub fn path(&self) -> Option<Line> {
        match self {
            Self::Idle => None,
            Self::Active { path, .. } => Some(*path),
        }
    }
}
