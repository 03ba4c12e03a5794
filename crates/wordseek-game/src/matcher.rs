use wordseek_core::Position;

use crate::Placement;

/// Finds the placement whose endpoints are `{a, b}`, in either order.
///
/// Only exact endpoint equality counts; there is no partial or substring
/// credit. If several placements share the same endpoints the first one wins.
/// Returns the placement together with its index in `placements`.
///
/// # Example
///
/// ```
/// use wordseek_core::Position;
/// use wordseek_game::{Placement, find_match};
///
/// let placements = [Placement::new("CAT", Position::new(0, 0), Position::new(0, 2))];
///
/// let (index, placement) = find_match(&placements, Position::new(0, 2), Position::new(0, 0))
///     .unwrap();
/// assert_eq!((index, placement.word.as_str()), (0, "CAT"));
///
/// assert!(find_match(&placements, Position::new(0, 0), Position::new(0, 1)).is_none());
/// ```
#[must_use]
pub fn find_match(
    placements: &[Placement],
    a: Position,
    b: Position,
) -> Option<(usize, &Placement)> {
    placements
        .iter()
        .enumerate()
        .find(|(_, placement)| placement.has_endpoints(a, b))
}
