use rand::Rng;

use crate::grid::{GridSize, Position};

/// Samples uniformly random cells until one is not `occupied`.
///
/// Retries are unbounded: on a board with no free cell this never returns,
/// so callers must check for a full board first.
#[must_use]
pub fn place_food<R, F>(rng: &mut R, bounds: GridSize, occupied: F) -> Position
where
    R: Rng + ?Sized,
    F: Fn(Position) -> bool,
{
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    loop {
        let candidate = Position {
            row: rng.gen_range(0..i32::from(bounds.height)),
            col: rng.gen_range(0..i32::from(bounds.width)),
        };

        if !occupied(candidate) {
            return candidate;
        }
    }
}
