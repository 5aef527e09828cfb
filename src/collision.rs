use crate::grid::{GridSize, Position};
use crate::snake::Snake;

/// What the candidate head ran into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Classifies a collision of `position` against the walls and the current body.
///
/// The body is checked as it is *before* the move, so the tail cell that is
/// about to be vacated still counts as occupied.
#[must_use]
pub fn detect_collision(position: Position, bounds: GridSize, snake: &Snake) -> Option<Collision> {
    if !position.is_within_bounds(bounds) {
        return Some(Collision::Wall);
    }

    if snake.occupies(position) {
        return Some(Collision::SelfCollision);
    }

    None
}

/// Returns true when `position` hits a wall or the snake.
#[must_use]
pub fn check_collision(position: Position, bounds: GridSize, snake: &Snake) -> bool {
    detect_collision(position, bounds, snake).is_some()
}
