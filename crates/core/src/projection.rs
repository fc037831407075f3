//! Drop projection - where a piece comes to rest if dropped straight down

use crate::board::Board;
use crate::collision::collides_rotated;
use crate::geometry::{rotate, Position, Shape};
use crate::types::{Rotation, BOARD_HEIGHT};

/// Last row the piece can occupy below `position` without colliding.
///
/// Returns `position.y` when the piece cannot move down at all. The search
/// never goes past the floor row.
pub fn project_drop(board: &Board, shape: &Shape, position: Position, rotation: Rotation) -> i8 {
    let rotated = rotate(shape, rotation.index());
    let mut y = position.y;
    while y < BOARD_HEIGHT as i8
        && !collides_rotated(board, &rotated, Position::new(position.x, y + 1))
    {
        y += 1;
    }
    y
}
