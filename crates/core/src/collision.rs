//! Collision module - the single legality predicate for piece placement
//!
//! A placement collides when any filled cell lies outside the board columns,
//! below the floor, or on an occupied cell. Cells above the top row are only
//! checked against the columns, so pieces may spawn partly off the board.

use crate::board::Board;
use crate::geometry::{rotate, Position, Shape};
use crate::types::{Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape`, turned by `rotation`, collides when its top-left corner sits at `position`
pub fn collides(board: &Board, shape: &Shape, position: Position, rotation: Rotation) -> bool {
    collides_rotated(board, &rotate(shape, rotation.index()), position)
}

/// Same as [`collides`] for a shape that is already in its final orientation
pub fn collides_rotated(board: &Board, shape: &Shape, position: Position) -> bool {
    shape.filled_cells().iter().any(|&(dx, dy)| {
        // Widened so positions far off the board cannot overflow.
        let x = position.x as i16 + dx as i16;
        let y = position.y as i16 + dy as i16;

        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return true;
        }
        y >= 0 && board.is_occupied(x as i8, y as i8)
    })
}
