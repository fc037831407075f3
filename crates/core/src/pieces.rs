//! Pieces module - the catalog of seven piece definitions
//!
//! Each definition holds the canonical (rotation 0) shape and the color
//! token locked cells carry. Definitions are static and shared by every
//! active piece of that kind; other orientations are derived with
//! [`crate::geometry::rotate`].

use crate::geometry::{Position, Shape};
use crate::types::{PieceKind, BOARD_WIDTH};

/// Immutable definition of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: &'static str,
}

static CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        shape: Shape::from_grid([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "#00f0f0",
    },
    PieceDef {
        kind: PieceKind::O,
        shape: Shape::from_grid([[1, 1], [1, 1]]),
        color: "#f0f000",
    },
    PieceDef {
        kind: PieceKind::T,
        shape: Shape::from_grid([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: "#a000f0",
    },
    PieceDef {
        kind: PieceKind::S,
        shape: Shape::from_grid([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: "#00f000",
    },
    PieceDef {
        kind: PieceKind::Z,
        shape: Shape::from_grid([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: "#f00000",
    },
    PieceDef {
        kind: PieceKind::J,
        shape: Shape::from_grid([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: "#0000f0",
    },
    PieceDef {
        kind: PieceKind::L,
        shape: Shape::from_grid([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: "#f0a000",
    },
];

/// The full catalog, in [`PieceKind::ALL`] order
pub fn catalog() -> &'static [PieceDef; 7] {
    &CATALOG
}

/// Definition for a piece kind
pub fn definition(kind: PieceKind) -> &'static PieceDef {
    let index = match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    };
    &CATALOG[index]
}

/// Canonical shape for a piece kind
pub fn canonical_shape(kind: PieceKind) -> &'static Shape {
    &definition(kind).shape
}

/// Spawn position: horizontally centered on the canonical width, top row
pub fn spawn_position(kind: PieceKind) -> Position {
    let width = canonical_shape(kind).width() as i8;
    Position::new(BOARD_WIDTH as i8 / 2 - width / 2, 0)
}
