//! Snapshot module - read-only copies of a session for renderers
//!
//! A [`Snapshot`] owns its board, so it stays valid after the session moves
//! on. [`Snapshot::display_grid`] layers the ghost and the active piece over
//! the locked cells.

use serde::Serialize;

use crate::board::Board;
use crate::geometry::Position;
use crate::rng::PieceSource;
use crate::session::{ActivePiece, Session};
use crate::timer::DropTimer;
use crate::types::{Phase, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.position.x,
            y: value.position.y,
        }
    }
}

impl From<ActiveSnapshot> for ActivePiece {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            position: Position::new(value.x, value.y),
            rotation: value.rotation,
        }
    }
}

/// What a presentation layer draws in one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayCell {
    #[default]
    Empty,
    Locked(PieceKind),
    Ghost,
    Active(PieceKind),
}

pub type DisplayGrid = [[DisplayCell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Read-only copy of a session, taken after a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub timer: DropTimer,
}

impl Snapshot {
    pub fn capture<S: PieceSource>(session: &Session<S>) -> Self {
        Self {
            board: session.board().clone(),
            active: session.active().map(ActiveSnapshot::from),
            ghost_y: session.ghost_y(),
            next: session.next(),
            score: session.score(),
            level: session.level(),
            lines: session.lines(),
            phase: session.phase(),
            timer: session.drop_timer(),
        }
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Locked cells with the ghost and the active piece laid over them.
    ///
    /// The ghost only covers empty in-bounds cells and the active piece
    /// covers the ghost. Neither is drawn once the game is over.
    pub fn display_grid(&self) -> DisplayGrid {
        let mut grid = [[DisplayCell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in self.board.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    grid[y][x] = DisplayCell::Locked(*kind);
                }
            }
        }

        if self.phase == Phase::GameOver {
            return grid;
        }
        let Some(active) = self.active.map(ActivePiece::from) else {
            return grid;
        };
        let cells = active.cells();

        if let Some(ghost_y) = self.ghost_y {
            for &(dx, dy) in &cells {
                let (x, y) = (active.position.x + dx, ghost_y + dy);
                if self.board.get(x, y) == Some(None) {
                    grid[y as usize][x as usize] = DisplayCell::Ghost;
                }
            }
        }

        for &(dx, dy) in &cells {
            let (x, y) = (active.position.x + dx, active.position.y + dy);
            if self.board.get(x, y).is_some() {
                grid[y as usize][x as usize] = DisplayCell::Active(active.kind);
            }
        }

        grid
    }
}
