//! Session module - the game state machine
//!
//! Ties together the board, the piece catalog, collision, line clears and
//! scoring. A [`Session`] exclusively owns all game state; every command
//! goes through `&mut self`, so mutations are serialized by construction.
//!
//! Lifecycle: `NotStarted -> Playing -> {Paused <-> Playing} -> GameOver`.
//! Commands that do not apply in the current phase are silently ignored.

use crate::board::Board;
use crate::collision::collides;
use crate::geometry::{rotate, Position, Shape, ShapeCells};
use crate::line_clear::clear_lines;
use crate::pieces::{canonical_shape, spawn_position};
use crate::projection::project_drop;
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::Snapshot;
use crate::timer::DropTimer;
use crate::types::{Command, Direction, Phase, PieceKind, Rotation};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub position: Position,
    pub rotation: Rotation,
}

impl ActivePiece {
    /// Create a piece of `kind` at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            position: spawn_position(kind),
            rotation: Rotation::North,
        }
    }

    /// Canonical shape from the catalog
    pub fn canonical_shape(&self) -> &'static Shape {
        canonical_shape(self.kind)
    }

    /// Shape in the current rotation
    pub fn shape(&self) -> Shape {
        rotate(self.canonical_shape(), self.rotation.index())
    }

    /// Filled cells of the current rotation, relative to `position`
    pub fn cells(&self) -> ShapeCells {
        self.shape().filled_cells()
    }

    /// Check the piece against the board
    pub fn collides(&self, board: &Board) -> bool {
        collides(board, self.canonical_shape(), self.position, self.rotation)
    }

    fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..*self
        }
    }
}

/// What a move-down step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Not playing, nothing changed
    Ignored,
    /// Piece moved one row down
    Moved,
    /// Piece locked; the next piece spawned (or the game ended)
    Locked { cleared: u32, game_over: bool },
}

/// Summary of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockReport {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub level: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session<S = RandomPieces> {
    source: S,
    board: Board,
    active: Option<ActivePiece>,
    next: Option<PieceKind>,
    score: u32,
    level: u32,
    lines: u32,
    phase: Phase,
    timer: DropTimer,
    last_lock: Option<LockReport>,
}

impl Session<RandomPieces> {
    /// Session drawing uniformly random pieces from the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(RandomPieces::new(seed))
    }
}

impl Default for Session<RandomPieces> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

impl<S: PieceSource> Session<S> {
    /// Create an unstarted session drawing pieces from `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            board: Board::new(),
            active: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::NotStarted,
            timer: DropTimer::default(),
            last_lock: None,
        }
    }

    /// Start (or restart) the game.
    ///
    /// Resets board, score, level and lines, draws the active and next
    /// pieces and arms the drop timer. Valid from any phase.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.last_lock = None;

        let first = self.source.next_kind();
        let second = self.source.next_kind();
        self.active = Some(ActivePiece::spawn(first));
        self.next = Some(second);

        self.phase = Phase::Playing;
        self.timer.arm(drop_interval_ms(self.level));
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn drop_timer(&self) -> DropTimer {
        self.timer
    }

    pub fn last_lock(&self) -> Option<LockReport> {
        self.last_lock
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Replace the board, e.g. to set up a puzzle.
    ///
    /// The active piece is left where it is and is not re-checked; the next
    /// move or lock runs against the new board.
    pub fn load_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Row the active piece would rest on if dropped now
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(project_drop(
            &self.board,
            active.canonical_shape(),
            active.position,
            active.rotation,
        ))
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    fn playing_piece(&self) -> Option<ActivePiece> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.active
    }

    /// Auto-drop step; a no-op unless playing with the timer armed
    pub fn tick(&mut self) -> bool {
        if !self.timer.is_armed() {
            return false;
        }
        self.move_down() != DropOutcome::Ignored
    }

    /// Move the piece down one row, locking it if it cannot move
    pub fn move_down(&mut self) -> DropOutcome {
        let Some(active) = self.playing_piece() else {
            return DropOutcome::Ignored;
        };

        let moved = active.shifted(0, 1);
        if !moved.collides(&self.board) {
            self.active = Some(moved);
            return DropOutcome::Moved;
        }

        self.lock_piece(active)
    }

    /// Shift the piece one column; rejected moves leave state unchanged
    pub fn move_horizontal(&mut self, direction: Direction) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };
        self.commit_if_free(active.shifted(direction.dx(), 0))
    }

    /// Turn the piece a quarter clockwise in place (no wall kicks)
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };
        self.commit_if_free(ActivePiece {
            rotation: active.rotation.rotate_cw(),
            ..active
        })
    }

    /// Move the piece straight to its projected resting row.
    ///
    /// Does not lock: the next move-down or tick that finds no room does.
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };
        let Some(target) = self.ghost_y() else {
            return false;
        };
        if target == active.position.y {
            return false;
        }
        self.active = Some(ActivePiece {
            position: Position::new(active.position.x, target),
            ..active
        });
        true
    }

    /// Flip between playing and paused; ignored in any other phase
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Paused;
                self.timer.disarm();
                true
            }
            Phase::Paused => {
                self.phase = Phase::Playing;
                self.timer.arm(drop_interval_ms(self.level));
                true
            }
            Phase::NotStarted | Phase::GameOver => false,
        }
    }

    /// Apply a command, returning whether state changed
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => {
                self.start();
                true
            }
            Command::MoveLeft => self.move_horizontal(Direction::Left),
            Command::MoveRight => self.move_horizontal(Direction::Right),
            Command::MoveDown => self.move_down() != DropOutcome::Ignored,
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Pause => self.toggle_pause(),
        }
    }

    fn commit_if_free(&mut self, candidate: ActivePiece) -> bool {
        if candidate.collides(&self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Write the piece into the board, clear lines, score, and spawn the next piece
    fn lock_piece(&mut self, active: ActivePiece) -> DropOutcome {
        let locked = self
            .board
            .with_piece(active.cells(), active.position, active.kind);
        let (board, cleared) = clear_lines(&locked);
        self.board = board;

        let cleared = cleared as u32;
        let mut points = 0;
        if cleared > 0 {
            points = line_clear_score(cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.lines += cleared;

            let level = level_for_lines(self.lines);
            if level != self.level {
                self.level = level;
                self.timer.arm(drop_interval_ms(level));
            }
        }

        self.last_lock = Some(LockReport {
            kind: active.kind,
            lines_cleared: cleared,
            points,
            level: self.level,
        });

        let promoted = match self.next.take() {
            Some(kind) => kind,
            None => self.source.next_kind(),
        };
        self.next = Some(self.source.next_kind());

        let spawned = ActivePiece::spawn(promoted);
        self.active = Some(spawned);

        let game_over = spawned.collides(&self.board);
        if game_over {
            self.phase = Phase::GameOver;
            self.timer.disarm();
        }

        DropOutcome::Locked { cleared, game_over }
    }
}
