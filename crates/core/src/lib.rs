//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block engine. It has no
//! dependencies on rendering, input devices, timers or I/O: a host calls
//! the session's commands and reads back snapshots.
//!
//! - **Deterministic**: a seeded piece source replays the same game
//! - **Copy-on-write boards**: a snapshot never changes after it is taken
//! - **No failure paths**: illegal moves are no-ops, not errors
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven piece definitions (canonical shape + color)
//! - [`board`]: 10x20 grid of locked cells
//! - [`geometry`]: shapes, quarter-turn rotation, bounding boxes
//! - [`collision`]: the placement legality predicate
//! - [`line_clear`]: full-row removal and compaction
//! - [`projection`]: resting row for ghost previews and hard drops
//! - [`session`]: the game state machine
//! - [`rng`]: piece sources (independent uniform draws, fixed sequences)
//! - [`scoring`]: points, levels and drop cadence
//! - [`timer`]: explicit auto-drop timer state
//! - [`snapshot`]: read-only views for rendering
//!
//! # Game Rules
//!
//! - **Random pieces**: every draw is independent, so repeats happen
//! - **Rotation**: clockwise quarter turns, no wall kicks
//! - **Hard drop**: moves the piece to its resting row; the next drop step locks it
//! - **Scoring**: `lines * 100 * level`, one level per 10 lines
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::{Command, Phase};
//!
//! let mut session = Session::with_seed(12345);
//! session.start();
//!
//! session.apply(Command::MoveRight);
//! session.apply(Command::Rotate);
//! session.apply(Command::HardDrop);
//! session.apply(Command::MoveDown); // locks the piece
//!
//! assert_eq!(session.phase(), Phase::Playing);
//! assert_eq!(session.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! The engine keeps no clock. Call [`Session::tick`](session::Session::tick)
//! every [`DropTimer::interval`](timer::DropTimer::interval) while the
//! session's timer is armed; re-read the timer after every call.

pub mod board;
pub mod collision;
pub mod geometry;
pub mod line_clear;
pub mod pieces;
pub mod projection;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardParseError};
pub use collision::collides;
pub use geometry::{bounding_box, rotate, Position, Shape, ShapeError};
pub use line_clear::clear_lines;
pub use pieces::{canonical_shape, definition, spawn_position, PieceDef};
pub use projection::project_drop;
pub use rng::{PieceSource, RandomPieces, SequencePieces, SimpleRng};
pub use session::{ActivePiece, DropOutcome, LockReport, Session};
pub use snapshot::{ActiveSnapshot, DisplayCell, Snapshot};
pub use timer::DropTimer;
