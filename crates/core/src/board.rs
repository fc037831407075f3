//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked there. Storage is a fixed array of rows, so every board
//! always has exactly `BOARD_HEIGHT` rows of `BOARD_WIDTH` cells.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).
//!
//! Gameplay updates are copy-on-write: [`Board::with_cell`] and
//! [`Board::with_piece`] return a new board and leave `self` untouched, so a
//! snapshot handed to a renderer never changes underneath it. [`Board::set`]
//! mutates in place and is meant for building fixtures.

use serde::Serialize;

use crate::geometry::Position;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One board row
pub type Row = [Cell; WIDTH];

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("picture has {0} rows, board holds at most 20")]
    TooManyRows(usize),
    #[error("row {row} has {found} columns, expected 10")]
    WrongWidth { row: usize, found: usize },
    #[error("unknown cell {ch:?} in row {row}")]
    UnknownCell { row: usize, ch: char },
}

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Board {
    rows: [Row; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; WIDTH]; HEIGHT],
        }
    }

    /// Parse an ASCII picture of the bottom of the board.
    ///
    /// `.` is empty and a piece letter (`I`, `O`, `T`, `S`, `Z`, `J`, `L`,
    /// any case) is a locked cell. The last line lands on the floor row;
    /// rows not covered by the picture stay empty.
    pub fn from_rows(picture: &[&str]) -> Result<Self, BoardParseError> {
        if picture.len() > HEIGHT {
            return Err(BoardParseError::TooManyRows(picture.len()));
        }

        let mut board = Self::new();
        let top = HEIGHT - picture.len();
        for (i, line) in picture.iter().enumerate() {
            let found = line.chars().count();
            if found != WIDTH {
                return Err(BoardParseError::WrongWidth { row: i, found });
            }
            for (x, ch) in line.chars().enumerate() {
                board.rows[top + i][x] = match ch {
                    '.' => None,
                    other => Some(
                        PieceKind::from_str(&other.to_string())
                            .ok_or(BoardParseError::UnknownCell { row: i, ch })?,
                    ),
                };
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize, x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(row, col)| self.rows[row][col])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Set cell at position (x, y) in place
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((row, col)) => {
                self.rows[row][col] = cell;
                true
            }
            None => false,
        }
    }

    /// Copy of this board with one cell replaced.
    /// Out-of-range coordinates leave the copy unchanged.
    pub fn with_cell(&self, x: i8, y: i8, cell: Cell) -> Board {
        let mut next = self.clone();
        next.set(x, y, cell);
        next
    }

    /// Copy of this board with a piece's cells written at `origin`.
    /// Cells that fall outside the board are skipped.
    pub fn with_piece(
        &self,
        cells: impl IntoIterator<Item = (i8, i8)>,
        origin: Position,
        kind: PieceKind,
    ) -> Board {
        let mut next = self.clone();
        for (dx, dy) in cells {
            next.set(origin.x + dx, origin.y + dy, Some(kind));
        }
        next
    }

    /// Row `y`, or None if out of range
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|c| c.is_none())
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row.
    /// Does nothing for an out-of-range row.
    pub(crate) fn remove_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        self.rows.copy_within(0..y, 1);
        self.rows[0] = [None; WIDTH];
    }

    /// ASCII picture of the whole board, one line per row
    pub fn to_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', |kind| kind.letter()))
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
