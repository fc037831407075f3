//! Line-clear module - removes full rows and compacts the board
//!
//! Rows are scanned bottom-up. A full row is removed, an empty row enters at
//! the top, and the same index is examined again before the scan moves up,
//! since the row that was above it has just shifted into place.

use crate::board::Board;
use crate::types::BOARD_HEIGHT;

/// Clear every full row, returning the compacted board and how many rows went
pub fn clear_lines(board: &Board) -> (Board, usize) {
    let mut next = board.clone();
    let mut cleared = 0;

    let mut y = BOARD_HEIGHT as usize;
    while y > 0 {
        let row = y - 1;
        if next.is_row_full(row) {
            next.remove_row(row);
            cleared += 1;
            // Re-examine the same index.
        } else {
            y -= 1;
        }
    }

    (next, cleared)
}
