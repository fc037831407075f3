//! Geometry module - piece shapes and pure shape transforms
//!
//! A [`Shape`] is a small rectangular grid of filled flags. Rotation is
//! computed on demand from the canonical grid: one clockwise step maps
//! `new[i][j] = old[height - 1 - j][i]`, so the width and height swap.
//! Nothing here touches a board.

use arrayvec::ArrayVec;
use serde::Serialize;

/// Largest supported shape side
pub const MAX_SHAPE_DIM: usize = 4;

/// Filled-cell offsets of one shape, as `(col, row)` pairs
pub type ShapeCells = ArrayVec<(i8, i8), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Board coordinate of a shape's top-left corner
///
/// `x` is the column, `y` the row counted from the top. `y` may be negative
/// while a piece hangs above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape has no filled cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("shape is {width}x{height}, larger than 4x4")]
    TooLarge { width: usize, height: usize },
}

/// Rectangular grid of filled flags, at most 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    grid: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a fixed-size grid (non-zero = filled).
    ///
    /// Usable in `const` and `static` items; panics at compile time for
    /// grids larger than [`MAX_SHAPE_DIM`] or with no filled cell.
    pub const fn from_grid<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Self {
        assert!(W > 0 && H > 0, "shape must not be empty");
        assert!(
            W <= MAX_SHAPE_DIM && H <= MAX_SHAPE_DIM,
            "shape larger than 4x4"
        );

        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut filled = false;
        let mut r = 0;
        while r < H {
            let mut c = 0;
            while c < W {
                grid[r][c] = rows[r][c] != 0;
                filled |= grid[r][c];
                c += 1;
            }
            r += 1;
        }
        assert!(filled, "shape has no filled cells");

        Self {
            width: W as u8,
            height: H as u8,
            grid,
        }
    }

    /// Build a shape from runtime rows (non-zero = filled)
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, len)| len != width)
        {
            return Err(ShapeError::Ragged {
                row,
                expected: width,
                found,
            });
        }
        if width > MAX_SHAPE_DIM || height > MAX_SHAPE_DIM {
            return Err(ShapeError::TooLarge { width, height });
        }

        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid[r][c] = v != 0;
            }
        }
        if !grid.iter().flatten().any(|&cell| cell) {
            return Err(ShapeError::Empty);
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            grid,
        })
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether local cell `(col, row)` is filled; false outside the grid
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.width as usize && row < self.height as usize && self.grid[row][col]
    }

    /// Filled cells as `(col, row)` offsets, row-major
    pub fn filled_cells(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for row in 0..self.height as usize {
            for col in 0..self.width as usize {
                if self.grid[row][col] {
                    cells.push((col as i8, row as i8));
                }
            }
        }
        cells
    }

    /// Grid rows as vectors, for display and debugging
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height as usize)
            .map(|r| self.grid[r][..self.width as usize].to_vec())
            .collect()
    }

    /// One 90° clockwise turn
    pub fn rotated_cw(&self) -> Self {
        let old_h = self.height as usize;
        let new_w = self.height;
        let new_h = self.width;

        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in grid.iter_mut().enumerate().take(new_h as usize) {
            for (j, cell) in row.iter_mut().enumerate().take(new_w as usize) {
                *cell = self.grid[old_h - 1 - j][i];
            }
        }

        Self {
            width: new_w,
            height: new_h,
            grid,
        }
    }
}

/// Apply `steps` clockwise quarter turns (taken modulo 4)
pub fn rotate(shape: &Shape, steps: u8) -> Shape {
    let mut rotated = *shape;
    for _ in 0..steps % 4 {
        rotated = rotated.rotated_cw();
    }
    rotated
}

/// Inclusive extent of a shape's filled cells, in local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_col: u8,
    pub max_col: u8,
    pub min_row: u8,
    pub max_row: u8,
}

impl BoundingBox {
    pub fn width(&self) -> u8 {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> u8 {
        self.max_row - self.min_row + 1
    }
}

/// Bounding box of the filled cells.
///
/// Every constructed shape has at least one filled cell, so the box is
/// never empty.
pub fn bounding_box(shape: &Shape) -> BoundingBox {
    let init = BoundingBox {
        min_col: u8::MAX,
        max_col: 0,
        min_row: u8::MAX,
        max_row: 0,
    };
    shape
        .filled_cells()
        .iter()
        .fold(init, |bb, &(c, r)| BoundingBox {
            min_col: bb.min_col.min(c as u8),
            max_col: bb.max_col.max(c as u8),
            min_row: bb.min_row.min(r as u8),
            max_row: bb.max_row.max(r as u8),
        })
}
