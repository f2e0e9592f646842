// grid.rs - Fixed-size toroidal cell grid and the generation step rule.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::patterns::Pattern;

/// Errors raised by grid construction and direct cell addressing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

/// One cell. `repr(u8)` so a `&[Cell]` doubles as a raw byte buffer for
/// renderers that blit the grid directly.
#[repr(u8)]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    fn toggle(&mut self) {
        *self = match *self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

/// A `width` x `height` torus of cells, row-major
/// (`index(row, col) = row * width + col`).
///
/// Dimensions are fixed for the grid's lifetime. `step`, `toggle_cell` and
/// `stamp` mutate the buffer in place; none of them allocate.
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    // Double buffer for `step`; next-generation values are committed with a
    // swap so no caller ever observes a partially updated grid.
    scratch: Vec<Cell>,
}

impl Grid {
    /// All-dead grid of the given dimensions.
    pub fn empty(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let size = (width * height) as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
            scratch: vec![Cell::Dead; size],
        })
    }

    /// Grid with the default deterministic fill (seed 0).
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::seeded(width, height, 0)
    }

    /// Grid with a reproducible pseudo-random fill. Same seed and
    /// dimensions always produce the same board.
    pub fn seeded(width: u32, height: u32, seed: u32) -> Result<Self, GridError> {
        let mut grid = Self::empty(width, height)?;
        grid.randomize(seed);
        Ok(grid)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view over the live cell buffer, length `width * height`.
    ///
    /// This is a borrow of the internal buffer, not a snapshot: it is the
    /// zero-copy path for per-frame rendering, and it is only valid until
    /// the next mutating call (`step` in particular relocates the buffer).
    pub fn cells_view(&self) -> &[Cell] {
        &self.cells
    }

    /// Refill every cell from a simple seeded generator: hash the seed,
    /// then LCG-advance per cell, alive when the state lands on a
    /// multiple of 3 (roughly a third of the board).
    pub fn randomize(&mut self, seed_value: u32) {
        let mut hasher = DefaultHasher::new();
        seed_value.hash(&mut hasher);
        let mut seed = hasher.finish();

        for cell in self.cells.iter_mut() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            *cell = if seed % 3 == 0 { Cell::Alive } else { Cell::Dead };
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Advance one generation: classic birth-on-3, survive-on-2-or-3 over
    /// the 8 toroidal neighbors. Total over the grid domain, never fails.
    pub fn step(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                let cell = self.cells[idx];
                let live_ns = self.live_neighbor_count(row, col);

                self.scratch[idx] = match (cell, live_ns) {
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Flip a single cell. Direct addressing never wraps; out-of-range
    /// coordinates are an error, not a clamp.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx].toggle();
        Ok(())
    }

    /// Overlay a pattern's cells as `Alive` around an in-bounds anchor.
    ///
    /// Additive only: cells outside the pattern are untouched, and
    /// stamping twice at the same anchor is a no-op the second time.
    /// Offsets wrap toroidally, so patterns stamped near an edge continue
    /// on the opposite side.
    pub fn stamp(&mut self, pattern: &Pattern, row: u32, col: u32) -> Result<(), GridError> {
        self.checked_index(row, col)?;
        for &(delta_row, delta_col) in pattern.cells {
            let n_row = (i64::from(row) + i64::from(delta_row)).rem_euclid(i64::from(self.height));
            let n_col = (i64::from(col) + i64::from(delta_col)).rem_euclid(i64::from(self.width));
            let idx = self.index(n_row as u32, n_col as u32);
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Set the listed cells alive. Fixture helper for tests and hosts that
    /// restore a known board.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) -> Result<(), GridError> {
        for &(row, col) in cells {
            let idx = self.checked_index(row, col)?;
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Hash of the current board, for cycle detection across generations.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    fn checked_index(&self, row: u32, col: u32) -> Result<usize, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(row, col))
    }

    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let mut count = 0;
        // height-1 / width-1 stand in for -1 under the modulus.
        for delta_row in [self.height - 1, 0, 1] {
            for delta_col in [self.width - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }
                let n_row = (row + delta_row) % self.height;
                let n_col = (col + delta_col) % self.width;
                count += self.cells[self.index(n_row, n_col)] as u8;
            }
        }
        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for &cell in row {
                let symbol = match cell {
                    Cell::Dead => "◻",
                    Cell::Alive => "◼",
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
