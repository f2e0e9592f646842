// lib.rs - Toroidal Game of Life engine: grid, pattern catalog, drive loop.
//
// The engine is renderer-agnostic. A host supplies a frame scheduler and
// draws from the grid's cell buffer; see `Session` for the drive loop and
// `Grid::cells_view` for the zero-copy rendering contract.

pub mod grid;
pub mod patterns;
pub mod session;

pub use grid::{Cell, Grid, GridError};
pub use patterns::{Pattern, UnknownPattern, PATTERNS, lookup, lookup_name, names};
pub use session::{FrameScheduler, Session};

use thiserror::Error;

/// Any failure an interactive edit can surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Pattern(#[from] UnknownPattern),
}
