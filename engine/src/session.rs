// session.rs - Play/pause drive loop around one grid.

use crate::LifeError;
use crate::grid::{Grid, GridError};
use crate::patterns;

/// The host's recurring per-frame signal.
///
/// `schedule` arranges for the host to start invoking `Session::tick`
/// once per frame and returns an opaque handle; `cancel` revokes it
/// synchronously, so no frame signal fires after it returns.
pub trait FrameScheduler {
    type Handle;

    fn schedule(&mut self) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Owns the live grid and the play/pause state machine.
///
/// Two states: paused (no scheduler handle) and running (handle held).
/// Interactive edits are legal in either state; `tick` only advances the
/// simulation while running. The session starts paused.
pub struct Session<S: FrameScheduler> {
    grid: Grid,
    scheduler: S,
    frame: Option<S::Handle>,
    generation: u32,
}

impl<S: FrameScheduler> Session<S> {
    pub fn new(grid: Grid, scheduler: S) -> Self {
        Self {
            grid,
            scheduler,
            frame: None,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations stepped since the board was last (re)filled.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Start ticking. No-op while already running.
    pub fn play(&mut self) {
        if self.frame.is_none() {
            self.frame = Some(self.scheduler.schedule());
        }
    }

    /// Stop ticking and release the frame handle. No-op while paused.
    pub fn pause(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// One frame signal: advance a generation while running.
    ///
    /// Returns whether the board changed and a redraw is due. Never
    /// re-schedules; staying subscribed to frame signals is the
    /// scheduler's side of the contract.
    pub fn tick(&mut self) -> bool {
        if self.frame.is_none() {
            return false;
        }
        self.grid.step();
        self.generation += 1;
        true
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        self.grid.toggle_cell(row, col)
    }

    /// Stamp a catalog pattern by index at the given anchor.
    pub fn stamp(&mut self, pattern_id: usize, row: u32, col: u32) -> Result<(), LifeError> {
        let pattern = patterns::lookup(pattern_id)?;
        self.grid.stamp(pattern, row, col)?;
        Ok(())
    }

    /// Kill the board and reset the generation counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Refill the board from a seed and reset the generation counter.
    pub fn randomize(&mut self, seed: u32) {
        self.grid.randomize(seed);
        self.generation = 0;
    }
}

impl<S: FrameScheduler> Drop for Session<S> {
    // Session teardown releases an active frame handle.
    fn drop(&mut self) {
        self.pause();
    }
}
