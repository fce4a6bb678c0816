use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Cell, Grid, Pattern};

/// Shared handle to the grid.
///
/// The mutex is the single mutual-exclusion mechanism guarding all
/// writes to the cell collection: the scheduler commits generations
/// through it, the reseed task runs under it, and external callers
/// toggle or seed cells through it. Clones share the same grid.
#[derive(Clone)]
pub struct SharedGrid {
    inner: Arc<Mutex<Grid>>,
}

impl SharedGrid {
    pub fn new(grid: Grid) -> Self {
        Self {
            inner: Arc::new(Mutex::new(grid)),
        }
    }

    /// Run a closure with the grid locked.
    pub fn with<T>(&self, f: impl FnOnce(&mut Grid) -> T) -> T {
        f(&mut self.lock())
    }

    /// Non-blocking variant. `None` when the lock is contended, which
    /// on this crate's lock discipline means a reseed is holding it.
    pub fn try_with<T>(&self, f: impl FnOnce(&mut Grid) -> T) -> Option<T> {
        self.inner.try_lock().ok().map(|mut grid| f(&mut grid))
    }

    fn lock(&self) -> MutexGuard<'_, Grid> {
        // A poisoned lock only means a holder panicked mid-write; the
        // grid is plain flags and stays structurally sound.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cloned cell states for the renderer: each entry carries
    /// `(x, y, alive)` with the grid's `cell_size` alongside.
    pub fn snapshot(&self) -> Vec<Cell> {
        self.with(|grid| grid.cells().to_vec())
    }

    /// Whether the grid is stable and readable. False while a reseed
    /// is in flight, including the window where the reseed task holds
    /// the lock.
    pub fn ready(&self) -> bool {
        self.try_with(|grid| grid.ready()).unwrap_or(false)
    }

    pub fn alive_count(&self) -> usize {
        self.with(|grid| grid.alive_count())
    }

    pub fn dimension(&self) -> usize {
        self.with(|grid| grid.dimension())
    }

    pub fn cell_size(&self) -> f32 {
        self.with(|grid| grid.cell_size())
    }

    /// Coordinate-addressed toggle from the input dispatcher.
    pub fn toggle_cell(&self, x: usize, y: usize) {
        self.with(|grid| grid.toggle_cell(x, y));
    }

    /// Clear all cells, then place a pattern anchored at `(x, y)`.
    /// Dropped while the grid is not ready.
    pub fn seed_preset(&self, pattern: &Pattern, x: usize, y: usize) {
        self.with(|grid| {
            if !grid.ready() {
                return;
            }
            grid.clear();
            pattern.place_on(grid, x, y);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn shared_grid(dimension: usize) -> SharedGrid {
        let mut rng = StdRng::seed_from_u64(7);
        SharedGrid::new(Grid::generate_with(dimension, 8.0, &mut rng).unwrap())
    }

    #[test]
    fn test_clones_share_one_grid() {
        let shared = shared_grid(8);
        let other = shared.clone();
        shared.with(|grid| grid.clear());
        other.toggle_cell(1, 1);
        assert_eq!(shared.alive_count(), 1);
    }

    #[test]
    fn test_seed_preset_clears_first() {
        let shared = shared_grid(8);
        shared.seed_preset(&presets::block(), 2, 2);
        assert_eq!(shared.alive_count(), 9);
    }

    #[test]
    fn test_seed_preset_dropped_while_not_ready() {
        let shared = shared_grid(8);
        shared.with(|grid| {
            grid.clear();
            grid.begin_restart();
        });
        shared.seed_preset(&presets::block(), 2, 2);
        assert_eq!(shared.alive_count(), 0);
    }

    #[test]
    fn test_snapshot_matches_grid() {
        let shared = shared_grid(4);
        let snapshot = shared.snapshot();
        assert_eq!(snapshot.len(), 16);
        assert_eq!(
            snapshot.iter().filter(|cell| cell.is_alive()).count(),
            shared.alive_count()
        );
    }
}
