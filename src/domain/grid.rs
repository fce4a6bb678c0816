use std::error::Error;
use std::fmt;

use rand::Rng;
use tracing::{debug, info, trace};

use super::{Assignment, Cell};

/// Errors from grid construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid needs at least one cell per side.
    ZeroDimension,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "grid dimension must be at least 1"),
        }
    }
}

impl Error for GridError {}

/// Grid owns the full collection of cells and their fixed coordinates.
///
/// While `ready` is true the collection holds exactly `dimension²`
/// cells; while a reseed is in flight `ready` is false and the
/// scheduler skips its cycles instead of reading a half-seeded
/// population.
#[derive(Clone, Debug)]
pub struct Grid {
    dimension: usize,
    cell_size: f32,
    cells: Vec<Cell>,
    ready: bool,
}

impl Grid {
    /// Create and randomly seed a `dimension × dimension` grid.
    ///
    /// Cells are created in row-major order (y outer, x inner) with
    /// sequential ids from 0; each starts alive with probability 0.5.
    /// `cell_size` is carried for the renderer only.
    pub fn generate(dimension: usize, cell_size: f32) -> Result<Self, GridError> {
        Self::generate_with(dimension, cell_size, &mut rand::rng())
    }

    /// Seeded variant of [`Grid::generate`].
    pub fn generate_with(
        dimension: usize,
        cell_size: f32,
        rng: &mut impl Rng,
    ) -> Result<Self, GridError> {
        if dimension == 0 {
            return Err(GridError::ZeroDimension);
        }

        info!(dimension, "generating grid");
        let mut cells = Vec::with_capacity(dimension * dimension);
        for y in 0..dimension {
            for x in 0..dimension {
                let alive = rng.random_bool(0.5);
                let id = cells.len();
                trace!(id, x, y, alive, "seeded cell");
                cells.push(Cell::new(id, x, y, alive));
            }
        }
        info!(total = cells.len(), "generation complete");

        Ok(Self {
            dimension,
            cell_size,
            cells,
            ready: true,
        })
    }

    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub const fn ready(&self) -> bool {
        self.ready
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count of cells with `alive == true`. Zero means extinction.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Get the cell at the given coordinates, or `None` outside the
    /// grid boundary. The grid is non-wrapping: negative and
    /// `≥ dimension` coordinates have no cell.
    pub fn lookup(&self, x: isize, y: isize) -> Option<&Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.dimension && y < self.dimension).then(|| &self.cells[y * self.dimension + x])
    }

    /// Commit the next generation, overwriting every cell's alive flag
    /// from the assignment. The only rule-driven mutation path.
    ///
    /// An assignment of mismatched length is ignored.
    pub fn apply_next_generation(&mut self, next: &Assignment) {
        if next.len() != self.cells.len() {
            debug!(
                expected = self.cells.len(),
                got = next.len(),
                "assignment length mismatch, commit skipped"
            );
            return;
        }
        for cell in &mut self.cells {
            if let Some(alive) = next.get(cell.id()) {
                cell.set_alive(alive);
            }
        }
    }

    /// Flip a single cell between alive and dead.
    ///
    /// Toggles are accepted whenever the grid is ready, including while
    /// the simulation is running; the flip is picked up by the next
    /// tick's snapshot. While a reseed is in flight the toggle is
    /// dropped. Out-of-bounds coordinates are ignored.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if !self.ready {
            debug!(x, y, "toggle ignored, grid not ready");
            return;
        }
        if x < self.dimension && y < self.dimension {
            self.cells[y * self.dimension + x].toggle();
        }
    }

    /// Set one cell's alive flag directly. Used by pattern seeding;
    /// out-of-bounds coordinates are ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.dimension && y < self.dimension {
            self.cells[y * self.dimension + x].set_alive(alive);
        }
    }

    /// Kill every cell. First half of the clear-then-seed preset path.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_alive(false));
    }

    /// Mark the grid not ready ahead of an asynchronous reseed.
    ///
    /// Must happen before the lock protecting the grid is released, so
    /// no cycle can run between extinction and the reseed.
    pub fn begin_restart(&mut self) {
        self.ready = false;
    }

    /// Reseed every cell's alive state independently at probability
    /// 0.5. Identities and coordinates are preserved; the whole
    /// population distribution is replaced, not just a subset.
    ///
    /// The grid is not ready for the duration and becomes ready again
    /// only once every cell has its final value.
    pub fn restart(&mut self) {
        self.restart_with(&mut rand::rng());
    }

    /// Seeded variant of [`Grid::restart`].
    pub fn restart_with(&mut self, rng: &mut impl Rng) {
        self.ready = false;
        info!("restarting life");
        for cell in &mut self.cells {
            let alive = rng.random_bool(0.5);
            trace!(id = cell.id(), alive, "reseeded cell");
            cell.set_alive(alive);
        }
        self.ready = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_grid(dimension: usize) -> Grid {
        let mut rng = StdRng::seed_from_u64(7);
        Grid::generate_with(dimension, 8.0, &mut rng).unwrap()
    }

    #[test]
    fn test_zero_dimension_fails_fast() {
        assert_eq!(Grid::generate(0, 8.0).unwrap_err(), GridError::ZeroDimension);
    }

    #[test]
    fn test_generate_is_row_major_with_sequential_ids() {
        let grid = test_grid(4);
        assert_eq!(grid.cells().len(), 16);
        assert!(grid.ready());
        for (idx, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.id(), idx);
            assert_eq!(cell.x(), idx % 4);
            assert_eq!(cell.y(), idx / 4);
        }
    }

    #[test]
    fn test_lookup_rejects_out_of_bounds() {
        let grid = test_grid(8);
        assert!(grid.lookup(-1, 0).is_none());
        assert!(grid.lookup(0, -1).is_none());
        assert!(grid.lookup(8, 0).is_none());
        assert!(grid.lookup(0, 8).is_none());
        assert_eq!(grid.lookup(3, 5).map(|c| (c.x(), c.y())), Some((3, 5)));
    }

    #[test]
    fn test_toggle_flips_exactly_one_cell() {
        let mut grid = test_grid(8);
        grid.clear();
        grid.toggle_cell(2, 3);
        assert_eq!(grid.alive_count(), 1);
        assert!(grid.lookup(2, 3).is_some_and(Cell::is_alive));

        grid.toggle_cell(2, 3);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_toggle_ignored_while_not_ready() {
        let mut grid = test_grid(8);
        grid.clear();
        grid.begin_restart();
        grid.toggle_cell(2, 3);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_toggle_ignores_out_of_bounds() {
        let mut grid = test_grid(4);
        let before = grid.alive_count();
        grid.toggle_cell(4, 0);
        grid.toggle_cell(0, 99);
        assert_eq!(grid.alive_count(), before);
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut grid = test_grid(8);
        grid.clear();
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_restart_replaces_population_and_keeps_geometry() {
        let mut grid = test_grid(16);
        grid.clear();
        let mut rng = StdRng::seed_from_u64(99);
        grid.restart_with(&mut rng);

        assert!(grid.ready());
        assert_eq!(grid.cells().len(), 256);
        // 256 independent fair coins: all-dead is vanishingly unlikely.
        assert!(grid.alive_count() > 0);
        for (idx, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.id(), idx);
        }
    }

    #[test]
    fn test_mismatched_assignment_is_ignored() {
        let mut grid = test_grid(4);
        let small = test_grid(2);
        let assignment = super::super::rules::evaluate(&small);
        let before: Vec<bool> = grid.cells().iter().map(Cell::is_alive).collect();
        grid.apply_next_generation(&assignment);
        let after: Vec<bool> = grid.cells().iter().map(Cell::is_alive).collect();
        assert_eq!(before, after);
    }
}
