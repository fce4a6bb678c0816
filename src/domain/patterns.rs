use super::Grid;

/// A pattern that can be placed on the grid.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            width,
            height,
            cells,
        }
    }

    /// Place the pattern on the grid anchored at `(x, y)`.
    /// Cells falling outside the boundary are clipped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for &(dx, dy) in &self.cells {
            grid.set_cell(x + dx, y + dy, true);
        }
    }
}

/// Built-in preset patterns
pub mod presets {
    use super::*;

    /// Two crossing diagonals spanning the whole grid
    pub fn diagonal_cross(dimension: usize) -> Pattern {
        let cells = (0..dimension)
            .flat_map(|i| [(i, i), (dimension - 1 - i, i)])
            .collect();
        Pattern::new("Diagonal cross", cells)
    }

    /// Four cells in an L
    pub fn ell() -> Pattern {
        Pattern::new(
            "Ell",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (0, 2),
            ],
        )
    }

    /// 3x3 block of alive cells
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0), (2, 0),
                (0, 1), (1, 1), (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 1), (1, 1), (2, 1)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn empty_grid(dimension: usize) -> Grid {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::generate_with(dimension, 8.0, &mut rng).unwrap();
        grid.clear();
        grid
    }

    #[test]
    fn test_bounding_box_is_derived() {
        let pattern = presets::block();
        assert_eq!((pattern.width, pattern.height), (3, 3));

        let pattern = presets::ell();
        assert_eq!((pattern.width, pattern.height), (2, 3));
    }

    #[test]
    fn test_diagonal_cross_spans_grid() {
        let pattern = presets::diagonal_cross(16);
        assert_eq!((pattern.width, pattern.height), (16, 16));

        let mut grid = empty_grid(16);
        pattern.place_on(&mut grid, 0, 0);
        // Both diagonals share no cell on an even dimension.
        assert_eq!(grid.alive_count(), 32);
        for i in 0..16 {
            assert!(grid.lookup(i as isize, i as isize).unwrap().is_alive());
            assert!(grid.lookup(15 - i as isize, i as isize).unwrap().is_alive());
        }
    }

    #[test]
    fn test_place_on_clips_at_boundary() {
        let mut grid = empty_grid(4);
        presets::block().place_on(&mut grid, 2, 2);
        // Only the 2x2 corner of the block fits.
        assert_eq!(grid.alive_count(), 4);
    }

    #[test]
    fn test_block_placement() {
        let mut grid = empty_grid(8);
        presets::block().place_on(&mut grid, 2, 2);
        assert_eq!(grid.alive_count(), 9);
        assert!(grid.lookup(2, 2).unwrap().is_alive());
        assert!(grid.lookup(4, 4).unwrap().is_alive());
        assert!(!grid.lookup(5, 5).unwrap().is_alive());
    }
}
