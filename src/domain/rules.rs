use super::{Cell, Grid};

/// Next alive/dead states for one generation, indexed by cell identity.
///
/// Produced only by [`evaluate`] from a pre-tick snapshot and committed
/// by [`Grid::apply_next_generation`] as a single step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    states: Vec<bool>,
}

impl Assignment {
    /// Next state for the given cell identity.
    pub fn get(&self, id: usize) -> Option<bool> {
        self.states.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Pure function computing the next state under the standard Life
/// rules:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// Count alive neighbors among the 8 adjacent coordinates.
/// Out-of-bounds neighbors do not exist and count as dead; the grid
/// does not wrap.
fn count_live_neighbors(grid: &Grid, cell: &Cell) -> u8 {
    let (x, y) = (cell.x() as isize, cell.y() as isize);

    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(|(dx, dy)| grid.lookup(x + dx, y + dy))
        .filter(|neighbor| neighbor.is_alive())
        .count() as u8
}

/// Compute the next generation from the current grid state.
///
/// Reads only the snapshot it is given: next-generation values never
/// influence neighbor counts within the same pass. One entry per cell
/// identity; no side effects.
pub fn evaluate(grid: &Grid) -> Assignment {
    let states = grid
        .cells()
        .iter()
        .map(|cell| next_state(cell.is_alive(), count_live_neighbors(grid, cell)))
        .collect();

    Assignment { states }
}
