use macroquad::prelude::*;

use crate::application::{Scheduler, SharedGrid};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell as a filled rectangle sized by the grid's cell
/// size. Works from a snapshot so the tick thread is never blocked
/// for the whole frame.
pub fn draw_grid(shared: &SharedGrid) {
    let cell_size = shared.cell_size();

    for cell in shared.snapshot() {
        let x = cell.x() as f32 * cell_size;
        let y = cell.y() as f32 * cell_size;

        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, cell_size, cell_size, color);
        draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, GRID_LINE_COLOR);
    }
}

/// Status line under the grid: running state, generation count and
/// population.
pub fn draw_status(shared: &SharedGrid, scheduler: &Scheduler) {
    let y = shared.dimension() as f32 * shared.cell_size() + 18.0;
    let state = if scheduler.is_running() { "running" } else { "stopped" };
    let text = format!(
        "{} | gen {} | alive {}",
        state,
        scheduler.generations(),
        shared.alive_count()
    );
    draw_text(&text, 6.0, y, 20.0, WHITE);
}
