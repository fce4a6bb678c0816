use macroquad::prelude::*;

use crate::application::{Scheduler, SharedGrid};
use crate::domain::presets;

/// Map keyboard input onto core operations.
///
/// Space toggles the life cycle, S advances one generation, and
/// C/O/B clear the grid and seed a preset.
pub fn process_keyboard(scheduler: &mut Scheduler, shared: &SharedGrid) {
    if is_key_pressed(KeyCode::Space) {
        scheduler.toggle();
    }
    if is_key_pressed(KeyCode::S) {
        scheduler.step_once();
    }
    if is_key_pressed(KeyCode::C) {
        let dimension = shared.dimension();
        shared.seed_preset(&presets::diagonal_cross(dimension), 0, 0);
    }
    if is_key_pressed(KeyCode::O) {
        let center = shared.dimension() / 2;
        shared.seed_preset(&presets::ell(), center, center);
    }
    if is_key_pressed(KeyCode::B) {
        let pattern = presets::block();
        let anchor = (shared.dimension() / 2).saturating_sub(pattern.width / 2);
        shared.seed_preset(&pattern, anchor, anchor);
    }
}

/// Toggle the cell under the cursor on left click.
///
/// Converts screen coordinates into grid coordinates by cell size;
/// clicks outside the grid fall through to the grid's bounds check.
pub fn handle_mouse_toggle(shared: &SharedGrid, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let cell_size = shared.cell_size();
    let (gx, gy) = (mouse_pos.0 / cell_size, mouse_pos.1 / cell_size);
    if gx < 0.0 || gy < 0.0 {
        return;
    }
    shared.toggle_cell(gx as usize, gy as usize);
}
