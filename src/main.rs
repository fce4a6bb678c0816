use macroquad::prelude::*;

use lifegrid::{DEFAULT_TICK_INTERVAL, Grid, Scheduler, SharedGrid, input, rendering};

const DIMENSION: usize = 16;
const CELL_SIZE: f32 = 32.0;
const STATUS_BAR_HEIGHT: i32 = 28;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn window_conf() -> Conf {
    let side = (DIMENSION as f32 * CELL_SIZE) as i32;
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: side,
        window_height: side + STATUS_BAR_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let grid = match Grid::generate(DIMENSION, CELL_SIZE) {
        Ok(grid) => grid,
        Err(e) => {
            tracing::error!(error = %e, "failed to build grid");
            return;
        }
    };
    let shared = SharedGrid::new(grid);

    let mut scheduler = Scheduler::new(shared.clone(), DEFAULT_TICK_INTERVAL);
    scheduler.start();

    loop {
        input::process_keyboard(&mut scheduler, &shared);
        input::handle_mouse_toggle(&shared, mouse_position());

        clear_background(BLACK);
        rendering::draw_grid(&shared);
        rendering::draw_status(&shared, &scheduler);

        next_frame().await;
    }
}
