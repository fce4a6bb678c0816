mod scheduler;
mod shared;

pub use scheduler::{CycleOutcome, DEFAULT_TICK_INTERVAL, Scheduler};
pub use shared::SharedGrid;
