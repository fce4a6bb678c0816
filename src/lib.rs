// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Scheduling and shared grid state
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Assignment, Cell, Grid, GridError, Pattern, presets};
pub use application::{CycleOutcome, Scheduler, SharedGrid, DEFAULT_TICK_INTERVAL};
