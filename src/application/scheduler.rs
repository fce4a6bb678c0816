use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::info;

use super::SharedGrid;
use crate::domain::rules;

/// Default tick interval: effectively as fast as the host timer fires.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Outcome of a single scheduler cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A generation was evaluated and committed.
    Advanced,
    /// The cycle was skipped entirely: guard already set, grid busy,
    /// not ready, or empty. Nothing is queued or coalesced.
    Skipped,
    /// The commit left no cell alive; a reseed is in flight and the
    /// grid is not ready until it finishes.
    Reseeding,
}

/// Periodic driver advancing the simulation one generation per tick.
///
/// Ticks are strictly sequential: the re-entrancy guard absorbs
/// overlapping tick attempts, and the grid's `ready` flag gates cycles
/// while a reseed is in flight. The scheduler is the sole writer of
/// generation commits; it never blocks behind a reseed, it skips.
pub struct Scheduler {
    shared: SharedGrid,
    interval: Duration,
    running: Arc<AtomicBool>,
    cycle_in_process: Arc<AtomicBool>,
    generations: Arc<AtomicU64>,
    ticker: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(shared: SharedGrid, interval: Duration) -> Self {
        Self {
            shared,
            interval,
            running: Arc::new(AtomicBool::new(false)),
            cycle_in_process: Arc::new(AtomicBool::new(false)),
            generations: Arc::new(AtomicU64::new(0)),
            ticker: None,
        }
    }

    /// Begin firing ticks at the configured interval. Idempotent while
    /// already running.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::AcqRel) {
            return;
        }
        info!("life cycle started");

        let shared = self.shared.clone();
        let running = Arc::clone(&self.running);
        let cycle_in_process = Arc::clone(&self.cycle_in_process);
        let generations = Arc::clone(&self.generations);
        let interval = self.interval;

        self.ticker = Some(thread::spawn(move || {
            while running.load(Ordering::Acquire) {
                let tick_start = Instant::now();
                run_cycle(&shared, &cycle_in_process, &generations);
                if let Some(remaining) = interval.checked_sub(tick_start.elapsed()) {
                    thread::sleep(remaining);
                }
            }
        }));
    }

    /// Stop firing ticks. An in-flight cycle is allowed to finish; no
    /// new one starts.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
        info!("life cycle stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Toggle between Running and Stopped.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Run exactly one cycle synchronously, whether or not the
    /// scheduler is running. Shares the guard and skip rules with the
    /// tick thread.
    pub fn step_once(&self) -> CycleOutcome {
        run_cycle(&self.shared, &self.cycle_in_process, &self.generations)
    }

    /// Total committed generations.
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Acquire)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One tick: evaluate the pre-tick snapshot, commit it, and reseed on
/// total extinction.
fn run_cycle(
    shared: &SharedGrid,
    cycle_in_process: &AtomicBool,
    generations: &AtomicU64,
) -> CycleOutcome {
    // Re-entrant tick attempts are absorbed here, never surfaced.
    if cycle_in_process.swap(true, Ordering::AcqRel) {
        return CycleOutcome::Skipped;
    }
    let outcome = advance(shared, generations);
    cycle_in_process.store(false, Ordering::Release);

    if outcome == CycleOutcome::Reseeding {
        let shared = shared.clone();
        thread::spawn(move || shared.with(|grid| grid.restart()));
    }
    outcome
}

fn advance(shared: &SharedGrid, generations: &AtomicU64) -> CycleOutcome {
    shared
        .try_with(|grid| {
            if !grid.ready() || grid.cells().is_empty() {
                return CycleOutcome::Skipped;
            }

            let next = rules::evaluate(grid);
            grid.apply_next_generation(&next);
            generations.fetch_add(1, Ordering::AcqRel);

            if grid.alive_count() == 0 {
                info!("everything is dead, restarting life");
                // Not ready must be visible before the lock is
                // released: no cycle may start between extinction and
                // the reseed.
                grid.begin_restart();
                return CycleOutcome::Reseeding;
            }
            CycleOutcome::Advanced
        })
        .unwrap_or(CycleOutcome::Skipped)
}
