//! Recurring tick task that advances every simulated table.

use std::{sync::Arc, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use super::registry::TableRegistry;

/// Owns the periodic dealing tick. Started once at process start and runs
/// until process exit; there is no pause or cancel.
pub struct Scheduler {
    registry: Arc<TableRegistry>,
    tick: Duration,
}

impl Scheduler {
    pub fn new(registry: Arc<TableRegistry>, tick: Duration) -> Self {
        Self { registry, tick }
    }

    /// Spawn the tick loop. Each completed tick reschedules the next one
    /// a full interval later (not wall-clock aligned). Per-table failures
    /// are isolated inside `advance_all_simulated`, so a bad table can
    /// never stop future ticks.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval's first tick completes immediately; consume it
            // so the first advance lands one full interval after startup.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let advanced = self.registry.advance_all_simulated().await;
                log::debug!("Tick complete, advanced {advanced} table(s)");
            }
        })
    }
}
