use std::sync::Arc;
use std::time::Duration;

use storage::{ScoreStore, services::integrity};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// Periodically compares stored totals with the award ledger and rebuilds
/// them when they disagree. The first check runs immediately.
pub fn spawn_integrity_monitor(store: Arc<dyn ScoreStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match integrity::check_and_repair(store.as_ref()).await {
                Ok(Some(report)) => tracing::warn!(
                    corrected = report.corrected.len(),
                    "Integrity monitor repaired drifted totals"
                ),
                Ok(None) => tracing::debug!("Integrity monitor found no drift"),
                Err(e) => tracing::error!("Integrity check failed: {}", e),
            }
        }
    })
}
