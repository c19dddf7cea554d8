//! Background liveness probe, independent of the per-action controllers.

use std::{sync::Arc, time::Duration};

use tokio::sync::watch;
use tracing::info;

use crate::DocumentClient;

pub const DEFAULT_HEALTH_INTERVAL: Duration = Duration::from_secs(30);

/// Latest probe outcome. `Reported` means the server answered with a status
/// other than "UP"; `Unreachable` means the probe itself failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthView {
    /// No probe has completed yet.
    Unknown,
    Up,
    Reported(String),
    Unreachable(String),
}

pub async fn probe(client: &DocumentClient) -> HealthView {
    match client.check_health().await {
        Ok(status) if status.is_up() => HealthView::Up,
        Ok(status) => HealthView::Reported(status.status),
        Err(err) => HealthView::Unreachable(err.to_string()),
    }
}

/// Spawns the periodic probe task: one probe immediately, then one per
/// interval tick. The receiver always holds the latest view; the task ends
/// once every receiver has been dropped.
pub fn spawn_health_monitor(
    client: Arc<DocumentClient>,
    interval: Duration,
) -> watch::Receiver<HealthView> {
    let (tx, rx) = watch::channel(HealthView::Unknown);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let view = probe(&client).await;
            if *tx.borrow() != view {
                info!(?view, "health state changed");
            }
            if tx.send(view).is_err() {
                break;
            }
        }
    });
    rx
}
