//! Periodic refresher for the lot working set.
//!
//! Spawns a background task that stamps every lot's `last_update` on a
//! fixed interval, mirroring what the live hardware feed would do. The
//! task is tied to the handle: dropping the handle aborts it, so it never
//! outlives the server that spawned it.

use crate::services::dashboard::Dashboard;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct RefreshHandle {
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Starts the refresh loop. The first stamp happens one full period
    /// after spawning, not immediately.
    pub fn spawn(dashboard: Arc<Dashboard>, period: Duration) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                dashboard.touch_all().await;
                debug!("Refreshed lot timestamps");
            }
        });
        RefreshHandle { task: Some(task) }
    }

    /// Stops the refresh loop and waits for the task to wind down.
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
