use crate::app_logger::LoggerInner;
use crate::{LoggerError, LoggerResult};

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// How often the background task checks for a date change and sweeps old files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceSchedule {
    pub rotation_check: Duration,
    pub retention_sweep: Duration,
}

impl Default for MaintenanceSchedule {
    fn default() -> Self {
        Self {
            rotation_check: Duration::from_secs(30 * 60),
            retention_sweep: Duration::from_secs(2 * 60 * 60),
        }
    }
}

/// Handle to the running maintenance loop.
pub(crate) struct MaintenanceTask {
    shutdown_tx: broadcast::Sender<()>,
    handle: JoinHandle<()>,
}

impl MaintenanceTask {
    /// Spawn the loop on the current tokio runtime.
    ///
    /// The task holds only a weak reference and exits on its own once the
    /// logger is dropped.
    pub(crate) fn spawn(
        logger: Weak<LoggerInner>,
        schedule: MaintenanceSchedule,
    ) -> LoggerResult<Self> {
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| LoggerError::no_runtime())?;
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

        let handle = runtime.spawn(async move {
            let start = Instant::now();
            let mut rotation = interval_at(start + schedule.rotation_check, schedule.rotation_check);
            rotation.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut sweep = interval_at(start + schedule.retention_sweep, schedule.retention_sweep);
            sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = rotation.tick() => {
                        let Some(inner) = logger.upgrade() else { break };
                        inner.run_rotation_check();
                    }
                    _ = sweep.tick() => {
                        let Some(inner) = logger.upgrade() else { break };
                        inner.run_retention_sweep();
                    }
                }
            }
        });

        Ok(Self {
            shutdown_tx,
            handle,
        })
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal the loop and wait for it to exit.
    pub(crate) async fn stop(self) -> LoggerResult<()> {
        let _ = self.shutdown_tx.send(());
        self.handle
            .await
            .map_err(|e| LoggerError::maintenance(e.to_string()))
    }
}
