//! Periodic "now" refresh for the current-time indicator.
//!
//! The ticker owns a tokio task that publishes the local wall-clock time on a
//! watch channel once on start and then every period. Cancelling or dropping
//! the ticker stops the task, which closes the channel for subscribers.

use std::time::Duration as StdDuration;

use chrono::{Local, NaiveDateTime};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Default refresh period of the "now" marker.
pub const DEFAULT_REFRESH: StdDuration = StdDuration::from_secs(60);

pub struct NowTicker {
    rx: watch::Receiver<NaiveDateTime>,
    handle: JoinHandle<()>,
}

impl NowTicker {
    /// Spawn a ticker reading the local clock. Must be called inside a tokio runtime.
    pub fn spawn(period: StdDuration) -> Self {
        Self::spawn_with(period, || Local::now().naive_local())
    }

    /// Spawn a ticker reading time from `clock`.
    pub fn spawn_with<F>(period: StdDuration, clock: F) -> Self
    where
        F: Fn() -> NaiveDateTime + Send + 'static,
    {
        let (tx, rx) = watch::channel(clock());

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately; the initial value is already published.
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(clock()).is_err() {
                    log::debug!("Now ticker has no subscribers left, stopping");
                    break;
                }
            }
        });

        log::debug!("Now ticker started with period {:?}", period);
        Self { rx, handle }
    }

    /// Latest published time
    pub fn current(&self) -> NaiveDateTime {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<NaiveDateTime> {
        self.rx.clone()
    }

    /// Stop the refresh task
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
