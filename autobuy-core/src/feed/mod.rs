//! Publish/subscribe price distribution.
//!
//! A `PriceFeed` owns the set of subscribed listeners and distributes every
//! generated `PriceUpdate` to a snapshot of that set, one listener at a
//! time. The tick loop runs as a background task; a `FeedHandle` lets the
//! caller wait for the run to finish.

pub mod random;

use autobuy::model::market_data::PriceUpdate;
use autobuy::traits::price_listener::PriceListener;
use autobuy::traits::tick_source::TickSource;
use log::{debug, warn};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

#[cfg(test)]
mod tests;

/// Errors surfaced while waiting for a feed run to complete.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The run was cancelled before reaching natural completion.
    #[error("feed run was cancelled before completion")]
    Cancelled,
    /// The run's task panicked.
    #[error("feed run panicked: {0}")]
    Panicked(String),
    /// The wait expired before the run completed; the run has been aborted.
    #[error("feed run did not complete within {0:?}")]
    Timeout(Duration),
}

/// A feed of price updates distributed to subscribed listeners.
///
/// The listener set is the only shared mutable state. It is guarded by a
/// mutex, and every tick iterates a point-in-time snapshot, so subscribing
/// or unsubscribing while a run is in progress never corrupts an in-progress
/// distribution: listeners removed mid-tick may still see the current tick,
/// and listeners added mid-tick may or may not.
pub struct PriceFeed {
    listeners: Mutex<Vec<Arc<dyn PriceListener>>>,
    tick_interval: Option<Duration>,
}

impl PriceFeed {
    /// Creates a feed with no subscribers and no pacing between ticks.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            tick_interval: None,
        }
    }

    /// Pauses between ticks during a run. Pacing only; distribution
    /// semantics are unchanged.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = Some(interval);
        self
    }

    /// Adds a listener to the active set.
    ///
    /// Safe to call before, during, or after an active run. The same
    /// listener may be subscribed more than once and is then notified once
    /// per subscription.
    pub fn subscribe(&self, listener: Arc<dyn PriceListener>) {
        self.listeners.lock().unwrap().push(listener);
    }

    /// Removes one subscription of the given listener, matched by reference
    /// identity.
    ///
    /// No-op if the listener is not subscribed. Safe to call concurrently
    /// with an active run: listeners already snapshotted for the current
    /// tick still receive it.
    pub fn unsubscribe(&self, listener: &Arc<dyn PriceListener>) {
        let mut listeners = self.listeners.lock().unwrap();
        if let Some(index) = listeners.iter().position(|l| same_listener(l, listener)) {
            listeners.remove(index);
        }
    }

    /// Number of currently subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    fn snapshot(&self) -> Vec<Arc<dyn PriceListener>> {
        self.listeners.lock().unwrap().clone()
    }

    /// Distributes one update to a snapshot of the subscribed listeners,
    /// synchronously and in subscription order.
    ///
    /// A failing listener is isolated: the error is logged and the remaining
    /// listeners still receive the update. The lock is not held while
    /// listeners run, so a listener may subscribe or unsubscribe from within
    /// its own callback.
    pub fn publish(&self, update: &PriceUpdate) {
        for listener in self.snapshot() {
            if let Err(err) = listener.on_price_update(update) {
                warn!(
                    "listener failed on {} @ {:.2}: {err}",
                    update.get_security(),
                    update.get_price()
                );
            }
        }
    }

    /// Starts a feed run: pulls `source` until it is exhausted, publishing
    /// every update to the current subscribers.
    ///
    /// The run executes as a background task so the caller can register or
    /// remove listeners independently and block on completion via the
    /// returned handle. The loop keeps no state on the feed itself, so a
    /// feed may be started again after a run completes by supplying a fresh
    /// source.
    pub fn start<S>(self: Arc<Self>, mut source: S) -> FeedHandle
    where
        S: TickSource + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticks = 0u32;
            while let Some(update) = source.next_tick() {
                self.publish(&update);
                ticks += 1;
                if let Some(interval) = self.tick_interval {
                    tokio::time::sleep(interval).await;
                }
            }
            debug!("feed run completed after {ticks} ticks");
        });
        FeedHandle { task }
    }
}

impl Default for PriceFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares listener identity by data address only. Trait-object fat
/// pointers can carry distinct vtables for the same underlying value.
fn same_listener(a: &Arc<dyn PriceListener>, b: &Arc<dyn PriceListener>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

/// Handle to an in-progress feed run.
pub struct FeedHandle {
    task: JoinHandle<()>,
}

impl FeedHandle {
    /// Waits for the run to reach natural completion.
    ///
    /// The wait is unbounded; use [`FeedHandle::join_timeout`] to bound it.
    /// Cancellation of the underlying task surfaces as
    /// [`FeedError::Cancelled`] rather than being swallowed.
    pub async fn join(self) -> Result<(), FeedError> {
        self.task.await.map_err(join_error)
    }

    /// Waits for the run to complete, giving up after `limit`.
    ///
    /// On expiry the run is aborted and [`FeedError::Timeout`] returned.
    pub async fn join_timeout(mut self, limit: Duration) -> Result<(), FeedError> {
        match tokio::time::timeout(limit, &mut self.task).await {
            Ok(result) => result.map_err(join_error),
            Err(_) => {
                self.task.abort();
                Err(FeedError::Timeout(limit))
            }
        }
    }

    /// Requests cancellation of the run; observed through `join`.
    pub fn abort(&self) {
        self.task.abort();
    }
}

fn join_error(err: tokio::task::JoinError) -> FeedError {
    if err.is_cancelled() {
        FeedError::Cancelled
    } else {
        FeedError::Panicked(err.to_string())
    }
}
