//! Background polling of a department queue.
//!
//! The store has no change notification, so a station refreshes its queue
//! on a fixed interval. [`QueueWatch`] owns that loop: it publishes a new
//! [`QueueSnapshot`] whenever the queue's orders change and stops for good when
//! stopped or dropped.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use super::Workshop;
use crate::{
    error::{Result, ShopError},
    models::Order,
    queue::{self, QueueQuery},
};

/// Default refresh interval for a station's queue.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// One refresh of a department queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueSnapshot {
    /// Store revision the queue was computed from
    pub revision: u64,
    pub orders: Vec<Order>,
}

/// Handle to a running queue poller.
pub struct QueueWatch {
    receiver: watch::Receiver<QueueSnapshot>,
    stopped: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl QueueWatch {
    /// The most recently published snapshot.
    pub fn latest(&self) -> QueueSnapshot {
        self.receiver.borrow().clone()
    }

    /// Waits for the next snapshot that differs from the last one seen.
    ///
    /// Returns `None` once the poller has stopped.
    pub async fn changed(&mut self) -> Option<QueueSnapshot> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Another receiver for the same snapshots.
    pub fn subscribe(&self) -> watch::Receiver<QueueSnapshot> {
        self.receiver.clone()
    }

    /// Stops polling and waits for the poller to finish.
    ///
    /// No snapshot is published after this returns, including one whose
    /// load was already in flight.
    pub async fn stop(mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

impl Drop for QueueWatch {
    fn drop(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Workshop {
    /// Starts polling a department queue every `interval`.
    ///
    /// The first snapshot is loaded before this returns, so load errors at
    /// start-up surface here. Later load failures are logged and the
    /// previous snapshot stays current.
    ///
    /// # Errors
    ///
    /// * `ShopError::Validation` - When `interval` is zero
    pub async fn watch_queue(&self, query: QueueQuery, interval: Duration) -> Result<QueueWatch> {
        if interval.is_zero() {
            return Err(ShopError::validation("interval")
                .with_reason("Poll interval must be greater than zero"));
        }

        let initial = self.snapshot(&query).await?;
        let (sender, receiver) = watch::channel(initial);
        let stopped = Arc::new(AtomicBool::new(false));

        let workshop = self.clone();
        let stop_flag = Arc::clone(&stopped);
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if sender.is_closed() {
                    break;
                }

                let snapshot = match workshop.snapshot(&query).await {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        log::warn!("Refreshing the {} queue failed: {e}", query.department);
                        continue;
                    }
                };

                if stop_flag.load(Ordering::SeqCst) {
                    break;
                }
                sender.send_if_modified(|current| {
                    if current.orders == snapshot.orders {
                        current.revision = snapshot.revision;
                        false
                    } else {
                        *current = snapshot;
                        true
                    }
                });
            }
            log::debug!("Stopped watching the {} queue", query.department);
        });

        Ok(QueueWatch {
            receiver,
            stopped,
            handle: Some(handle),
        })
    }

    async fn snapshot(&self, query: &QueueQuery) -> Result<QueueSnapshot> {
        let collection = self.load().await?;
        Ok(QueueSnapshot {
            revision: collection.revision,
            orders: queue::list_queue(&collection.orders, query),
        })
    }
}
