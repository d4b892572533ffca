//! The workshop coordinator: the one place orders are mutated.
//!
//! [`Workshop`] sits between an interface layer and the shared order
//! collection. Every mutation runs the same cycle against the store:
//!
//! ```text
//! ┌───────────────┐    ┌────────────────┐    ┌───────────────┐
//! │ load_orders   │───▶│ pure transition│───▶│ save_orders   │
//! │ (fresh read)  │    │ (workflow::*)  │    │ (revision CAS)│
//! └───────────────┘    └────────────────┘    └───────────────┘
//!         ▲                                          │
//!         └──────────── StaleCollection ─────────────┘
//! ```
//!
//! A transition that fails writes nothing, so an error on one order never
//! touches the others. When another writer got in between the read and the
//! write, the whole cycle is repeated on the fresh collection, which is
//! where a lost claim race turns into [`ShopError::Conflict`].
//!
//! ## Submodules
//!
//! - [`builder`]: configuration and construction of a [`Workshop`]
//! - [`order_ops`]: front-desk operations (create, list, dispatch, ledger)
//! - [`workflow_ops`]: department operations (claim, complete, release)
//! - [`handlers`]: operations returning display wrappers for interfaces
//! - [`watch`]: polling a department queue in the background
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rust_decimal::Decimal;
//! use tailor_core::{
//!     models::{Department, Worker},
//!     params::{CreateOrder, ItemInput},
//!     store::MemoryStore,
//!     WorkshopBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workshop = WorkshopBuilder::new()
//!     .with_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .await?;
//!
//! let order = workshop
//!     .create_order(&CreateOrder {
//!         customer_name: "Meena".to_string(),
//!         mobile: "9876543210".to_string(),
//!         items: vec![ItemInput {
//!             cloth_type: "Blouse".to_string(),
//!             qty: 1,
//!             rate: Decimal::from(450),
//!             description: None,
//!             measurements: Default::default(),
//!         }],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! workshop.dispatch_order(order.id).await?;
//! let cutter = Worker::new("w1", "Ravi", Department::Cutting);
//! workshop.claim_order(order.id, &cutter).await?;
//! let outcome = workshop.complete_order(order.id, &cutter).await?;
//! assert_eq!(outcome.order.status.as_str(), "stitching");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::Timestamp;
use tokio::task;

use crate::{
    error::{Result, ShopError},
    models::Order,
    notify::CompletionNotifier,
    store::{OrderCollection, OrderStore},
};

pub mod builder;
pub mod handlers;
pub mod order_ops;
pub mod watch;
pub mod workflow_ops;

pub use builder::WorkshopBuilder;
pub use watch::{QueueSnapshot, QueueWatch};
pub use workflow_ops::{CompletionOutcome, NotificationOutcome};

/// Write attempts before a busy collection is reported as contention.
pub const DEFAULT_MAX_WRITE_ATTEMPTS: u32 = 5;

/// Coordinator over the shared order collection.
#[derive(Clone)]
pub struct Workshop {
    pub(crate) store: Arc<dyn OrderStore>,
    pub(crate) notifier: Arc<dyn CompletionNotifier>,
    pub(crate) max_write_attempts: u32,
}

/// What one attempt of a read-modify-write decided.
pub(crate) enum Write<T> {
    /// Collection was modified in place and must be saved
    Save(T),
    /// Nothing changed; skip the write
    Skip(T),
}

impl Workshop {
    pub(crate) fn new(
        store: Arc<dyn OrderStore>,
        notifier: Arc<dyn CompletionNotifier>,
        max_write_attempts: u32,
    ) -> Self {
        Self {
            store,
            notifier,
            max_write_attempts: max_write_attempts.max(1),
        }
    }

    /// Runs a blocking closure against the store off the async runtime.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&dyn OrderStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| ShopError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }

    /// Loads the current collection.
    pub(crate) async fn load(&self) -> Result<OrderCollection> {
        self.with_store(|store| store.load_orders()).await
    }

    /// Read-modify-write over the whole collection.
    ///
    /// `op` sees a freshly loaded collection on every attempt and must be
    /// safe to run more than once. A stale write is retried up to
    /// `max_write_attempts` times.
    pub(crate) async fn write_with_retry<T, F>(&self, mut op: F) -> Result<T>
    where
        F: FnMut(&mut OrderCollection, Timestamp) -> Result<Write<T>> + Send + 'static,
        T: Send + 'static,
    {
        let attempts = self.max_write_attempts;
        self.with_store(move |store| {
            for attempt in 1..=attempts {
                let mut collection = store.load_orders()?;
                match op(&mut collection, Timestamp::now())? {
                    Write::Skip(value) => return Ok(value),
                    Write::Save(value) => match store.save_orders(&collection) {
                        Ok(revision) => {
                            log::debug!("Saved order collection at revision {revision}");
                            return Ok(value);
                        }
                        Err(e) if e.is_stale() => {
                            log::debug!("Write attempt {attempt}/{attempts} lost a race: {e}");
                        }
                        Err(e) => return Err(e),
                    },
                }
            }

            log::warn!("Order collection stayed busy for {attempts} write attempts");
            Err(ShopError::WriteContention { attempts })
        })
        .await
    }

    /// Applies a single-order transition with re-read before write.
    ///
    /// An unchanged result is returned without writing.
    pub(crate) async fn modify_order<F>(&self, order_id: u64, mut transition: F) -> Result<Order>
    where
        F: FnMut(&Order, Timestamp) -> Result<Order> + Send + 'static,
    {
        self.write_with_retry(move |collection, now| {
            let index = collection
                .position(order_id)
                .ok_or(ShopError::OrderNotFound { id: order_id })?;
            let current = &collection.orders[index];
            let updated = transition(current, now)?;

            if updated == *current {
                return Ok(Write::Skip(updated));
            }
            collection.orders[index] = updated.clone();
            Ok(Write::Save(updated))
        })
        .await
    }
}
