//! Core library for the tailor shop order tracker.
//!
//! An order is billed at the front desk, then moves through the workshop
//! departments (cutting, blouse or dress stitching, finishing, ironing)
//! until it is completed and the customer is told to pick it up. This crate
//! holds the whole of that lifecycle:
//!
//! - [`models`]: orders, items, money, customers, workers
//! - [`workflow`]: pure routing and transition rules
//! - [`queue`]: the per-department work queue read model
//! - [`store`]: the shared order collection and its storage backends
//! - [`workshop`]: the coordinator that applies transitions to the store
//! - [`billing`]: the editable bill draft used at intake
//! - [`notify`]: customer notification on completion
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rust_decimal::Decimal;
//! use tailor_core::{
//!     billing::BillDraft,
//!     models::{Department, Worker},
//!     queue::QueueQuery,
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
//! let mut draft = BillDraft::new("Meena", "9876543210");
//! let blouse = draft.add_item("Blouse", 1, Decimal::from(450));
//! draft.set_measurement(blouse, "Length", "38")?;
//! draft.set_advance(Decimal::from(200));
//!
//! let order = workshop.create_order(&draft.into_params()?).await?;
//! workshop.dispatch_order(order.id).await?;
//!
//! let queue = workshop.list_queue(&QueueQuery::new(Department::Cutting)).await?;
//! assert_eq!(queue.len(), 1);
//!
//! let cutter = Worker::new("w1", "Ravi", Department::Cutting);
//! workshop.claim_order(order.id, &cutter).await?;
//! workshop.complete_order(order.id, &cutter).await?;
//!
//! let stitching = QueueQuery::new(Department::BlouseStitching);
//! assert_eq!(workshop.list_queue(&stitching).await?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod billing;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod params;
pub mod queue;
pub mod store;
pub mod workflow;
pub mod workshop;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use billing::BillDraft;
pub use error::{Result, ShopError};
pub use models::{
    Customer, Department, GarmentType, Item, Order, OrderFilter, OrderStatus, Worker,
};
pub use notify::{CompletionNotifier, LogNotifier, NotifyError};
pub use queue::{QueueQuery, SortDirection, SortKey};
pub use store::{MemoryStore, OrderCollection, OrderStore, SqliteStore};
pub use workshop::{
    CompletionOutcome, NotificationOutcome, QueueSnapshot, QueueWatch, Workshop, WorkshopBuilder,
};
