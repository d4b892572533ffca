#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use tailor_core::{
    models::{Department, Order, Worker},
    notify::{CompletionNotifier, NotifyError},
    params::{CreateOrder, ItemInput},
    store::{MemoryStore, OrderCollection, OrderStore},
    Result, ShopError, Workshop, WorkshopBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test workshop backed by a temporary database
pub async fn create_test_workshop() -> (TempDir, Workshop) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let workshop = WorkshopBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create workshop");
    (temp_dir, workshop)
}

/// Workshop over an in-memory store the test can inspect.
pub async fn create_memory_workshop(
    notifier: Arc<dyn CompletionNotifier>,
) -> (Arc<MemoryStore>, Workshop) {
    let store = Arc::new(MemoryStore::new());
    let workshop = WorkshopBuilder::new()
        .with_store(store.clone())
        .with_notifier(notifier)
        .build()
        .await
        .expect("Failed to create workshop");
    (store, workshop)
}

pub fn order_params(customer: &str, mobile: &str, garments: &[&str]) -> CreateOrder {
    CreateOrder {
        customer_name: customer.to_string(),
        mobile: mobile.to_string(),
        items: garments
            .iter()
            .map(|garment| ItemInput {
                cloth_type: garment.to_string(),
                qty: 1,
                rate: Decimal::from(500),
                description: None,
                measurements: Default::default(),
            })
            .collect(),
        ..Default::default()
    }
}

pub fn worker(id: &str, station: Department) -> Worker {
    Worker::new(id, format!("Worker {id}"), station)
}

/// Creates and dispatches an order, returning it in its first stage.
pub async fn dispatched_order(workshop: &Workshop, garments: &[&str]) -> Order {
    let order = workshop
        .create_order(&order_params("Meena", "9876543210", garments))
        .await
        .expect("Failed to create order");
    workshop
        .dispatch_order(order.id)
        .await
        .expect("Failed to dispatch order")
}

/// Notifier that records every order it was asked about.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notified: Mutex<Vec<u64>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            notified: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn notified(&self) -> Vec<u64> {
        self.notified.lock().unwrap().clone()
    }
}

impl CompletionNotifier for RecordingNotifier {
    fn notify_customer(&self, order: &Order) -> std::result::Result<(), NotifyError> {
        self.notified.lock().unwrap().push(order.id);
        if self.fail {
            Err(NotifyError::Delivery("SMS gateway unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

type Rival = Box<dyn FnOnce(&dyn OrderStore) + Send>;

/// Store wrapper that lets another writer in just before the next save,
/// the way a second station would between our read and our write.
pub struct RacingStore {
    pub inner: Arc<dyn OrderStore>,
    rival: Mutex<Option<Rival>>,
}

impl RacingStore {
    pub fn new(inner: Arc<dyn OrderStore>) -> Self {
        Self {
            inner,
            rival: Mutex::new(None),
        }
    }

    /// Arms a rival write that runs once, before the next save.
    pub fn before_next_save(&self, rival: impl FnOnce(&dyn OrderStore) + Send + 'static) {
        *self.rival.lock().unwrap() = Some(Box::new(rival));
    }
}

impl OrderStore for RacingStore {
    fn load_orders(&self) -> Result<OrderCollection> {
        self.inner.load_orders()
    }

    fn save_orders(&self, collection: &OrderCollection) -> Result<u64> {
        let rival = self.rival.lock().unwrap().take();
        if let Some(rival) = rival {
            rival(self.inner.as_ref());
        }
        self.inner.save_orders(collection)
    }
}

/// Store whose writes always lose the race.
pub struct AlwaysStaleStore {
    pub inner: MemoryStore,
}

impl OrderStore for AlwaysStaleStore {
    fn load_orders(&self) -> Result<OrderCollection> {
        self.inner.load_orders()
    }

    fn save_orders(&self, collection: &OrderCollection) -> Result<u64> {
        Err(ShopError::StaleCollection {
            expected: collection.revision,
            found: collection.revision + 1,
        })
    }
}
