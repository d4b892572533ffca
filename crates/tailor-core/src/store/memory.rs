//! In-process order store.

use std::sync::Mutex;

use super::{OrderCollection, OrderStore};
use crate::error::{Result, ShopError};

/// Keeps the collection in memory with the same revision rules as the
/// database store. Useful for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<OrderCollection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing collection at revision 1.
    pub fn with_orders(orders: Vec<crate::models::Order>) -> Self {
        Self {
            state: Mutex::new(OrderCollection {
                revision: 1,
                orders,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, OrderCollection>> {
        self.state.lock().map_err(|_| ShopError::Configuration {
            message: "Order store lock poisoned".to_string(),
        })
    }
}

impl OrderStore for MemoryStore {
    fn load_orders(&self) -> Result<OrderCollection> {
        Ok(self.lock()?.clone())
    }

    fn save_orders(&self, collection: &OrderCollection) -> Result<u64> {
        let mut state = self.lock()?;
        if state.revision != collection.revision {
            return Err(ShopError::StaleCollection {
                expected: collection.revision,
                found: state.revision,
            });
        }

        state.revision += 1;
        state.orders = collection.orders.clone();
        Ok(state.revision)
    }
}
