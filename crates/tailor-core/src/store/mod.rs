//! Storage collaborator for the shared order collection.
//!
//! The shop keeps every order in one blob under a fixed key. A store only
//! knows how to load the whole collection and replace it; there is no
//! row-level update. Each stored blob carries a revision so a writer that
//! read an older copy is refused instead of silently overwriting someone
//! else's change.
//!
//! ```text
//! ┌──────────────┐  load_orders   ┌──────────────┐
//! │   Workshop   │ ─────────────▶ │  OrderStore  │  { schema_version,
//! │ (coordinator)│ ◀───────────── │ sqlite/memory│    revision, orders }
//! └──────────────┘  save_orders   └──────────────┘
//!                   (revision CAS)
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ShopError},
    models::Order,
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key the collection is stored under.
pub const STORE_KEY: &str = "tailorOrders";

/// Envelope version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// The whole order collection as read from a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCollection {
    /// Revision the collection was read at, 0 when nothing is stored yet
    pub revision: u64,
    pub orders: Vec<Order>,
}

impl OrderCollection {
    /// Index of the order with the given ID.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.orders.iter().position(|order| order.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// ID for the next new order. IDs are never reused.
    pub fn next_id(&self) -> u64 {
        self.orders.iter().map(|order| order.id).max().unwrap_or(0) + 1
    }

    /// Bill number for the order receiving `id`.
    pub fn bill_no_for(id: u64) -> String {
        format!("ST{id:06}")
    }
}

/// Read all orders / write all orders.
///
/// Implementations are blocking; async callers go through
/// `tokio::task::spawn_blocking`.
pub trait OrderStore: Send + Sync {
    /// Loads the stored collection, empty at revision 0 if nothing is stored.
    fn load_orders(&self) -> Result<OrderCollection>;

    /// Replaces the stored collection and returns the new revision.
    ///
    /// Fails with [`ShopError::StaleCollection`] when the stored revision is
    /// no longer `collection.revision`.
    fn save_orders(&self, collection: &OrderCollection) -> Result<u64>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    schema_version: u32,
    revision: u64,
    orders: &'a [Order],
}

#[derive(Deserialize)]
struct Envelope {
    schema_version: u32,
    revision: u64,
    orders: Vec<Order>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBlob {
    Versioned(Envelope),
    /// Bare array written before the envelope existed
    Legacy(Vec<Order>),
}

/// Serializes a collection at `revision` into the stored blob format.
pub fn encode_collection(orders: &[Order], revision: u64) -> Result<String> {
    let envelope = EnvelopeRef {
        schema_version: SCHEMA_VERSION,
        revision,
        orders,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parses a stored blob.
///
/// `fallback_revision` is used for legacy bare-array blobs, which carry no
/// revision of their own.
pub fn decode_collection(blob: &str, fallback_revision: u64) -> Result<OrderCollection> {
    match serde_json::from_str::<StoredBlob>(blob)? {
        StoredBlob::Versioned(envelope) if envelope.schema_version > SCHEMA_VERSION => {
            Err(ShopError::Configuration {
                message: format!(
                    "Stored orders use schema version {}, this build reads up to {}",
                    envelope.schema_version, SCHEMA_VERSION
                ),
            })
        }
        StoredBlob::Versioned(envelope) => Ok(OrderCollection {
            revision: envelope.revision,
            orders: envelope.orders,
        }),
        StoredBlob::Legacy(orders) => {
            log::debug!("Loaded legacy order array with {} orders", orders.len());
            Ok(OrderCollection {
                revision: fallback_revision,
                orders,
            })
        }
    }
}
