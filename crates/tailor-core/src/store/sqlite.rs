//! SQLite-backed blob store.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::{decode_collection, encode_collection, OrderCollection, OrderStore, STORE_KEY};
use crate::error::{DatabaseResultExt, Result, ShopError};

const SELECT_BLOB_SQL: &str = "SELECT value, revision FROM kv_store WHERE key = ?1";
const SELECT_REVISION_SQL: &str = "SELECT revision FROM kv_store WHERE key = ?1";
const UPSERT_BLOB_SQL: &str = "INSERT INTO kv_store (key, value, revision, updated_at) VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, revision = excluded.revision, updated_at = excluded.updated_at";

/// How long a writer waits on another station's open transaction.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Order store persisted as one row of a SQLite key-value table.
///
/// A connection is opened per call, so several processes (stations) can
/// share one database file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens the database, creating the schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.connect()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let connection =
            Connection::open(&self.path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        connection
            .execute_batch(include_str!("../../assets/schema.sql"))
            .db_context("Failed to initialize database schema")?;
        Self::apply_migrations(&connection)?;

        Ok(connection)
    }

    /// Adds the revision column to tables written before it existed.
    fn apply_migrations(connection: &Connection) -> Result<()> {
        let has_revision_column: bool = connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('kv_store') WHERE name = 'revision'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect kv_store columns")?;

        if !has_revision_column {
            log::info!("Adding revision column to kv_store");
            connection
                .execute(
                    "ALTER TABLE kv_store ADD COLUMN revision INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add revision column to kv_store")?;
        }

        Ok(())
    }
}

impl OrderStore for SqliteStore {
    fn load_orders(&self) -> Result<OrderCollection> {
        let connection = self.connect()?;
        let row: Option<(String, i64)> = connection
            .query_row(SELECT_BLOB_SQL, params![STORE_KEY], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .db_context("Failed to load orders")?;

        match row {
            None => Ok(OrderCollection::default()),
            Some((value, revision)) => {
                let mut collection = decode_collection(&value, revision as u64)?;
                collection.revision = revision as u64;
                Ok(collection)
            }
        }
    }

    fn save_orders(&self, collection: &OrderCollection) -> Result<u64> {
        let mut connection = self.connect()?;
        let tx = connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let stored: u64 = tx
            .query_row(SELECT_REVISION_SQL, params![STORE_KEY], |row| {
                row.get::<_, i64>(0)
            })
            .optional()
            .db_context("Failed to read stored revision")?
            .map(|revision| revision as u64)
            .unwrap_or(0);

        if stored != collection.revision {
            return Err(ShopError::StaleCollection {
                expected: collection.revision,
                found: stored,
            });
        }

        let revision = stored + 1;
        let blob = encode_collection(&collection.orders, revision)?;
        tx.execute(
            UPSERT_BLOB_SQL,
            params![STORE_KEY, blob, revision as i64, Timestamp::now().to_string()],
        )
        .db_context("Failed to save orders")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(revision)
    }
}
