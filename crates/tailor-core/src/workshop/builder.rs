//! Builder for creating and configuring Workshop instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::{Workshop, DEFAULT_MAX_WRITE_ATTEMPTS};
use crate::{
    error::{Result, ShopError},
    notify::{CompletionNotifier, LogNotifier},
    store::{OrderStore, SqliteStore},
};

/// Builder for creating and configuring Workshop instances.
#[derive(Clone)]
pub struct WorkshopBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn OrderStore>>,
    notifier: Option<Arc<dyn CompletionNotifier>>,
    max_write_attempts: u32,
}

impl WorkshopBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            store: None,
            notifier: None,
            max_write_attempts: DEFAULT_MAX_WRITE_ATTEMPTS,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tailor/tailor.db` or `~/.local/share/tailor/tailor.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already constructed store instead of the SQLite database.
    pub fn with_store(mut self, store: Arc<dyn OrderStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replaces the default [`LogNotifier`].
    pub fn with_notifier(mut self, notifier: Arc<dyn CompletionNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Write attempts before giving up on a busy collection. Values below 1
    /// are treated as 1.
    pub fn with_max_write_attempts(mut self, attempts: u32) -> Self {
        self.max_write_attempts = attempts;
        self
    }

    /// Builds the configured workshop instance.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::XdgDirectory` if no default path can be resolved
    /// Returns `ShopError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `ShopError::Storage` if database initialization fails
    pub async fn build(self) -> Result<Workshop> {
        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(LogNotifier) as Arc<dyn CompletionNotifier>);

        let store = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                Self::open_database(db_path).await?
            }
        };

        Ok(Workshop::new(store, notifier, self.max_write_attempts))
    }

    async fn open_database(db_path: PathBuf) -> Result<Arc<dyn OrderStore>> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ShopError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        log::debug!("Opening order database at {}", db_path.display());
        let store = task::spawn_blocking(move || SqliteStore::open(&db_path))
            .await
            .map_err(|e| ShopError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Arc::new(store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tailor")
            .place_data_file("tailor.db")
            .map_err(|e| ShopError::XdgDirectory(e.to_string()))
    }
}

impl Default for WorkshopBuilder {
    fn default() -> Self {
        Self::new()
    }
}
