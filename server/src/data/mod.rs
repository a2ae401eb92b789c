//! Data storage layer
//!
//! - `sqlite` - Durable player store (default)
//! - `memory` - Volatile player store for development and tests
//! - `filters` - Search criteria, ordering and paging
//! - `types` - Player record and enums shared by all backends
//! - `traits` - Repository trait implemented by each backend
//! - `error` - Unified error type for all backends

pub mod error;
pub mod filters;
pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::DataError;
pub use memory::MemoryStore;
pub use sqlite::SqliteService;
pub use traits::PlayerRepository;

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::config::StoreBackend;
use crate::core::storage::AppStorage;

/// Player store service enum
///
/// Wraps the backend-specific service and hands out a backend-agnostic
/// repository. Services are stored as Arc so repositories can share them.
pub enum PlayerStore {
    /// SQLite backend (default, embedded)
    Sqlite(Arc<SqliteService>),
    /// In-memory backend
    Memory(Arc<MemoryStore>),
}

impl PlayerStore {
    /// Initialize the store for the configured backend
    pub async fn init(backend: StoreBackend, storage: &AppStorage) -> Result<Self, DataError> {
        match backend {
            StoreBackend::Sqlite => {
                let service = SqliteService::init(storage).await?;
                Ok(Self::Sqlite(Arc::new(service)))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory player store; data is lost on exit");
                Ok(Self::Memory(Arc::new(MemoryStore::new())))
            }
        }
    }

    /// In-memory store (used by tests and the `memory` backend)
    pub fn memory() -> Self {
        Self::Memory(Arc::new(MemoryStore::new()))
    }

    /// Run a WAL checkpoint (SQLite only)
    pub async fn checkpoint(&self) -> Result<(), DataError> {
        match self {
            Self::Sqlite(s) => s.checkpoint().await.map_err(Into::into),
            Self::Memory(_) => Ok(()),
        }
    }

    /// Close the store gracefully
    pub async fn close(&self) {
        match self {
            Self::Sqlite(s) => s.close().await,
            Self::Memory(_) => {}
        }
    }

    /// Start the background checkpoint task (SQLite only)
    pub fn start_checkpoint_task(
        &self,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Option<JoinHandle<()>> {
        match self {
            Self::Sqlite(s) => Some(s.start_checkpoint_task(shutdown_rx)),
            Self::Memory(_) => None,
        }
    }

    /// Get the backend type
    pub fn backend(&self) -> StoreBackend {
        match self {
            Self::Sqlite(_) => StoreBackend::Sqlite,
            Self::Memory(_) => StoreBackend::Memory,
        }
    }

    /// Get the repository trait object for player operations
    pub fn repository(&self) -> Box<dyn PlayerRepository + Send + Sync> {
        match self {
            Self::Sqlite(s) => Box::new(Arc::clone(s)),
            Self::Memory(m) => Box::new(Arc::clone(m)),
        }
    }
}
