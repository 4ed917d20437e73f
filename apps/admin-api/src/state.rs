//! # Application State
//!
//! Shared state injected into every handler.
//!
//! ## Thread Safety
//! `Database` wraps a `SqlitePool` and `MediaStore` is a path; both are
//! cheaply cloneable and safe to share across workers, so the whole state is
//! cloned into each actix worker.

use catalog_db::Database;

use crate::config::AppConfig;
use crate::storage::MediaStore;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database handle providing repository access.
    pub db: Database,
    /// Blob-storage collaborator for uploads.
    pub media: MediaStore,
    /// Startup configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Creates the shared state.
    pub fn new(db: Database, media: MediaStore, config: AppConfig) -> Self {
        AppState { db, media, config }
    }
}
