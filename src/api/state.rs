//! Application state - Dependency injection container.
//!
//! Holds the directory service and the database handle acquired at startup.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{DirectoryService, UserDirectory};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Directory service
    pub directory: Arc<dyn DirectoryService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed directory service onto an open database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        let directory = Arc::new(UserDirectory::new(repo));

        Self {
            directory,
            database,
        }
    }

    /// Create new application state with a manually injected service.
    pub fn new(directory: Arc<dyn DirectoryService>, database: Arc<Database>) -> Self {
        Self {
            directory,
            database,
        }
    }
}
