//! Application state for the Faculty Payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::service::WorkloadService;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Wraps the workload service over the in-memory store. Cloning is cheap;
/// every clone shares the same store.
#[derive(Clone)]
pub struct AppState {
    service: Arc<WorkloadService<InMemoryStore>>,
}

impl AppState {
    /// Creates state over an empty store using the given configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(InMemoryStore::new(), &config)
    }

    /// Creates state over an existing store.
    pub fn with_store(store: InMemoryStore, config: &ConfigLoader) -> Self {
        Self {
            service: Arc::new(WorkloadService::from_config(store, config)),
        }
    }

    /// Returns the workload service.
    pub fn service(&self) -> &WorkloadService<InMemoryStore> {
        &self.service
    }
}
