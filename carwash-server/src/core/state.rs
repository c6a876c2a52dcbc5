//! Server state - shared handles for every handler and task
//!
//! # Components
//!
//! | Field | Type | Purpose |
//! |-------|------|---------|
//! | config | Config | configuration (immutable) |
//! | registry | Arc<CarRegistry> | the car map, sole mutable shared resource |
//! | sessions | Arc<SessionStore> | token to employee identity |
//! | storage | Arc<RegistryStorage> | snapshot reader/writer (None when disabled) |
//!
//! Cloning is cheap: everything behind the state is an `Arc`.

use std::sync::Arc;

use chrono::Duration;

use crate::auth::SessionStore;
use crate::core::Config;
use crate::registry::{CarRegistry, RegistryStorage};

/// Shared server state
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub registry: Arc<CarRegistry>,
    pub sessions: Arc<SessionStore>,
    /// Snapshot storage; `None` in memory-only mode
    pub storage: Option<Arc<RegistryStorage>>,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// Creates the working directory tree, then loads the registry from the
    /// snapshot if persistence is enabled. A snapshot that exists but does
    /// not parse aborts startup: silently starting empty would look exactly
    /// like a bulk reset, and the next interval write would overwrite the
    /// evidence.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        config.ensure_work_dir_structure()?;

        let (registry, storage) = if config.persistence_enabled() {
            let storage = RegistryStorage::new(config.snapshot_path());
            let registry = match storage.load()? {
                Some(cars) => CarRegistry::from_cars(cars),
                None => {
                    tracing::info!(
                        path = %storage.path().display(),
                        "No snapshot found, starting with an empty registry"
                    );
                    CarRegistry::new()
                }
            };
            (registry, Some(Arc::new(storage)))
        } else {
            tracing::info!("Persistence disabled (SNAPSHOT_INTERVAL_SECS=0), memory-only mode");
            (CarRegistry::new(), None)
        };

        // A TTL beyond chrono's range just means "never expires"
        let ttl = i64::try_from(config.session_ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        let sessions = SessionStore::new(ttl);

        Ok(Self {
            config: config.clone(),
            registry: Arc::new(registry),
            sessions: Arc::new(sessions),
            storage,
        })
    }

    /// Write a snapshot now, if persistence is enabled
    pub fn flush_snapshot(&self) -> Result<(), crate::registry::StorageError> {
        if let Some(storage) = &self.storage {
            storage.save(&self.registry.export_cars())?;
        }
        Ok(())
    }
}
