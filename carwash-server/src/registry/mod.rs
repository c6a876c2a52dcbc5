//! Car registry - lifecycle state machine and persistence
//!
//! # Structure
//!
//! - [`manager`] - the locked, insertion-ordered car map and its operations
//! - [`transition`] - the pure status transition table
//! - [`payment`] - payment amount validation
//! - [`storage`] - whole-registry JSON snapshots
//! - [`error`] - domain error type

pub mod error;
pub mod manager;
pub mod payment;
pub mod storage;
pub mod transition;

pub use error::{RegistryError, RegistryResult};
pub use manager::{CarDetails, CarRegistry};
pub use storage::{RegistryStorage, SnapshotFile, StorageError};
