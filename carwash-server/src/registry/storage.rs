//! JSON snapshot persistence for the car registry
//!
//! One document with a top-level `cars` mapping keyed by car id; instants as
//! RFC 3339 text, amounts as decimal strings. The whole file is rewritten on
//! every save — there is no log, and a crash between snapshots loses the
//! mutations since the last one. That loss window is the accepted contract;
//! what the write path does guarantee is that the previous snapshot survives
//! a crash mid-write (temp file + atomic rename).
//!
//! A missing file on startup means an empty registry; a file that exists but
//! fails to parse is an error the caller must not swallow — starting empty
//! over a corrupt snapshot would be indistinguishable from a bulk reset.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use shared::Car;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// On-disk snapshot layout
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub cars: IndexMap<Uuid, Car>,
}

/// Whole-registry snapshot reader/writer
#[derive(Debug, Clone)]
pub struct RegistryStorage {
    path: PathBuf,
}

impl RegistryStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot if one exists
    ///
    /// `Ok(None)` when the file is missing (fresh start); an error when the
    /// file exists but cannot be read or parsed.
    pub fn load(&self) -> StorageResult<Option<IndexMap<Uuid, Car>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        let snapshot: SnapshotFile = serde_json::from_slice(&bytes)?;
        tracing::info!(
            path = %self.path.display(),
            cars = snapshot.cars.len(),
            "Registry snapshot loaded"
        );
        Ok(Some(snapshot.cars))
    }

    /// Write a snapshot, superseding the previous one
    ///
    /// Serializes to a sibling temp file first and renames it into place, so
    /// an interrupted write never truncates the prior snapshot.
    pub fn save(&self, cars: &IndexMap<Uuid, Car>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let snapshot = SnapshotFile { cars: cars.clone() };
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            cars = snapshot.cars.len(),
            "Registry snapshot written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use shared::CarStatus;

    fn finished_car() -> Car {
        let mut car = Car::new("Toyota Vios", "ABC-1234", Some("plate.jpg".into()), "Ana");
        car.timestamp = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        car.status = CarStatus::Finished;
        car.cashier_name = Some("Ben".to_string());
        car.payment_amount = Some(Decimal::new(15000, 2));
        car.completion_time = Some(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
        car
    }

    #[test]
    fn missing_file_means_fresh_start() {
        let dir = tempfile::tempdir().unwrap();
        let storage = RegistryStorage::new(dir.path().join("carwash_data.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn round_trip_reproduces_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let storage = RegistryStorage::new(dir.path().join("carwash_data.json"));

        let mut cars = IndexMap::new();
        let done = finished_car();
        let washing = Car::new("Civic", "XYZ-9", None, "Carlos");
        cars.insert(done.id, done.clone());
        cars.insert(washing.id, washing.clone());

        storage.save(&cars).unwrap();
        let loaded = storage.load().unwrap().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[&done.id], done);
        assert_eq!(loaded[&washing.id], washing);
        // Cent-exact amount, instants reconstructed from text
        assert_eq!(loaded[&done.id].payment_amount, Some(Decimal::new(15000, 2)));
        assert_eq!(loaded[&done.id].completion_time, done.completion_time);
    }

    #[test]
    fn save_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = RegistryStorage::new(dir.path().join("carwash_data.json"));

        let mut cars = IndexMap::new();
        let ids: Vec<Uuid> = (0..5)
            .map(|i| {
                let car = Car::new(format!("Car {i}"), format!("P-{i}"), None, "Ana");
                let id = car.id;
                cars.insert(id, car);
                id
            })
            .collect();

        storage.save(&cars).unwrap();
        let loaded = storage.load().unwrap().unwrap();
        let loaded_ids: Vec<Uuid> = loaded.keys().copied().collect();
        assert_eq!(loaded_ids, ids);
    }

    #[test]
    fn corrupt_file_is_an_error_not_an_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carwash_data.json");
        fs::write(&path, b"{not json").unwrap();

        let storage = RegistryStorage::new(&path);
        assert!(matches!(
            storage.load(),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn save_supersedes_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = RegistryStorage::new(dir.path().join("carwash_data.json"));

        let mut cars = IndexMap::new();
        let car = finished_car();
        cars.insert(car.id, car);
        storage.save(&cars).unwrap();

        storage.save(&IndexMap::new()).unwrap();
        assert!(storage.load().unwrap().unwrap().is_empty());
        // No temp file left behind
        assert!(!dir.path().join("carwash_data.json.tmp").exists());
    }
}
