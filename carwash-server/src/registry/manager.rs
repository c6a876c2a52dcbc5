//! CarRegistry - the authoritative car collection
//!
//! The single mutable shared resource. An insertion-ordered map behind one
//! exclusive lock gives every operation all-or-nothing semantics and keeps
//! the at-most-one-writer property once handlers run on real threads.
//!
//! # Operation flow
//!
//! ```text
//! create / update_status / pay
//!     ├─ 1. Take the write lock
//!     ├─ 2. Look up the record (NotFound)
//!     ├─ 3. Check the transition table / payment preconditions
//!     ├─ 4. Apply side effects (only after every check passed)
//!     └─ 5. Return a clone of the updated record
//! ```
//!
//! The map itself is never handed out; readers get clones, the snapshot task
//! gets a serialized copy. Cars are never deleted individually — only
//! [`CarRegistry::clear`] empties the registry.

use chrono::Utc;
use chrono_tz::Tz;
use indexmap::IndexMap;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use shared::client::SummaryResponse;
use shared::{Car, CarStatus, ClearedStats, EmployeeInfo, StatusCounts};

use crate::utils::time::local_date;

use super::error::{RegistryError, RegistryResult};
use super::{payment, transition};

/// Input for car creation
#[derive(Debug, Clone)]
pub struct CarDetails {
    pub car_name: String,
    pub plate_number: String,
    /// Filename under the uploads directory, already stored by the caller
    pub plate_photo: Option<String>,
}

/// The in-memory car registry
pub struct CarRegistry {
    cars: RwLock<IndexMap<Uuid, Car>>,
}

impl std::fmt::Debug for CarRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarRegistry")
            .field("cars", &self.cars.read().len())
            .finish()
    }
}

impl Default for CarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CarRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            cars: RwLock::new(IndexMap::new()),
        }
    }

    /// Registry reconstructed from a loaded snapshot
    pub fn from_cars(cars: IndexMap<Uuid, Car>) -> Self {
        Self {
            cars: RwLock::new(cars),
        }
    }

    // ========== Creation ==========

    /// Register a new car in the washing queue
    ///
    /// Only a washer may create cars; the car is attributed to them.
    pub fn create(&self, details: CarDetails, employee: &EmployeeInfo) -> RegistryResult<Car> {
        transition::check_create(employee.role)?;

        let car = Car::new(
            details.car_name,
            details.plate_number,
            details.plate_photo,
            employee.name.clone(),
        );

        let mut cars = self.cars.write();
        cars.insert(car.id, car.clone());

        tracing::info!(
            car_id = %car.id,
            car_name = %car.car_name,
            plate = %car.plate_number,
            washer = %employee.name,
            "Car added to washing queue"
        );
        Ok(car)
    }

    // ========== Reads ==========

    pub fn get(&self, id: Uuid) -> RegistryResult<Car> {
        self.cars
            .read()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    /// All cars, insertion order
    pub fn list_all(&self) -> Vec<Car> {
        self.cars.read().values().cloned().collect()
    }

    /// Cars in one status, insertion order
    pub fn list_by_status(&self, status: CarStatus) -> Vec<Car> {
        self.cars
            .read()
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.read().is_empty()
    }

    /// Per-status counts
    pub fn counts(&self) -> StatusCounts {
        let cars = self.cars.read();
        let mut counts = StatusCounts::default();
        for car in cars.values() {
            counts.bump(car.status);
        }
        counts
    }

    /// Counts plus revenue from cars finished today (business timezone)
    pub fn summary(&self, tz: Tz) -> SummaryResponse {
        let today = Utc::now().with_timezone(&tz).date_naive();
        let cars = self.cars.read();

        let mut counts = StatusCounts::default();
        let mut today_revenue = Decimal::ZERO;
        for car in cars.values() {
            counts.bump(car.status);
            if car.status == CarStatus::Finished
                && let (Some(amount), Some(done)) = (car.payment_amount, car.completion_time)
                && local_date(done, tz) == today
            {
                today_revenue += amount;
            }
        }

        SummaryResponse {
            counts,
            today_revenue,
        }
    }

    /// Cars finished on the given calendar date (business timezone), in
    /// insertion order — the export selection
    pub fn finished_on(&self, date: chrono::NaiveDate, tz: Tz) -> Vec<Car> {
        self.cars
            .read()
            .values()
            .filter(|c| {
                c.status == CarStatus::Finished
                    && c.completion_time
                        .is_some_and(|done| local_date(done, tz) == date)
            })
            .cloned()
            .collect()
    }

    /// Serializable copy of the whole registry, for snapshotting
    pub fn export_cars(&self) -> IndexMap<Uuid, Car> {
        self.cars.read().clone()
    }

    // ========== Mutations ==========

    /// Apply a status move from the transition table
    ///
    /// Re-entering washing reassigns `washer_name` to the requesting washer;
    /// `timestamp` keeps the creation instant.
    pub fn update_status(
        &self,
        id: Uuid,
        target: CarStatus,
        employee: &EmployeeInfo,
    ) -> RegistryResult<Car> {
        let mut cars = self.cars.write();
        let car = cars.get_mut(&id).ok_or(RegistryError::NotFound(id))?;

        transition::check(car.status, target, employee.role)?;

        let previous = car.status;
        if target == CarStatus::Washing {
            car.washer_name = employee.name.clone();
        }
        car.status = target;

        tracing::info!(
            car_id = %car.id,
            from = %previous,
            to = %target,
            employee = %employee.name,
            "Car status updated"
        );
        Ok(car.clone())
    }

    /// Take payment for a car awaiting it
    ///
    /// Checks run in order: car exists, caller is a cashier, car is awaiting
    /// payment, amount is a positive number. Nothing is mutated until all
    /// four pass; the effects then land together under the write lock.
    pub fn pay(&self, id: Uuid, amount: &Value, employee: &EmployeeInfo) -> RegistryResult<Car> {
        let mut cars = self.cars.write();
        let car = cars.get_mut(&id).ok_or(RegistryError::NotFound(id))?;

        if employee.role != shared::Role::Cashier {
            return Err(RegistryError::InvalidTransition(format!(
                "only a cashier can take payment, not a {}",
                employee.role
            )));
        }
        if car.status != CarStatus::AwaitingPayment {
            return Err(RegistryError::InvalidTransition(format!(
                "car {} is {}, not awaiting payment",
                car.id, car.status
            )));
        }
        let amount = payment::parse_amount(amount)?;

        car.payment_amount = Some(amount);
        car.cashier_name = Some(employee.name.clone());
        car.completion_time = Some(Utc::now());
        car.status = CarStatus::Finished;

        tracing::info!(
            car_id = %car.id,
            amount = %amount,
            cashier = %employee.name,
            "Payment processed, car finished"
        );
        Ok(car.clone())
    }

    /// Unconditional bulk reset
    ///
    /// Returns what was removed so the caller can report it back, the way
    /// the reset confirmation does.
    pub fn clear(&self) -> ClearedStats {
        let mut cars = self.cars.write();
        let stats = ClearedStats {
            total: cars.len(),
            finished: cars
                .values()
                .filter(|c| c.status == CarStatus::Finished)
                .count(),
        };
        cars.clear();

        tracing::info!(
            cleared = stats.total,
            finished = stats.finished,
            "Registry reset"
        );
        stats
    }
}
