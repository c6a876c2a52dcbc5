//! Car lifecycle model
//!
//! A car moves through exactly three stages:
//!
//! ```text
//! washing ──► awaiting_payment ──► finished
//!    ▲               │
//!    └───────────────┘  (re-wash)
//! ```
//!
//! `finished` is terminal. Which employee role may request which move is
//! decided by the server's transition logic; the types here only describe
//! the data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Status
// ============================================================================

/// Car status (closed set, serialized as the original file format's strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarStatus {
    /// Being washed (initial state)
    Washing,
    /// Wash done, waiting at the register
    AwaitingPayment,
    /// Paid and closed (terminal)
    Finished,
}

impl CarStatus {
    /// All statuses, in workflow order
    pub const ALL: [CarStatus; 3] = [
        CarStatus::Washing,
        CarStatus::AwaitingPayment,
        CarStatus::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Washing => "washing",
            CarStatus::AwaitingPayment => "awaiting_payment",
            CarStatus::Finished => "finished",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CarStatus::Finished)
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized status strings
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown car status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for CarStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "washing" => Ok(CarStatus::Washing),
            "awaiting_payment" => Ok(CarStatus::AwaitingPayment),
            "finished" => Ok(CarStatus::Finished),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

// ============================================================================
// Car record
// ============================================================================

/// One tracked vehicle
///
/// Field invariants, maintained by the server (see registry logic):
/// - `washing` ⇒ no payment, no completion time
/// - `awaiting_payment` ⇒ no payment, no cashier
/// - `finished` ⇒ positive payment, cashier set, `completion_time ≥ timestamp`
///
/// `payment_amount` is a [`Decimal`] and serializes as a string, so snapshot
/// round-trips keep the exact cent value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Immutable identity, unique for the registry's lifetime
    pub id: Uuid,
    pub car_name: String,
    pub plate_number: String,
    /// Photo filename under the uploads directory; bytes are never embedded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_photo: Option<String>,
    pub status: CarStatus,
    /// Set at creation, reassigned when the car re-enters washing
    pub washer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<Decimal>,
    /// Creation instant (RFC 3339 in JSON — sortable text form)
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
}

impl Car {
    /// New car entering the wash, attributed to the creating washer
    pub fn new(
        car_name: impl Into<String>,
        plate_number: impl Into<String>,
        plate_photo: Option<String>,
        washer_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            car_name: car_name.into(),
            plate_number: plate_number.into(),
            plate_photo,
            status: CarStatus::Washing,
            washer_name: washer_name.into(),
            cashier_name: None,
            payment_amount: None,
            timestamp: Utc::now(),
            completion_time: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == CarStatus::Finished
    }
}

// ============================================================================
// Aggregates
// ============================================================================

/// Per-status car counts, for the lightweight summary endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub washing: usize,
    pub awaiting_payment: usize,
    pub finished: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn bump(&mut self, status: CarStatus) {
        match status {
            CarStatus::Washing => self.washing += 1,
            CarStatus::AwaitingPayment => self.awaiting_payment += 1,
            CarStatus::Finished => self.finished += 1,
        }
        self.total += 1;
    }
}

/// What a bulk reset removed (shown back to the operator, desktop-style)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearedStats {
    pub total: usize,
    pub finished: usize,
}
