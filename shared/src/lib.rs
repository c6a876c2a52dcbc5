//! Shared types for the carwash tracker
//!
//! Domain and wire types used by the server and its clients: the car
//! lifecycle model, employee roles, and the request/response DTOs of the
//! HTTP API.

pub mod car;
pub mod client;
pub mod employee;

// Re-exports
pub use car::{Car, CarStatus, ClearedStats, ParseStatusError, StatusCounts};
pub use employee::{EmployeeInfo, ParseRoleError, Role};
pub use serde::{Deserialize, Serialize};
