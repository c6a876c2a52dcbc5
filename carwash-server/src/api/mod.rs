//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - session login/logout
//! - [`cars`] - car creation, listing, status, payment
//! - [`summary`] - per-status counts for polling
//! - [`reports`] - daily CSV export
//! - [`registry`] - bulk reset
//! - [`photos`] - stored plate photos

pub mod auth;
pub mod cars;
pub mod health;
pub mod photos;
pub mod registry;
pub mod reports;
pub mod summary;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
