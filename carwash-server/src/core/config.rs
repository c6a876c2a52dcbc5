//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | ./carwash-data | working directory (snapshot, uploads, logs) |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | TIMEZONE | Asia/Manila | business timezone for reports and daily totals |
//! | SNAPSHOT_INTERVAL_SECS | 30 | registry snapshot period; 0 disables persistence |
//! | SESSION_TTL_SECS | 43200 | idle session expiry (12 hours) |
//!
//! # Example
//!
//! ```ignore
//! WORK_DIR=/data/carwash HTTP_PORT=8080 cargo run
//! ```

use std::path::PathBuf;

use chrono_tz::Tz;

/// Default business timezone when `TIMEZONE` is unset or unparseable
const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Manila;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for snapshot, uploads, and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Business timezone (report dates, today's revenue)
    pub timezone: Tz,
    /// Seconds between registry snapshots; 0 runs memory-only
    pub snapshot_interval_secs: u64,
    /// Idle seconds before a session expires
    pub session_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./carwash-data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| {
                    tz.parse()
                        .map_err(|_| {
                            tracing::warn!(timezone = %tz, "Unknown TIMEZONE, using default");
                        })
                        .ok()
                })
                .unwrap_or(DEFAULT_TIMEZONE),
            snapshot_interval_secs: std::env::var("SNAPSHOT_INTERVAL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(12 * 60 * 60),
        }
    }

    /// Override the pieces tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    // ========== Derived paths ==========

    pub fn work_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
    }

    /// Registry snapshot file
    pub fn snapshot_path(&self) -> PathBuf {
        self.work_dir_path().join("carwash_data.json")
    }

    /// Plate photo storage
    pub fn uploads_dir(&self) -> PathBuf {
        self.work_dir_path().join("uploads")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.work_dir_path().join("logs")
    }

    /// Create the working directory tree
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.work_dir_path())?;
        std::fs::create_dir_all(self.uploads_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    /// Whether periodic snapshotting is enabled
    pub fn persistence_enabled(&self) -> bool {
        self.snapshot_interval_secs > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
