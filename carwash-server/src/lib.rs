//! Carwash Server - three-stage carwash workflow tracker
//!
//! Tracks vehicles through washing → awaiting_payment → finished, with
//! employee attribution, payment amounts, and daily CSV export.
//!
//! # Module structure
//!
//! ```text
//! carwash-server/src/
//! ├── core/          # config, state, server, background tasks
//! ├── auth/          # session store, middleware
//! ├── registry/      # car map, transition table, payment, snapshots
//! ├── report/        # daily report building and CSV rendering
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, time, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod registry;
pub mod report;
pub mod utils;

// Re-export public types
pub use auth::{CurrentEmployee, SessionStore};
pub use core::{Config, Server, ServerState};
pub use registry::{CarDetails, CarRegistry, RegistryError, RegistryStorage};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______                              __
  / ____/___ _______  ______ ______  / /_
 / /   / __ `/ ___/ |/ / __ `/ ___/ / __ \
/ /___/ /_/ / /    |   / /_/ (__  )/ / / /
\____/\__,_/_/    /_/|_\__,_/____//_/ /_/
    "#
    );
}
