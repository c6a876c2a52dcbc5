//! Session-based pseudo-authentication
//!
//! Name + role self-assertion mapped to opaque tokens:
//! - [`SessionStore`] - token to identity, with idle expiry
//! - [`CurrentEmployee`] - per-request identity context
//! - [`require_auth`] - bearer-token middleware

pub mod extractor;
pub mod middleware;
pub mod session;

pub use middleware::require_auth;
pub use session::{CurrentEmployee, SessionStore};
