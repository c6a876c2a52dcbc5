//! Session store - opaque token to self-declared identity
//!
//! There are no credentials in this system: an employee states a name and a
//! role and receives a random token. Sessions live only in memory, expire
//! after an idle TTL, and do not survive a restart.
//!
//! Each session is an independent entry, so a [`DashMap`] with per-entry
//! locking is enough; the registry's single exclusive lock is not needed
//! here.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use shared::{EmployeeInfo, Role};

/// A logged-in employee, as handlers receive it from the extractor
#[derive(Debug, Clone)]
pub struct CurrentEmployee {
    pub token: Uuid,
    pub name: String,
    pub role: Role,
}

impl CurrentEmployee {
    pub fn info(&self) -> EmployeeInfo {
        EmployeeInfo::new(self.name.clone(), self.role)
    }
}

/// One live session
#[derive(Debug, Clone)]
struct Session {
    employee: EmployeeInfo,
    login_time: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

/// In-memory session store with idle expiry
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Create a session and return its token
    pub fn login(&self, employee: EmployeeInfo) -> Uuid {
        let token = Uuid::new_v4();
        let now = Utc::now();
        self.sessions.insert(
            token,
            Session {
                employee: employee.clone(),
                login_time: now,
                last_seen: now,
            },
        );
        tracing::info!(
            name = %employee.name,
            role = %employee.role,
            "Employee logged in"
        );
        token
    }

    /// Resolve a token to its employee, refreshing the idle clock
    ///
    /// Expired sessions are removed on access; `None` covers both unknown
    /// and expired tokens.
    pub fn resolve(&self, token: Uuid) -> Option<CurrentEmployee> {
        let now = Utc::now();
        let mut entry = self.sessions.get_mut(&token)?;
        if now - entry.last_seen > self.ttl {
            drop(entry);
            self.sessions.remove(&token);
            return None;
        }
        entry.last_seen = now;
        Some(CurrentEmployee {
            token,
            name: entry.employee.name.clone(),
            role: entry.employee.role,
        })
    }

    /// Destroy a session; true if it existed
    pub fn logout(&self, token: Uuid) -> bool {
        match self.sessions.remove(&token) {
            Some((_, session)) => {
                tracing::info!(
                    name = %session.employee.name,
                    session_age_secs = (Utc::now() - session.login_time).num_seconds(),
                    "Employee logged out"
                );
                true
            }
            None => false,
        }
    }

    /// Drop every session idle past the TTL; returns how many were removed
    pub fn sweep_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| now - s.last_seen <= self.ttl);
        let removed = before - self.sessions.len();
        if removed > 0 {
            tracing::debug!(removed, "Expired sessions swept");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
