//! # CSA Session
//!
//! User session store for the CSA club application.
//!
//! The session holds at most one signed-in user. The store is injected at
//! the application root; feature engines such as the registration form never
//! read it directly.
//!
//! ## Example
//!
//! ```
//! use csa_session::{MemorySessionStore, Role, SessionStore, User};
//!
//! let store = MemorySessionStore::default();
//! assert!(store.load().is_none());
//!
//! store.save(&User::new("Marie", "Lefèvre", "marie@example.fr", Role::Member));
//! assert!(store.load().is_some());
//!
//! store.clear();
//! assert!(store.load().is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Identifier of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular club member
    Member,
    /// Club administrator
    Admin,
}

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: UserId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Role
    pub role: Role,
}

impl User {
    /// Create a new user with a fresh id
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            role,
        }
    }

    /// Whether this user has administrator privileges
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Single-slot persistence for the signed-in user
///
/// `load` returns `None` when nobody is signed in. `save` overwrites any
/// previous session; `clear` signs the user out.
pub trait SessionStore: Send + Sync {
    /// The currently signed-in user, if any
    fn load(&self) -> Option<User>;

    /// Persist the signed-in user, replacing any previous session
    fn save(&self, user: &User);

    /// Remove the session
    fn clear(&self);
}

/// In-memory session store
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<RwLock<Option<User>>>,
}

impl MemorySessionStore {
    /// Create an empty session store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<User> {
        // Lock poisoning only happens if a writer panicked; treat the
        // session as absent rather than propagating the panic.
        self.slot.read().map_or(None, |slot| slot.clone())
    }

    fn save(&self, user: &User) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(user.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }
}
