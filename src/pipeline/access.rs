//! The admin gate — a static shared secret, compared on the client.
//!
//! This is deliberately not a real access-control mechanism; it gates the
//! dashboard UI and nothing else. No lockout, no rate limiting, no session
//! machinery. Every attempt lands in the audit log.

use crate::notify::Severity;
use crate::persist::CollectionStore;
use crate::store::{Store, StoreError};

/// Shared-secret gate for the admin dashboard.
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        AdminGate {
            secret: secret.into(),
        }
    }

    /// Compare the entered key against the secret.
    ///
    /// Success logs and welcomes; failure logs, queues an error
    /// notification, and reports `false` so the caller clears the input.
    pub fn unlock<S: CollectionStore>(
        &self,
        store: &Store<S>,
        key: &str,
    ) -> Result<bool, StoreError> {
        if key == self.secret {
            store.add_log("Admin session opened")?;
            store.notify("Welcome back. The command deck is ready.", Severity::Success);
            Ok(true)
        } else {
            store.add_log("Failed admin login attempt")?;
            store.notify("Invalid security key", Severity::Error);
            Ok(false)
        }
    }

    /// Close the session (logout is just a log entry).
    pub fn lock<S: CollectionStore>(&self, store: &Store<S>) -> Result<(), StoreError> {
        store.add_log("Admin session closed")
    }
}
