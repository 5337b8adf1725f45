//! Toast notifications with timed expiry.
//!
//! Notifications stack — two entries with the same message are independent
//! and expire independently. Each entry carries its own deadline; a sweep
//! drops everything past due. Removing an id that already expired is a
//! no-op.

use std::fmt;
use std::time::{Duration, Instant};

/// How long a notification stays up unless dismissed earlier.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Severity tag for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        };
        f.write_str(label)
    }
}

/// A single toast message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    deadline: Instant,
}

impl Notification {
    /// True once the notification is past its deadline.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// The in-memory queue of active notifications.
#[derive(Debug)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        NotificationQueue::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl NotificationQueue {
    /// Create a queue with the given time-to-live per entry.
    pub fn new(ttl: Duration) -> Self {
        NotificationQueue {
            entries: Vec::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Queue a notification, returning its id. No de-duplication.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.entries.push(Notification {
            id: id.clone(),
            message: message.into(),
            severity,
            deadline: now + self.ttl,
        });
        id
    }

    /// Dismiss by id. Safe to call after expiry already removed the entry.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Drop expired entries, returning how many were removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| !n.is_expired(now));
        before - self.entries.len()
    }

    /// The currently queued notifications, oldest first.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}
