//! Audit log entries and the advisor chat transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One admin action, append-only, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// Create an entry stamped with the current time.
    pub fn now(action: impl Into<String>) -> Self {
        AuditEntry {
            id: uuid::Uuid::new_v4().to_string(),
            action: action.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Who said a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in the advisor conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped with the current time.
    pub fn now(role: ChatRole, content: impl Into<String>) -> Self {
        ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
