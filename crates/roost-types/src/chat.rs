use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry in the chat log.
///
/// Messages are appended on send and immutable thereafter. There is no
/// delivery state and no transport: the in-memory log is the only source
/// of truth, ordered by append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message ID.
    pub id: Uuid,

    /// Display name of the sender.
    pub sender: String,

    /// Message text.
    pub body: String,

    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message stamped with the current time.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: sender.into(),
            body: body.into(),
            sent_at: Utc::now(),
        }
    }
}
