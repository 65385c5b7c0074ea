//! Core types: chat and incoming message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Chat (private or group) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// A single incoming text message. Created by the transport adapter,
/// consumed once by the relay, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Transport-specific message id (Telegram numeric id as string).
    pub id: String,
    pub chat: Chat,
    /// Sender id; 0 when the transport did not attach a sender.
    pub user_id: i64,
    /// Raw text body.
    pub text: String,
    pub created_at: DateTime<Utc>,
}
