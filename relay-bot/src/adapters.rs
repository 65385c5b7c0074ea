//! Adapters from Telegram (teloxide) types to relay_core types.

use relay_core::{Chat, IncomingMessage};

/// Wraps a teloxide Message for conversion to core [`IncomingMessage`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl TelegramMessageWrapper<'_> {
    pub fn to_core(&self) -> IncomingMessage {
        IncomingMessage {
            id: self.0.id.to_string(),
            chat: Chat {
                id: self.0.chat.id.0,
            },
            user_id: self
                .0
                .from
                .as_ref()
                .map(|u| u.id.0 as i64)
                .unwrap_or(0),
            text: self.0.text().unwrap_or("").to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}
