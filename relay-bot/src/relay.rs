//! The message relay: placeholder, one completion request, reply or fallback.
//!
//! **External interactions:** [`Bot`] (send/delete on Telegram) and
//! [`CompletionClient`] (one OpenRouter request per message). No history is
//! carried between messages; each one is answered in isolation.

use openrouter_client::{ChatMessage, CompletionClient};
use relay_core::{Bot, Chat, IncomingMessage, Result};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Fixed welcome text for the /start command.
pub const WELCOME_TEXT: &str = "🎉 **Welcome!**\n\n\
🤖 *I'm your AI Assistant!* I can help you with:\n\
🔹 Casual chat (Friendly Talk 🤝)\n\
🔹 Coding & Debugging (Python, JavaScript, etc. 💻)\n\
🔹 AI & Prompt Engineering (Text-to-Image, AI Tips 🤖🎨)\n\
🔹 Knowledge & Facts (History, Science, Tech 📚)\n\
🔹 Creative Writing (Stories, Poems, Ideas ✍️)\n\n\
🚀 *Just send a message and let's start!*";

/// Fixed system instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Answer concisely.";

/// Text sent when the provider fails or produces no usable content.
pub const FALLBACK_TEXT: &str = "AI didn't respond, try again";

/// Relays one text message at a time: sends a placeholder, issues exactly one
/// completion request, deletes the placeholder, sends the reply (or
/// [`FALLBACK_TEXT`]). Cloneable; all state is shared handles.
#[derive(Clone)]
pub struct MessageRelay {
    bot: Arc<dyn Bot>,
    client: Arc<dyn CompletionClient>,
    thinking_message: String,
}

impl MessageRelay {
    pub fn new(
        bot: Arc<dyn Bot>,
        client: Arc<dyn CompletionClient>,
        thinking_message: String,
    ) -> Self {
        Self {
            bot,
            client,
            thinking_message,
        }
    }

    /// Responds to /start with the fixed welcome text.
    #[instrument(skip(self, chat), fields(chat_id = chat.id))]
    pub async fn handle_start(&self, chat: &Chat) -> Result<()> {
        self.bot.send_message(chat, WELCOME_TEXT).await?;
        info!("Sent welcome message");
        Ok(())
    }

    /// Handles one non-command text message. Provider failures never surface
    /// here; only Telegram transport errors propagate.
    #[instrument(
        skip(self, message),
        fields(chat_id = message.chat.id, message_id = %message.id, user_id = message.user_id)
    )]
    pub async fn handle_text(&self, message: &IncomingMessage) -> Result<()> {
        let placeholder_id = self
            .bot
            .send_message_and_return_id(&message.chat, &self.thinking_message)
            .await?;

        let reply = self.request_completion(&message.text).await;

        // The placeholder must be gone before the final reply appears.
        self.bot
            .delete_message(&message.chat, &placeholder_id)
            .await?;
        self.bot.send_message(&message.chat, &reply).await?;
        info!("Relayed reply");
        Ok(())
    }

    /// One completion request; any failure or empty content degrades to
    /// [`FALLBACK_TEXT`] instead of raising to the caller.
    async fn request_completion(&self, user_text: &str) -> String {
        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_text),
        ];
        match self.client.complete(messages).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                warn!("Provider returned no usable content");
                FALLBACK_TEXT.to_string()
            }
            Err(e) => {
                Self::log_error_chain(&e, "Completion request failed");
                FALLBACK_TEXT.to_string()
            }
        }
    }

    /// Logs an error and its cause chain. First item with `first_msg`, rest
    /// with "Caused by".
    fn log_error_chain(e: &anyhow::Error, first_msg: &str) {
        for (i, cause) in e.chain().enumerate() {
            if i == 0 {
                error!(cause = %cause, "{}", first_msg);
            } else {
                error!(cause = %cause, "Caused by");
            }
        }
    }
}
