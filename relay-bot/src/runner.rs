//! Receive loop: converts teloxide messages to core [`IncomingMessage`] and
//! routes them to the [`MessageRelay`] (/start vs plain text; other commands
//! are ignored). Each message is handled on its own spawned task.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;
use crate::relay::MessageRelay;

/// Returns true if the text is the /start command, with or without a
/// `@botname` suffix.
pub fn is_start_command(text: &str) -> bool {
    let first = text.split_whitespace().next().unwrap_or("");
    first.split('@').next().unwrap_or("") == "/start"
}

/// Returns true for any command-prefixed text. Commands other than /start are
/// not relayed to the provider.
pub fn is_command(text: &str) -> bool {
    text.starts_with('/')
}

/// Runs the long-polling receive loop until externally terminated.
#[instrument(skip(bot, relay))]
pub async fn run_repl(bot: teloxide::Bot, relay: MessageRelay) -> Result<()> {
    teloxide::repl(
        bot,
        move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
            let relay = relay.clone();

            async move {
                if msg.text().is_none() {
                    info!(chat_id = msg.chat.id.0, "Received non-text message");
                    return Ok(());
                }
                let core_msg = TelegramMessageWrapper(&msg).to_core();
                info!(
                    user_id = core_msg.user_id,
                    chat_id = core_msg.chat.id,
                    message_content = %core_msg.text,
                    "Received message"
                );

                tokio::spawn(async move {
                    let result = if is_start_command(&core_msg.text) {
                        relay.handle_start(&core_msg.chat).await
                    } else if is_command(&core_msg.text) {
                        Ok(())
                    } else {
                        relay.handle_text(&core_msg).await
                    };
                    if let Err(e) = result {
                        error!(error = %e, chat_id = core_msg.chat.id, "Handler failed");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
