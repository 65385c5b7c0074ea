//! # relay-bot
//!
//! Single-purpose chat relay: receives Telegram text messages, forwards each
//! one to the OpenRouter chat-completions API, and relays the reply back.
//! `/start` gets a fixed welcome text; every other non-command text message
//! goes through [`MessageRelay`]. No conversation history, no persistence.

pub mod adapters;
pub mod config;
pub mod relay;
pub mod runner;

pub use config::BotConfig;
pub use relay::{MessageRelay, FALLBACK_TEXT, SYSTEM_PROMPT, WELCOME_TEXT};
pub use runner::run_repl;
