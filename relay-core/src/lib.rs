//! # relay-core
//!
//! Core types for the relay bot: [`Bot`] trait and its teloxide implementation,
//! message and chat types, error taxonomy, and tracing initialization.
//! Transport-agnostic apart from [`TelegramBot`]; used by relay-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, TelegramBot};
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{Chat, IncomingMessage};
