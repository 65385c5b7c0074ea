//! Test doubles for relay integration tests.
//!
//! `MockBot` records every send/delete in order so tests can assert on the
//! exact sequence of Telegram calls without hitting the network.
//! `StubCompletionClient` records the submitted messages and returns a
//! preconfigured outcome.

use async_trait::async_trait;
use openrouter_client::{ChatMessage, CompletionClient};
use relay_core::{Bot, Chat, Result};
use std::sync::{Arc, Mutex};

/// One recorded Telegram call, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum BotOp {
    /// Formatted send (welcome or final reply).
    Send { chat_id: i64, text: String },
    /// Placeholder send; `id` is the id handed back to the relay.
    SendPlaceholder {
        chat_id: i64,
        text: String,
        id: String,
    },
    Delete { chat_id: i64, message_id: String },
}

/// Mock Bot that records all calls and returns incrementing placeholder ids.
pub struct MockBot {
    ops: Arc<Mutex<Vec<BotOp>>>,
    next_id: Mutex<i32>,
}

impl MockBot {
    pub fn with_recorder() -> (Arc<Self>, Arc<Mutex<Vec<BotOp>>>) {
        let ops = Arc::new(Mutex::new(Vec::new()));
        let bot = Arc::new(Self {
            ops: ops.clone(),
            next_id: Mutex::new(1),
        });
        (bot, ops)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.ops.lock().unwrap().push(BotOp::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let mut next = self.next_id.lock().unwrap();
        let id = next.to_string();
        *next += 1;
        self.ops.lock().unwrap().push(BotOp::SendPlaceholder {
            chat_id: chat.id,
            text: text.to_string(),
            id: id.clone(),
        });
        Ok(id)
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        self.ops.lock().unwrap().push(BotOp::Delete {
            chat_id: chat.id,
            message_id: message_id.to_string(),
        });
        Ok(())
    }
}

/// Preconfigured provider outcome for a test.
pub enum StubOutcome {
    /// Well-formed response with usable content.
    Reply(String),
    /// Well-formed response, but no usable content (missing path or
    /// whitespace-only, which the client reports identically).
    Empty,
    /// Transport failure, non-2xx status, or malformed JSON.
    Fail(String),
}

/// Stub CompletionClient recording every request's messages.
pub struct StubCompletionClient {
    outcome: StubOutcome,
    pub requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl StubCompletionClient {
    pub fn new(outcome: StubOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }
}

#[async_trait]
impl CompletionClient for StubCompletionClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> anyhow::Result<Option<String>> {
        self.requests.lock().unwrap().push(messages);
        match &self.outcome {
            StubOutcome::Reply(text) => Ok(Some(text.clone())),
            StubOutcome::Empty => Ok(None),
            StubOutcome::Fail(reason) => Err(anyhow::anyhow!("{}", reason)),
        }
    }
}
