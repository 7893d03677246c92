//! Conversation controller: the submit-and-reply exchange state machine.
//!
//! One exchange may be in flight at a time. Submitting appends and persists
//! the user's message immediately, so a crash during the simulated latency
//! never loses the question; delivering the reply appends and persists the
//! advisor's message and returns the controller to idle.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use nivesh_core::config::ChatConfig;
use nivesh_core::types::{Message, Sender};
use nivesh_store::SessionStore;

use crate::advisor::{classify, reply_text, welcome_text, ReplyCategory};
use crate::error::ChatError;

/// A user submission waiting for its advisor reply.
#[derive(Debug)]
struct PendingReply {
    category: ReplyCategory,
}

/// Orchestrates message submission, simulated latency, reply generation,
/// and store updates for one conversation.
pub struct ConversationController {
    store: SessionStore,
    messages: Vec<Message>,
    pending: Option<PendingReply>,
    reply_delay: Duration,
}

impl ConversationController {
    /// Load the persisted log and seed the welcome message if the store is
    /// empty (first visit or recovered corruption).
    pub fn new(store: SessionStore, config: &ChatConfig) -> Result<Self, ChatError> {
        let mut messages = store.load();

        if messages.is_empty() && config.welcome_enabled {
            messages.push(Message::new(welcome_text(), Sender::Bot));
            store.save(&messages)?;
            debug!("Seeded welcome message into empty log");
        }

        Ok(Self {
            store,
            messages,
            pending: None,
            reply_delay: Duration::from_millis(config.reply_delay_ms),
        })
    }

    /// The ordered message log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether an exchange is in flight (the "typing" indicator state).
    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Configured simulated latency between submission and reply.
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Submit user input, starting an exchange.
    ///
    /// Rejects blank input (`EmptyMessage`) and submissions made while a
    /// reply is pending (`ReplyPending`); neither mutates the log or the
    /// store. On acceptance the trimmed text is appended and persisted, and
    /// the reply category is fixed from the raw input.
    pub fn submit(&mut self, raw_text: &str) -> Result<(), ChatError> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.pending.is_some() {
            return Err(ChatError::ReplyPending);
        }

        self.messages.push(Message::new(trimmed, Sender::User));
        self.store.save(&self.messages)?;

        let category = classify(raw_text);
        debug!(?category, "User message accepted");
        self.pending = Some(PendingReply { category });
        Ok(())
    }

    /// Wait out the simulated latency, then append and persist the advisor
    /// reply, returning the controller to idle.
    ///
    /// Errors with `NoPendingReply` if no exchange is in flight. Once a
    /// submission is accepted this cannot otherwise fail: the reply is a
    /// fixed local text gated by a one-shot timer.
    pub async fn deliver_reply(&mut self) -> Result<Message, ChatError> {
        if self.pending.is_none() {
            return Err(ChatError::NoPendingReply);
        }

        sleep(self.reply_delay).await;

        let Some(pending) = self.pending.take() else {
            return Err(ChatError::NoPendingReply);
        };

        let reply = Message::new(reply_text(pending.category), Sender::Bot);
        self.messages.push(reply.clone());
        self.store.save(&self.messages)?;
        debug!(category = ?pending.category, "Advisor reply delivered");
        Ok(reply)
    }
}
