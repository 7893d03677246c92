//! Conversational engine for Nivesh.
//!
//! Provides keyword-rule reply classification, the advisor's canned
//! response texts, and the submit/reply exchange state machine over the
//! durable session store.

pub mod advisor;
pub mod controller;
pub mod error;

pub use advisor::{classify, reply_text, welcome_text, ReplyCategory};
pub use controller::ConversationController;
pub use error::ChatError;
