//! Nivesh storage crate - JSON document persistence for one data directory.
//!
//! Mirrors the original browser local-storage model: one JSON document per
//! key, whole-document overwrite on every save, and corruption recovered by
//! treating the document as absent.

pub mod document;
pub mod session;

pub use document::DocumentStore;
pub use session::{ProfileStore, SessionStore, CHAT_HISTORY_KEY, USER_PROFILE_KEY};
