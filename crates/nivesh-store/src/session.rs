//! Typed stores for the chat log and the user profile.
//!
//! Thin facades over [`DocumentStore`] that pin the persisted key and the
//! document shape for each record kind.

use nivesh_core::error::Result;
use nivesh_core::types::{Message, UserProfile};

use crate::document::DocumentStore;

/// Persisted key for the ordered message log.
pub const CHAT_HISTORY_KEY: &str = "chat-history";

/// Persisted key for the lightweight user record.
pub const USER_PROFILE_KEY: &str = "user-profile";

// =============================================================================
// SessionStore
// =============================================================================

/// Durable persistence of the ordered message log.
///
/// The log is stored as one JSON array and replaced wholesale on every
/// save. Log sizes are bounded by a human chat session, so whole-document
/// overwrite is acceptable.
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: DocumentStore,
}

impl SessionStore {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Load the previously persisted log.
    ///
    /// Returns an empty sequence on first visit or when the stored content
    /// is corrupt. Corruption never surfaces as an error.
    pub fn load(&self) -> Vec<Message> {
        self.store
            .read::<Vec<Message>>(CHAT_HISTORY_KEY)
            .unwrap_or_default()
    }

    /// Overwrite the persisted log with the full current sequence.
    pub fn save(&self, messages: &[Message]) -> Result<()> {
        self.store.write(CHAT_HISTORY_KEY, &messages)
    }

    /// Delete the persisted log. Operational escape hatch; the conversation
    /// engine itself never removes messages.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(CHAT_HISTORY_KEY)
    }
}

// =============================================================================
// ProfileStore
// =============================================================================

/// Durable persistence of the lightweight user record.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    store: DocumentStore,
}

impl ProfileStore {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Load the saved profile, if any.
    pub fn load(&self) -> Option<UserProfile> {
        self.store.read(USER_PROFILE_KEY)
    }

    /// Overwrite the saved profile.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        self.store.write(USER_PROFILE_KEY, profile)
    }
}
