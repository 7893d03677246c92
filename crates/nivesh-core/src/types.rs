use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Author of a conversation message.
///
/// Serialized exactly as `"user"` / `"bot"` — this is the persisted wire
/// format and must not change without migrating stored logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person typing into the chat.
    User,
    /// The scripted advisor.
    Bot,
}

impl Sender {
    /// Human-readable label for terminal rendering.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Advisor",
        }
    }
}

/// Self-reported appetite for investment risk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

// =============================================================================
// Message
// =============================================================================

/// One immutable entry in the conversation log.
///
/// Messages are only ever appended; ordering is the append sequence, and the
/// timestamp exists purely for hour:minute display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// Create a message stamped with a fresh id and the current time.
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    /// Hour:minute label for display next to the message body.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

// =============================================================================
// UserProfile
// =============================================================================

/// Lightweight user record persisted alongside the chat log.
///
/// Display and storage only — the conversation engine never reads it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub monthly_income: String,
    pub risk_tolerance: RiskTolerance,
    pub investment_interests: String,
}
