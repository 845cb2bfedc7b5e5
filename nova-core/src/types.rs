//! Core types: user, chatroom summary, message, sender, and message kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title a chatroom carries until its first user message derives a real one.
pub const DEFAULT_TITLE: &str = "New conversation";

/// Verified account owning chatrooms. Created at OTP verification; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub country_code: String,
    pub phone_number: String,
    pub verified: bool,
    pub verified_at: DateTime<Utc>,
}

impl User {
    /// Identity key scoping all persisted state: dial code + phone number, e.g. "+15551234567".
    pub fn id(&self) -> String {
        format!("{}{}", self.country_code, self.phone_number)
    }
}

/// Chatroom summary as kept in the per-user ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chatroom {
    pub id: String,
    pub title: String,
    /// Preview of the most recent message, shown in the list.
    pub last_message: String,
    /// Last-activity timestamp; drives list ordering together with `pinned`.
    pub timestamp: DateTime<Utc>,
    pub pinned: bool,
}

impl Chatroom {
    /// Creates an unpinned chatroom with a generated id, the default title, and the current time.
    /// Ids embed a UUID so two rapid successive creations cannot collide.
    pub fn new() -> Self {
        Self {
            id: format!("chatroom_{}", Uuid::new_v4()),
            title: DEFAULT_TITLE.to_string(),
            last_message: "New conversation started".to_string(),
            timestamp: Utc::now(),
            pinned: false,
        }
    }
}

impl Default for Chatroom {
    fn default() -> Self {
        Self::new()
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Payload kind of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
}

/// A single message in a chatroom's log. Immutable once created; deleted only
/// together with its chatroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    /// Inline base64 data URL for image messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl Message {
    /// Creates a user-authored text message with a generated id and current timestamp.
    pub fn user_text(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg_{}", Uuid::new_v4()),
            content: content.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            kind: MessageKind::Text,
            image_data: None,
        }
    }

    /// Creates a user-authored image message; `content` may be empty for image-only sends.
    pub fn user_image(content: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            id: format!("msg_{}", Uuid::new_v4()),
            content: content.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            kind: MessageKind::Image,
            image_data: Some(data_url.into()),
        }
    }

    /// Creates an assistant text message with a generated id and current timestamp.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg_{}", Uuid::new_v4()),
            content: content.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            kind: MessageKind::Text,
            image_data: None,
        }
    }
}
