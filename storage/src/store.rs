//! Store trait and key layout.
//!
//! Three key families scope all persisted state: the user profile record, the
//! per-user chatroom-summary list, and the per-user-per-chatroom message log.
//! Every value is a standalone JSON document; writes replace the whole value for
//! a key. No transaction spans keys, and two writers sharing a store race
//! last-writer-wins per key with no merge; accepted for a client-only system.

use async_trait::async_trait;
use nova_core::{Chatroom, Message, User};

use crate::StorageError;

/// Key-value persistence contract, injected into the session and list managers
/// as `Arc<dyn Store>` so storage can be faked in tests.
///
/// Reads on missing or unparsable data return `None` / the empty `Vec`; corrupt
/// payloads are treated as absence and never surface as errors.
#[async_trait]
pub trait Store: Send + Sync {
    async fn user(&self) -> Option<User>;
    async fn set_user(&self, user: &User) -> Result<(), StorageError>;
    async fn clear_user(&self) -> Result<(), StorageError>;

    async fn chatrooms(&self, user_id: &str) -> Vec<Chatroom>;
    async fn set_chatrooms(
        &self,
        user_id: &str,
        chatrooms: &[Chatroom],
    ) -> Result<(), StorageError>;
    async fn clear_chatrooms(&self, user_id: &str) -> Result<(), StorageError>;

    async fn messages(&self, user_id: &str, chatroom_id: &str) -> Vec<Message>;
    async fn set_messages(
        &self,
        user_id: &str,
        chatroom_id: &str,
        messages: &[Message],
    ) -> Result<(), StorageError>;
    async fn clear_messages(&self, user_id: &str, chatroom_id: &str)
        -> Result<(), StorageError>;
}

pub(crate) const USER_KEY: &str = "user";

pub(crate) fn chatrooms_key(user_id: &str) -> String {
    format!("chatrooms_{}", user_id)
}

pub(crate) fn messages_key(user_id: &str, chatroom_id: &str) -> String {
    format!("messages_{}_{}", user_id, chatroom_id)
}

/// Decodes a raw JSON payload into a list, logging and degrading to empty on
/// corrupt data.
pub(crate) fn decode_list<T: serde::de::DeserializeOwned>(
    raw: Option<String>,
    key: &str,
) -> Vec<T> {
    match raw {
        Some(payload) => match serde_json::from_str(&payload) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Corrupt payload treated as empty");
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}

/// Decodes the user record, logging and degrading to absent on corrupt data.
pub(crate) fn decode_user(raw: Option<String>) -> Option<User> {
    let payload = raw?;
    match serde_json::from_str(&payload) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(key = USER_KEY, error = %e, "Corrupt user record treated as absent");
            None
        }
    }
}
