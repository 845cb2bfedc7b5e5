//! # In-memory store
//!
//! HashMap-backed [`Store`] implementation holding raw JSON strings per key, so
//! tests can plant malformed payloads and assert the degrade-to-empty contract.
//! Data is lost on drop; use [`crate::JsonFileStore`] for anything persistent.
//!
//! Thread safety: `Arc<RwLock<..>>`, safe to clone across tasks.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use nova_core::{Chatroom, Message, User};
use tokio::sync::RwLock;

use crate::store::{chatrooms_key, decode_list, decode_user, messages_key, Store, USER_KEY};
use crate::StorageError;

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plants a raw payload under a key, bypassing serialization. Test hook for
    /// exercising the corrupt-data path.
    pub async fn insert_raw(&self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries.write().await.insert(key.into(), payload.into());
    }

    /// Returns the number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put<T: serde::Serialize>(&self, key: String, value: &T) -> Result<(), StorageError> {
        let payload = serde_json::to_string(value)?;
        self.entries.write().await.insert(key, payload);
        Ok(())
    }

    async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn user(&self) -> Option<User> {
        decode_user(self.get(USER_KEY).await)
    }

    async fn set_user(&self, user: &User) -> Result<(), StorageError> {
        self.put(USER_KEY.to_string(), user).await
    }

    async fn clear_user(&self) -> Result<(), StorageError> {
        self.remove(USER_KEY).await;
        Ok(())
    }

    async fn chatrooms(&self, user_id: &str) -> Vec<Chatroom> {
        let key = chatrooms_key(user_id);
        decode_list(self.get(&key).await, &key)
    }

    async fn set_chatrooms(
        &self,
        user_id: &str,
        chatrooms: &[Chatroom],
    ) -> Result<(), StorageError> {
        self.put(chatrooms_key(user_id), &chatrooms).await
    }

    async fn clear_chatrooms(&self, user_id: &str) -> Result<(), StorageError> {
        self.remove(&chatrooms_key(user_id)).await;
        Ok(())
    }

    async fn messages(&self, user_id: &str, chatroom_id: &str) -> Vec<Message> {
        let key = messages_key(user_id, chatroom_id);
        decode_list(self.get(&key).await, &key)
    }

    async fn set_messages(
        &self,
        user_id: &str,
        chatroom_id: &str,
        messages: &[Message],
    ) -> Result<(), StorageError> {
        self.put(messages_key(user_id, chatroom_id), &messages).await
    }

    async fn clear_messages(
        &self,
        user_id: &str,
        chatroom_id: &str,
    ) -> Result<(), StorageError> {
        self.remove(&messages_key(user_id, chatroom_id)).await;
        Ok(())
    }
}
