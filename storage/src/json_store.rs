//! # JSON file store
//!
//! [`Store`] implementation persisting one JSON document per key under a data
//! directory: `user.json`, `chatrooms_<user>.json`, `messages_<user>_<chatroom>.json`.
//! Writes replace the whole file; a missing or unparsable file reads as empty.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use nova_core::{Chatroom, Message, User};
use tracing::debug;

use crate::store::{chatrooms_key, decode_list, decode_user, messages_key, Store, USER_KEY};
use crate::StorageError;

/// File-backed store rooted at a data directory. Cheap to clone.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `root`. The directory is created lazily on the
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory this store writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    async fn get(&self, key: &str) -> Option<String> {
        tokio::fs::read_to_string(self.path_for(key)).await.ok()
    }

    async fn put<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let payload = serde_json::to_string(value)?;
        tokio::fs::write(self.path_for(key), payload).await?;
        debug!(key = %key, "Wrote store entry");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn user(&self) -> Option<User> {
        decode_user(self.get(USER_KEY).await)
    }

    async fn set_user(&self, user: &User) -> Result<(), StorageError> {
        self.put(USER_KEY, user).await
    }

    async fn clear_user(&self) -> Result<(), StorageError> {
        self.remove(USER_KEY).await
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
        self.put(&chatrooms_key(user_id), &chatrooms).await
    }

    async fn clear_chatrooms(&self, user_id: &str) -> Result<(), StorageError> {
        self.remove(&chatrooms_key(user_id)).await
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
        self.put(&messages_key(user_id, chatroom_id), &messages).await
    }

    async fn clear_messages(
        &self,
        user_id: &str,
        chatroom_id: &str,
    ) -> Result<(), StorageError> {
        self.remove(&messages_key(user_id, chatroom_id)).await
    }
}
