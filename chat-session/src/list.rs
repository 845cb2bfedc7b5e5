//! # Chatroom list manager
//!
//! CRUD plus ordering over a user's chatroom summaries. Every mutation persists
//! the whole list through the store; the message-log cascade on delete keeps
//! orphaned logs from accumulating.

use std::sync::Arc;

use chrono::Utc;
use nova_core::{ChatError, Chatroom, Result};
use storage::Store;
use tracing::{info, instrument};

/// List manager over an injected store. Cheap to clone.
#[derive(Clone)]
pub struct ChatroomList {
    store: Arc<dyn Store>,
}

impl ChatroomList {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Creates a chatroom, prepends it to the list, persists, and returns it.
    #[instrument(skip(self))]
    pub async fn create(&self, user_id: &str) -> Result<Chatroom> {
        let room = Chatroom::new();
        let mut rooms = self.store.chatrooms(user_id).await;
        rooms.insert(0, room.clone());
        self.persist(user_id, &rooms).await?;
        info!(user_id = %user_id, chatroom_id = %room.id, "Created chatroom");
        Ok(room)
    }

    /// Seeds the default chatroom on a first load with an empty store and
    /// returns the current list.
    pub async fn ensure_seeded(&self, user_id: &str) -> Result<Vec<Chatroom>> {
        let rooms = self.store.chatrooms(user_id).await;
        if !rooms.is_empty() {
            return Ok(rooms);
        }
        let mut room = Chatroom::new();
        room.last_message = "Hello! How can I help you today?".to_string();
        let seeded = vec![room];
        self.persist(user_id, &seeded).await?;
        Ok(seeded)
    }

    /// Updates a chatroom's title in place. Unknown ids are a no-op.
    #[instrument(skip(self, title))]
    pub async fn rename(&self, user_id: &str, chatroom_id: &str, title: &str) -> Result<()> {
        let mut rooms = self.store.chatrooms(user_id).await;
        let mut changed = false;
        for room in rooms.iter_mut().filter(|r| r.id == chatroom_id) {
            room.title = title.to_string();
            changed = true;
        }
        if changed {
            self.persist(user_id, &rooms).await?;
        }
        Ok(())
    }

    /// Flips a chatroom's pinned flag and returns the new state; `None` when
    /// the id is unknown.
    #[instrument(skip(self))]
    pub async fn toggle_pin(&self, user_id: &str, chatroom_id: &str) -> Result<Option<bool>> {
        let mut rooms = self.store.chatrooms(user_id).await;
        let mut pinned = None;
        for room in rooms.iter_mut().filter(|r| r.id == chatroom_id) {
            room.pinned = !room.pinned;
            pinned = Some(room.pinned);
        }
        if pinned.is_some() {
            self.persist(user_id, &rooms).await?;
        }
        Ok(pinned)
    }

    /// Refreshes a chatroom's preview and activity timestamp on message
    /// traffic.
    pub async fn touch(&self, user_id: &str, chatroom_id: &str, preview: &str) -> Result<()> {
        let mut rooms = self.store.chatrooms(user_id).await;
        let mut changed = false;
        for room in rooms.iter_mut().filter(|r| r.id == chatroom_id) {
            room.last_message = preview.to_string();
            room.timestamp = Utc::now();
            changed = true;
        }
        if changed {
            self.persist(user_id, &rooms).await?;
        }
        Ok(())
    }

    /// Deletes a chatroom and cascades to its message log. Idempotent: unknown
    /// ids leave the list untouched. The caller must clear any open-session
    /// reference to the deleted room.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: &str, chatroom_id: &str) -> Result<()> {
        let mut rooms = self.store.chatrooms(user_id).await;
        let before = rooms.len();
        rooms.retain(|r| r.id != chatroom_id);
        if rooms.len() != before {
            self.persist(user_id, &rooms).await?;
            info!(user_id = %user_id, chatroom_id = %chatroom_id, "Deleted chatroom");
        }
        // Cascade runs unconditionally so stray logs from older deletes go too.
        self.store
            .clear_messages(user_id, chatroom_id)
            .await
            .map_err(|e| ChatError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Returns one summary by id.
    pub async fn get(&self, user_id: &str, chatroom_id: &str) -> Option<Chatroom> {
        self.store
            .chatrooms(user_id)
            .await
            .into_iter()
            .find(|r| r.id == chatroom_id)
    }

    /// Returns summaries filtered by a case-insensitive title substring (empty
    /// query keeps everything), pinned first, then most recent activity, with
    /// ties keeping their stored order.
    pub async fn list(&self, user_id: &str, query: &str) -> Vec<Chatroom> {
        let needle = query.trim().to_lowercase();
        let mut rooms: Vec<Chatroom> = self
            .store
            .chatrooms(user_id)
            .await
            .into_iter()
            .filter(|r| needle.is_empty() || r.title.to_lowercase().contains(&needle))
            .collect();
        rooms.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        rooms
    }

    async fn persist(&self, user_id: &str, rooms: &[Chatroom]) -> Result<()> {
        self.store
            .set_chatrooms(user_id, rooms)
            .await
            .map_err(|e| ChatError::Storage(e.to_string()))
    }
}
