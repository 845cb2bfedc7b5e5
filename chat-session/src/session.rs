//! # Chatroom session manager
//!
//! Owns one open chatroom's message log: loads it (seeding the assistant
//! greeting on first materialization), appends and persists sends, derives the
//! title exactly once per conversation, and awaits the responder for the
//! assistant turn.
//!
//! `send` takes `&mut self`, so one session can have at most one responder call
//! outstanding. Two sessions on the same chatroom still race last-writer-wins
//! at the store; that is a documented store-level limitation.

use std::sync::Arc;

use nova_core::{ChatError, Message, Result, DEFAULT_TITLE};
use reply_rules::Responder;
use storage::Store;
use tracing::{info, instrument, warn};

use crate::attachment::Attachment;
use crate::list::ChatroomList;
use crate::title::generate_title;

/// Greeting every chatroom log starts with.
pub const GREETING: &str =
    "Hello! I'm Nova, a helpful AI assistant. How can I help you today?";

/// Result of a send.
#[derive(Debug)]
pub enum SendOutcome {
    /// Neither text nor attachment was given; nothing happened.
    Ignored,
    Delivered {
        user_message: Message,
        reply: Message,
        /// Set when this send was the one that derived the conversation title.
        new_title: Option<String>,
    },
}

/// One open conversation.
pub struct ChatSession {
    store: Arc<dyn Store>,
    responder: Arc<Responder>,
    list: ChatroomList,
    user_id: String,
    chatroom_id: String,
    messages: Vec<Message>,
    title_generated: bool,
}

impl ChatSession {
    /// Loads the message log for a chatroom, seeding the greeting when the log
    /// is empty. `current_title` tells the session whether the title was
    /// already derived in an earlier visit.
    #[instrument(skip(store, responder))]
    pub async fn open(
        store: Arc<dyn Store>,
        responder: Arc<Responder>,
        user_id: &str,
        chatroom_id: &str,
        current_title: &str,
    ) -> Result<Self> {
        let mut messages = store.messages(user_id, chatroom_id).await;
        if messages.is_empty() {
            messages.push(Message::assistant(GREETING));
            store
                .set_messages(user_id, chatroom_id, &messages)
                .await
                .map_err(|e| ChatError::Storage(e.to_string()))?;
            info!(user_id = %user_id, chatroom_id = %chatroom_id, "Seeded greeting");
        }

        Ok(Self {
            list: ChatroomList::new(store.clone()),
            store,
            responder,
            user_id: user_id.to_string(),
            chatroom_id: chatroom_id.to_string(),
            messages,
            title_generated: current_title != DEFAULT_TITLE,
        })
    }

    /// Sends one user message and awaits the assistant reply.
    ///
    /// The user message is persisted before the responder runs; if anything
    /// after that fails, the send returns an error but the user message stays
    /// committed and the session remains usable.
    #[instrument(skip(self, text, attachment))]
    pub async fn send(
        &mut self,
        text: &str,
        attachment: Option<Attachment>,
    ) -> Result<SendOutcome> {
        let text = text.trim();
        if text.is_empty() && attachment.is_none() {
            return Ok(SendOutcome::Ignored);
        }

        let user_message = match attachment {
            Some(att) => Message::user_image(text, att.data_url),
            None => Message::user_text(text),
        };
        self.messages.push(user_message.clone());
        self.persist().await?;

        let mut new_title = None;
        if !self.title_generated && !text.is_empty() {
            let title = generate_title(text);
            self.list
                .rename(&self.user_id, &self.chatroom_id, &title)
                .await?;
            self.title_generated = true;
            info!(chatroom_id = %self.chatroom_id, title = %title, "Derived title");
            new_title = Some(title);
        }

        let preview = if text.is_empty() { "[image]" } else { text };
        self.list
            .touch(&self.user_id, &self.chatroom_id, preview)
            .await?;

        let reply_text = self.responder.respond(text).await.map_err(|e| {
            warn!(chatroom_id = %self.chatroom_id, error = %e, "Responder failed");
            ChatError::from(e)
        })?;

        let reply = Message::assistant(reply_text);
        self.messages.push(reply.clone());
        self.persist().await?;
        self.list
            .touch(&self.user_id, &self.chatroom_id, &reply.content)
            .await?;

        Ok(SendOutcome::Delivered {
            user_message,
            reply,
            new_title,
        })
    }

    /// Messages whose content contains the query, case-insensitively. An empty
    /// query returns the whole log. Non-mutating.
    pub fn search(&self, query: &str) -> Vec<&Message> {
        let needle = query.to_lowercase();
        self.messages
            .iter()
            .filter(|m| m.content.to_lowercase().contains(&needle))
            .collect()
    }

    /// The in-memory log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn chatroom_id(&self) -> &str {
        &self.chatroom_id
    }

    async fn persist(&self) -> Result<()> {
        self.store
            .set_messages(&self.user_id, &self.chatroom_id, &self.messages)
            .await
            .map_err(|e| ChatError::Storage(e.to_string()))
    }
}
