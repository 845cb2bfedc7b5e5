//! Integration tests for [`chat_session::ChatSession`].
//!
//! Covers: greeting seed on first load (and only then), the empty-send no-op,
//! the full send flow with title derivation on the first user message only,
//! image-only sends, transcript search, and re-opening after a delete. All
//! tests use the in-memory store and a zero-delay responder with a pinned
//! fallback pick.

use std::sync::Arc;

use chat_session::{Attachment, ChatSession, ChatroomList, SendOutcome, GREETING};
use nova_core::{MessageKind, Sender, DEFAULT_TITLE};
use reply_rules::{FixedPicker, Responder};
use storage::{InMemoryStore, Store};

fn responder() -> Arc<Responder> {
    Arc::new(Responder::with_picker(Arc::new(FixedPicker(0))).with_delay_ms(0, 0))
}

async fn open_fresh(store: Arc<InMemoryStore>) -> (ChatroomList, ChatSession, String) {
    let list = ChatroomList::new(store.clone());
    let room = list.create("u1").await.unwrap();
    let session = ChatSession::open(store, responder(), "u1", &room.id, &room.title)
        .await
        .unwrap();
    (list, session, room.id)
}

/// **Test: an empty log is seeded with exactly one assistant greeting, and a
/// second open does not seed again.**
#[tokio::test]
async fn test_open_seeds_greeting_once() {
    let store = Arc::new(InMemoryStore::new());
    let (_, session, room_id) = open_fresh(store.clone()).await;

    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].content, GREETING);
    assert_eq!(session.messages()[0].sender, Sender::Assistant);

    drop(session);
    let reopened = ChatSession::open(store.clone(), responder(), "u1", &room_id, DEFAULT_TITLE)
        .await
        .unwrap();
    assert_eq!(reopened.messages().len(), 1);
    assert_eq!(store.messages("u1", &room_id).await.len(), 1);
}

/// **Test: a send with neither text nor attachment is a no-op, not an error.**
#[tokio::test]
async fn test_empty_send_is_ignored() {
    let store = Arc::new(InMemoryStore::new());
    let (_, mut session, room_id) = open_fresh(store.clone()).await;

    let outcome = session.send("   ", None).await.unwrap();
    assert!(matches!(outcome, SendOutcome::Ignored));
    assert_eq!(store.messages("u1", &room_id).await.len(), 1);
}

/// **Test: the first user message persists, derives a non-default title, and
/// draws an assistant reply that is persisted too.**
#[tokio::test]
async fn test_first_send_titles_and_replies() {
    let store = Arc::new(InMemoryStore::new());
    let (list, mut session, room_id) = open_fresh(store.clone()).await;

    let outcome = session.send("Hello there", None).await.unwrap();
    let SendOutcome::Delivered {
        user_message,
        reply,
        new_title,
    } = outcome
    else {
        panic!("expected Delivered");
    };

    assert_eq!(user_message.content, "Hello there");
    assert_eq!(reply.sender, Sender::Assistant);
    assert_eq!(new_title.as_deref(), Some("Hello there"));

    let room = list.get("u1", &room_id).await.unwrap();
    assert_eq!(room.title, "Hello there");
    assert_ne!(room.title, DEFAULT_TITLE);

    let log = store.messages("u1", &room_id).await;
    assert_eq!(log.len(), 3);
    assert_eq!(log[1].content, "Hello there");
    assert_eq!(log[2].content, reply.content);
}

/// **Test: the title is derived exactly once; later sends never rename.**
#[tokio::test]
async fn test_title_derived_only_once() {
    let store = Arc::new(InMemoryStore::new());
    let (list, mut session, room_id) = open_fresh(store.clone()).await;

    session.send("Hello there", None).await.unwrap();
    let outcome = session
        .send("What is the capital of France?", None)
        .await
        .unwrap();

    let SendOutcome::Delivered { new_title, .. } = outcome else {
        panic!("expected Delivered");
    };
    assert!(new_title.is_none());
    assert_eq!(list.get("u1", &room_id).await.unwrap().title, "Hello there");
}

/// **Test: a session opened on an already-titled chatroom never re-titles.**
#[tokio::test]
async fn test_existing_title_suppresses_generation() {
    let store = Arc::new(InMemoryStore::new());
    let list = ChatroomList::new(store.clone());
    let room = list.create("u1").await.unwrap();
    list.rename("u1", &room.id, "Settled title").await.unwrap();

    let mut session =
        ChatSession::open(store, responder(), "u1", &room.id, "Settled title")
            .await
            .unwrap();
    session.send("Hello again", None).await.unwrap();

    assert_eq!(list.get("u1", &room.id).await.unwrap().title, "Settled title");
}

/// **Test: an image-only send produces an image message and the image
/// acknowledgment reply.**
#[tokio::test]
async fn test_image_only_send() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.png");
    std::fs::write(&path, [1, 2, 3]).unwrap();
    let attachment = Attachment::from_file(&path).await.unwrap();

    let store = Arc::new(InMemoryStore::new());
    let (_, mut session, _) = open_fresh(store.clone()).await;

    let outcome = session.send("", Some(attachment)).await.unwrap();
    let SendOutcome::Delivered {
        user_message,
        reply,
        new_title,
    } = outcome
    else {
        panic!("expected Delivered");
    };

    assert_eq!(user_message.kind, MessageKind::Image);
    assert!(user_message.image_data.as_deref().unwrap().starts_with("data:"));
    assert!(reply.content.contains("You've sent an image"));
    // An image-only send has no text to derive a title from.
    assert!(new_title.is_none());
}

/// **Test: search is case-insensitive and the empty query returns the whole
/// log.**
#[tokio::test]
async fn test_search_filters_log() {
    let store = Arc::new(InMemoryStore::new());
    let (_, mut session, _) = open_fresh(store).await;

    session.send("Rust borrow checker", None).await.unwrap();

    assert_eq!(session.search("").len(), session.messages().len());
    assert_eq!(session.search("BORROW").len(), 1);
    assert!(session.search("no such phrase").is_empty());
}

/// **Test: after deleting the open chatroom the caller drops the session;
/// re-opening the same id starts a fresh, re-seeded log instead of crashing.**
#[tokio::test]
async fn test_reopen_after_delete_reseeds() {
    let store = Arc::new(InMemoryStore::new());
    let (list, mut session, room_id) = open_fresh(store.clone()).await;
    session.send("Hello there", None).await.unwrap();

    list.delete("u1", &room_id).await.unwrap();
    drop(session); // caller clears the open-session reference

    let reopened = ChatSession::open(store.clone(), responder(), "u1", &room_id, DEFAULT_TITLE)
        .await
        .unwrap();
    assert_eq!(reopened.messages().len(), 1);
    assert_eq!(reopened.messages()[0].content, GREETING);
}
