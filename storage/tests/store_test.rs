//! Integration tests for the [`storage::Store`] implementations.
//!
//! Covers: round-trips for all three key families (including the empty log),
//! reads on missing keys, corrupt payloads degrading to empty/absent, whole-value
//! replacement on write, and clears being idempotent. JsonFileStore runs against
//! a tempdir; InMemoryStore doubles as the corrupt-payload fixture.

use chrono::Utc;
use nova_core::{Chatroom, Message, User};
use storage::{InMemoryStore, JsonFileStore, Store};

fn test_user() -> User {
    User {
        name: "Test".to_string(),
        country_code: "+1".to_string(),
        phone_number: "5551234567".to_string(),
        verified: true,
        verified_at: Utc::now(),
    }
}

/// **Test: message log round-trips, including the empty log.**
///
/// **Setup:** In-memory store.
/// **Action:** set_messages with two messages, read back; set_messages with an empty slice, read back.
/// **Expected:** contents and order preserved; the empty write reads back as empty, not as the prior log.
#[tokio::test]
async fn test_message_log_roundtrip() {
    let store = InMemoryStore::new();

    let log = vec![Message::assistant("Welcome"), Message::user_text("hi there")];
    store.set_messages("u1", "c1", &log).await.unwrap();

    let read = store.messages("u1", "c1").await;
    assert_eq!(read.len(), 2);
    assert_eq!(read[0].content, "Welcome");
    assert_eq!(read[1].content, "hi there");

    store.set_messages("u1", "c1", &[]).await.unwrap();
    assert!(store.messages("u1", "c1").await.is_empty());
}

/// **Test: reads on missing keys return empty containers.**
///
/// **Setup:** Fresh in-memory store, nothing written.
/// **Action:** user(), chatrooms(), messages().
/// **Expected:** None and empty Vecs; no errors.
#[tokio::test]
async fn test_missing_keys_read_empty() {
    let store = InMemoryStore::new();
    assert!(store.user().await.is_none());
    assert!(store.chatrooms("u1").await.is_empty());
    assert!(store.messages("u1", "c1").await.is_empty());
}

/// **Test: corrupt payloads are treated as absence, never as errors.**
///
/// **Setup:** In-memory store with malformed JSON planted under all three key families.
/// **Action:** read each family.
/// **Expected:** None / empty Vecs.
#[tokio::test]
async fn test_corrupt_payloads_degrade_to_empty() {
    let store = InMemoryStore::new();
    store.insert_raw("user", "{not json").await;
    store.insert_raw("chatrooms_u1", "[{\"id\":").await;
    store.insert_raw("messages_u1_c1", "42").await;

    assert!(store.user().await.is_none());
    assert!(store.chatrooms("u1").await.is_empty());
    assert!(store.messages("u1", "c1").await.is_empty());
}

/// **Test: writes replace the prior value for a key entirely.**
///
/// **Setup:** In-memory store with a three-room list.
/// **Action:** write a one-room list for the same user.
/// **Expected:** read returns only the one room; nothing of the old list survives.
#[tokio::test]
async fn test_writes_replace_whole_value() {
    let store = InMemoryStore::new();
    let rooms: Vec<Chatroom> = (0..3).map(|_| Chatroom::new()).collect();
    store.set_chatrooms("u1", &rooms).await.unwrap();

    let replacement = vec![Chatroom::new()];
    store.set_chatrooms("u1", &replacement).await.unwrap();

    let read = store.chatrooms("u1").await;
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].id, replacement[0].id);
}

/// **Test: user record round-trips and clear_user removes it.**
///
/// **Setup:** JsonFileStore in a tempdir.
/// **Action:** set_user, read back, clear_user, read again; clear_user once more.
/// **Expected:** record round-trips; after clear the read is None; the second clear is a no-op.
#[tokio::test]
async fn test_file_store_user_roundtrip_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let user = test_user();
    store.set_user(&user).await.unwrap();

    let read = store.user().await.expect("user persisted");
    assert_eq!(read.id(), user.id());
    assert!(read.verified);

    store.clear_user().await.unwrap();
    assert!(store.user().await.is_none());
    store.clear_user().await.unwrap();
}

/// **Test: file store keeps (user, chatroom) logs under distinct keys.**
///
/// **Setup:** JsonFileStore in a tempdir, logs for two chatrooms of one user.
/// **Action:** clear_messages on one chatroom.
/// **Expected:** only that chatroom's log is gone; the other is intact on disk.
#[tokio::test]
async fn test_file_store_scopes_logs_per_chatroom() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store
        .set_messages("u1", "c1", &[Message::user_text("first room")])
        .await
        .unwrap();
    store
        .set_messages("u1", "c2", &[Message::user_text("second room")])
        .await
        .unwrap();

    store.clear_messages("u1", "c1").await.unwrap();

    assert!(store.messages("u1", "c1").await.is_empty());
    let survivor = store.messages("u1", "c2").await;
    assert_eq!(survivor.len(), 1);
    assert_eq!(survivor[0].content, "second room");
}

/// **Test: a hand-corrupted file on disk reads as empty.**
///
/// **Setup:** JsonFileStore with a chatroom list written, then the file overwritten with garbage.
/// **Action:** chatrooms().
/// **Expected:** empty list, no error.
#[tokio::test]
async fn test_file_store_corrupt_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store.set_chatrooms("u1", &[Chatroom::new()]).await.unwrap();
    std::fs::write(dir.path().join("chatrooms_u1.json"), "<<garbage>>").unwrap();

    assert!(store.chatrooms("u1").await.is_empty());
}
