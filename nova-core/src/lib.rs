//! # nova-core
//!
//! Core types and errors for Novachat: [`User`], [`Chatroom`], [`Message`], the
//! [`ChatError`]/[`RuleError`] taxonomy, and tracing initialization. Transport- and
//! storage-agnostic; used by every other crate in the workspace.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ChatError, Result, RuleError};
pub use logger::init_tracing;
pub use types::{Chatroom, Message, MessageKind, Sender, User, DEFAULT_TITLE};
