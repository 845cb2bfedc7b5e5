//! # chat-session
//!
//! Session and list management for chatrooms: the pure title generator, the
//! per-conversation [`ChatSession`] (load, seed, send, search), the
//! [`ChatroomList`] (create, rename, pin, delete, order), and inline image
//! [`Attachment`] handling.
//!
//! Both managers take the store as `Arc<dyn Store>` so persistence can be faked
//! in tests.

pub mod attachment;
pub mod list;
pub mod session;
pub mod title;

pub use attachment::{Attachment, AttachmentError, MAX_IMAGE_BYTES};
pub use list::ChatroomList;
pub use session::{ChatSession, SendOutcome, GREETING};
pub use title::generate_title;
