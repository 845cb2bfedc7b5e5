//! Inline image attachments.
//!
//! An accepted image is base64-encoded into a `data:` URL stored on the message
//! itself, so the log stays a self-contained JSON document. Files at or over the
//! size ceiling are rejected with a recoverable error the caller surfaces as a
//! notification.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use thiserror::Error;
use tracing::debug;

/// Size ceiling for inline images.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum AttachmentError {
    #[error("Image must be under 5MB ({size} bytes)")]
    TooLarge { size: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A staged image ready to be attached to the next send.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub data_url: String,
}

impl Attachment {
    /// Reads and encodes an image file, enforcing the size ceiling first.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, AttachmentError> {
        let path = path.as_ref();

        let meta = tokio::fs::metadata(path).await?;
        if meta.len() >= MAX_IMAGE_BYTES {
            return Err(AttachmentError::TooLarge { size: meta.len() });
        }

        let bytes = tokio::fs::read(path).await?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let data_url = format!("data:{};base64,{}", mime, BASE64.encode(&bytes));

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(file = %file_name, bytes = bytes.len(), "Encoded attachment");

        Ok(Self { file_name, data_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_small_file_becomes_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).unwrap();

        let att = Attachment::from_file(&path).await.unwrap();
        assert_eq!(att.file_name, "pixel.png");
        assert!(att.data_url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.jpg");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_IMAGE_BYTES).unwrap();

        match Attachment::from_file(&path).await {
            Err(AttachmentError::TooLarge { size }) => assert_eq!(size, MAX_IMAGE_BYTES),
            other => panic!("expected TooLarge, got {:?}", other.map(|a| a.file_name)),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let err = Attachment::from_file("/no/such/image.png").await.unwrap_err();
        assert!(matches!(err, AttachmentError::Io(_)));
    }
}
