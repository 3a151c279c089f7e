//! Blob storage seam for uploaded media
//!
//! The core only knows `store(file) -> url`; the filesystem implementation
//! below is what production runs, tests can substitute their own.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;

/// Upload size ceiling (50 MB).
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Coarse classification returned to the client alongside the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Document,
    File,
}

/// Map an allow-listed MIME type to its coarse kind; `None` means the
/// upload is rejected.
pub fn classify_mime(mime: &str) -> Option<MediaKind> {
    match mime {
        m if m.starts_with("image/") => Some(MediaKind::Photo),
        m if m.starts_with("video/") => Some(MediaKind::Video),
        "application/pdf" => Some(MediaKind::Document),
        "application/msword"
        | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        | "application/vnd.ms-excel"
        | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        | "application/vnd.ms-powerpoint"
        | "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
            Some(MediaKind::Document)
        }
        "text/plain" | "text/csv" => Some(MediaKind::File),
        "application/rtf" | "text/rtf" => Some(MediaKind::File),
        _ => None,
    }
}

/// Stored object handle
#[derive(Debug, Clone, Serialize)]
pub struct StoredBlob {
    /// Relative URL the client can fetch the object from
    pub url: String,
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(&self, original_name: &str, bytes: Vec<u8>) -> Result<StoredBlob, CoreError>;
}

/// Filesystem-backed blob store. Object names are random UUIDs, so
/// concurrent uploads cannot collide and no locking is needed.
pub struct FsBlobStore {
    root: PathBuf,
    public_prefix: String,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn store(&self, original_name: &str, bytes: Vec<u8>) -> Result<StoredBlob, CoreError> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let object_name = format!("{}{}", Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::Internal(format!("blob store unavailable: {e}")))?;
        tokio::fs::write(self.root.join(&object_name), bytes)
            .await
            .map_err(|e| CoreError::Internal(format!("blob write failed: {e}")))?;

        Ok(StoredBlob {
            url: format!("{}/{}", self.public_prefix.trim_end_matches('/'), object_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_classify_as_photo() {
        assert_eq!(classify_mime("image/png"), Some(MediaKind::Photo));
        assert_eq!(classify_mime("image/jpeg"), Some(MediaKind::Photo));
    }

    #[test]
    fn video_and_documents() {
        assert_eq!(classify_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(classify_mime("application/pdf"), Some(MediaKind::Document));
        assert_eq!(classify_mime("text/plain"), Some(MediaKind::File));
    }

    #[test]
    fn unknown_mime_is_rejected() {
        assert_eq!(classify_mime("application/x-sh"), None);
        assert_eq!(classify_mime("application/octet-stream"), None);
    }

    #[tokio::test]
    async fn fs_store_writes_and_returns_relative_url() {
        let dir = std::env::temp_dir().join(format!("campus-blob-{}", Uuid::new_v4()));
        let store = FsBlobStore::new(&dir, "/uploads");

        let blob = store.store("photo.jpg", b"bytes".to_vec()).await.unwrap();
        assert!(blob.url.starts_with("/uploads/"));
        assert!(blob.url.ends_with(".jpg"));

        let name = blob.url.rsplit('/').next().unwrap();
        let on_disk = tokio::fs::read(dir.join(name)).await.unwrap();
        assert_eq!(on_disk, b"bytes");

        tokio::fs::remove_dir_all(dir).await.ok();
    }
}
