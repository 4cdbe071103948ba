//! Proof image validation, keying, and public URL construction.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use habitflow_core::config::storage::StorageConfig;
use habitflow_core::error::AppError;
use habitflow_core::result::AppResult;
use habitflow_core::traits::storage::{ByteStream, StorageProvider};

/// A stored proof image.
#[derive(Debug, Clone)]
pub struct StoredProof {
    /// Storage path, relative to the provider root.
    pub path: String,
    /// Public URL clients can fetch the image from.
    pub url: String,
    /// Detected content type.
    pub content_type: String,
    /// Stored size in bytes.
    pub size_bytes: u64,
}

/// Stores and serves habit proof images.
///
/// Uploads are sniffed by content, never trusted by filename, and keyed
/// as `proofs/{user_id}/{uuid}.{ext}` so users cannot collide with or
/// enumerate each other's images.
#[derive(Debug, Clone)]
pub struct ProofStore {
    provider: Arc<dyn StorageProvider>,
    max_size_bytes: u64,
    public_base_url: String,
}

impl ProofStore {
    /// Create a proof store over a storage provider.
    pub fn new(provider: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self {
            provider,
            max_size_bytes: config.max_upload_size_bytes,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Validate and store a proof image for a user.
    pub async fn store(&self, user_id: Uuid, data: Bytes) -> AppResult<StoredProof> {
        if data.is_empty() {
            return Err(AppError::validation("Proof image is empty"));
        }
        if data.len() as u64 > self.max_size_bytes {
            return Err(AppError::validation(format!(
                "Proof image exceeds the {} byte upload limit",
                self.max_size_bytes
            )));
        }

        let format = image::guess_format(&data)
            .map_err(|_| AppError::validation("Proof upload is not a recognized image"))?;
        let (ext, content_type) = match format {
            image::ImageFormat::Png => ("png", "image/png"),
            image::ImageFormat::Jpeg => ("jpg", "image/jpeg"),
            image::ImageFormat::Gif => ("gif", "image/gif"),
            image::ImageFormat::WebP => ("webp", "image/webp"),
            _ => {
                return Err(AppError::validation(
                    "Unsupported image format. Use PNG, JPEG, GIF, or WebP.",
                ));
            }
        };

        let path = format!("proofs/{}/{}.{}", user_id, Uuid::new_v4(), ext);
        let size_bytes = data.len() as u64;
        self.provider.write(&path, data).await?;

        info!(user_id = %user_id, path, size_bytes, "Stored proof image");
        Ok(StoredProof {
            url: self.public_url(&path),
            path,
            content_type: content_type.to_string(),
            size_bytes,
        })
    }

    /// Open a stored proof for streaming, scoped to its owner.
    pub async fn open(&self, user_id: Uuid, path: &str) -> AppResult<(ByteStream, String)> {
        self.authorize(user_id, path)?;
        let stream = self.provider.read(path).await?;
        Ok((stream, content_type_for(path)))
    }

    /// Delete a stored proof, scoped to its owner.
    pub async fn delete(&self, user_id: Uuid, path: &str) -> AppResult<()> {
        self.authorize(user_id, path)?;
        self.provider.delete(path).await
    }

    /// Reject paths outside the user's proof directory. The request path
    /// is attacker-controlled, so a prefix check alone is not enough:
    /// `..` components could re-anchor it into another user's directory
    /// or outside the storage root.
    fn authorize(&self, user_id: Uuid, path: &str) -> AppResult<()> {
        let traversal = std::path::Path::new(path)
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)));
        if traversal || !path.starts_with(&format!("proofs/{user_id}/")) {
            return Err(AppError::not_found(format!("Proof not found: {path}")));
        }
        Ok(())
    }

    /// Public URL for a stored proof path.
    pub fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url, path.trim_start_matches('/'))
    }
}

/// Content type from a stored proof's extension. Extensions are assigned
/// by [`ProofStore::store`], so unknown ones do not occur in practice.
fn content_type_for(path: &str) -> String {
    let content_type = match path.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };
    content_type.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::LocalStorageProvider;

    // Smallest valid 1x1 PNG.
    const PNG_BYTES: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x62, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    async fn store() -> (tempfile::TempDir, ProofStore) {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let config = StorageConfig {
            data_root: dir.path().to_str().unwrap().to_string(),
            max_upload_size_bytes: 1024,
            public_base_url: "http://localhost:8080/api/proofs".to_string(),
        };
        (dir, ProofStore::new(Arc::new(provider), &config))
    }

    #[tokio::test]
    async fn test_store_sniffs_png() {
        let (_dir, store) = store().await;
        let user_id = Uuid::new_v4();

        let proof = store.store(user_id, Bytes::from_static(PNG_BYTES)).await.unwrap();
        assert!(proof.path.starts_with(&format!("proofs/{user_id}/")));
        assert!(proof.path.ends_with(".png"));
        assert_eq!(proof.content_type, "image/png");
        assert!(proof.url.starts_with("http://localhost:8080/api/proofs/proofs/"));
    }

    #[tokio::test]
    async fn test_store_rejects_non_image() {
        let (_dir, store) = store().await;
        let err = store
            .store(Uuid::new_v4(), Bytes::from_static(b"not an image at all"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, habitflow_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_open_is_owner_scoped() {
        let (_dir, store) = store().await;
        let owner = Uuid::new_v4();
        let proof = store.store(owner, Bytes::from_static(PNG_BYTES)).await.unwrap();

        assert!(store.open(owner, &proof.path).await.is_ok());
        assert!(store.open(Uuid::new_v4(), &proof.path).await.is_err());
    }

    #[tokio::test]
    async fn test_open_rejects_parent_components() {
        let (_dir, store) = store().await;
        let victim = Uuid::new_v4();
        let attacker = Uuid::new_v4();
        let proof = store
            .store(victim, Bytes::from_static(PNG_BYTES))
            .await
            .unwrap();

        // Prefix-check bypass: anchored under the attacker's directory
        // but re-anchored into the victim's via `..`.
        let file_name = proof.path.rsplit('/').next().unwrap();
        let dodged = format!("proofs/{attacker}/../../proofs/{victim}/{file_name}");
        let err = store.open(attacker, &dodged).await.err().unwrap();
        assert_eq!(err.kind, habitflow_core::error::ErrorKind::NotFound);

        // Escape of the storage root entirely.
        let escape = format!("proofs/{attacker}/../../../etc/passwd");
        assert!(store.open(attacker, &escape).await.is_err());
        assert!(store.delete(attacker, &escape).await.is_err());
    }
}
