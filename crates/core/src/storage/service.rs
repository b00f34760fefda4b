//! Logo store implementation using Apache OpenDAL.

use opendal::{ErrorKind, Operator, services};
use uuid::Uuid;

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;

/// Maximum accepted logo size: 2 MiB.
pub const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

/// Key extensions a logo can be stored under.
const LOGO_EXTENSIONS: [&str; 3] = ["png", "jpg", "webp"];

/// Stores and retrieves company logo assets.
///
/// One logo per owner; re-uploading overwrites the previous asset under a
/// content-type-specific key.
pub struct LogoStore {
    operator: Operator,
}

impl std::fmt::Debug for LogoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoStore").finish_non_exhaustive()
    }
}

impl LogoStore {
    /// Creates a logo store from configuration.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Configuration` if the provider cannot be
    /// initialized.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator })
    }

    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::Configuration("invalid path".into()))?,
                );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::Configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::Configuration(e.to_string()))?
                    .finish())
            }
        }
    }

    /// Stores a logo for an owner, returning the storage key.
    ///
    /// # Errors
    ///
    /// Rejects unsupported content types and oversized uploads before
    /// touching the backend.
    pub async fn put_logo(
        &self,
        owner_id: Uuid,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let ext = extension_for(content_type)
            .ok_or_else(|| StorageError::UnsupportedContentType(content_type.to_string()))?;
        if bytes.len() > MAX_LOGO_BYTES {
            return Err(StorageError::TooLarge {
                limit: MAX_LOGO_BYTES,
            });
        }

        let key = format!("logos/{owner_id}.{ext}");
        self.operator
            .write(&key, bytes)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        // Drop stale assets left under another extension; otherwise a
        // re-upload with a new content type leaks the previous object.
        for other in LOGO_EXTENSIONS.iter().filter(|other| **other != ext) {
            self.operator
                .delete(&format!("logos/{owner_id}.{other}"))
                .await
                .map_err(|e| StorageError::Backend(e.to_string()))?;
        }

        Ok(key)
    }

    /// Reads a stored logo by key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the key does not exist.
    pub async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.operator
            .read(key)
            .await
            .map(|buffer| buffer.to_vec())
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    StorageError::NotFound(key.to_string())
                } else {
                    StorageError::Backend(e.to_string())
                }
            })
    }
}

/// Maps an accepted image content type to its key extension.
fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Returns the content type for a stored logo key.
#[must_use]
pub fn content_type_for(key: &str) -> &'static str {
    if key.ends_with(".png") {
        "image/png"
    } else if key.ends_with(".jpg") {
        "image/jpeg"
    } else if key.ends_with(".webp") {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fs_store(root: PathBuf) -> LogoStore {
        LogoStore::from_config(&StorageConfig {
            provider: StorageProvider::LocalFs { root },
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_put_and_read_logo() {
        let dir = std::env::temp_dir().join(format!("cotiza-logo-{}", Uuid::new_v4()));
        let store = fs_store(dir.clone());
        let owner_id = Uuid::new_v4();

        let key = store
            .put_logo(owner_id, "image/png", vec![0x89, b'P', b'N', b'G'])
            .await
            .unwrap();
        assert_eq!(key, format!("logos/{owner_id}.png"));

        let bytes = store.read(&key).await.unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_reupload_with_new_type_removes_old_asset() {
        let dir = std::env::temp_dir().join(format!("cotiza-logo-{}", Uuid::new_v4()));
        let store = fs_store(dir.clone());
        let owner_id = Uuid::new_v4();

        let png_key = store
            .put_logo(owner_id, "image/png", vec![1, 2, 3])
            .await
            .unwrap();
        let jpg_key = store
            .put_logo(owner_id, "image/jpeg", vec![4, 5, 6])
            .await
            .unwrap();

        assert_eq!(store.read(&jpg_key).await.unwrap(), vec![4, 5, 6]);
        assert!(matches!(
            store.read(&png_key).await,
            Err(StorageError::NotFound(_))
        ));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_unsupported_content_type_rejected() {
        let dir = std::env::temp_dir().join(format!("cotiza-logo-{}", Uuid::new_v4()));
        let store = fs_store(dir);

        let result = store
            .put_logo(Uuid::new_v4(), "application/pdf", vec![1, 2, 3])
            .await;
        assert!(matches!(
            result,
            Err(StorageError::UnsupportedContentType(_))
        ));
    }

    #[tokio::test]
    async fn test_oversized_logo_rejected() {
        let dir = std::env::temp_dir().join(format!("cotiza-logo-{}", Uuid::new_v4()));
        let store = fs_store(dir);

        let result = store
            .put_logo(Uuid::new_v4(), "image/png", vec![0; MAX_LOGO_BYTES + 1])
            .await;
        assert!(matches!(result, Err(StorageError::TooLarge { .. })));
    }

    #[tokio::test]
    async fn test_read_missing_key() {
        let dir = std::env::temp_dir().join(format!("cotiza-logo-{}", Uuid::new_v4()));
        let store = fs_store(dir);

        let result = store.read("logos/does-not-exist.png").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_content_type_for_key() {
        assert_eq!(content_type_for("logos/a.png"), "image/png");
        assert_eq!(content_type_for("logos/a.jpg"), "image/jpeg");
        assert_eq!(content_type_for("logos/a.webp"), "image/webp");
    }
}
