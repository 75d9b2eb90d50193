//! Object storage REST client.
//!
//! Uploads go to `POST {url}/storage/v1/object/{bucket}/{name}` authenticated
//! with the service key; the bucket is public, so reads need no credentials.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};
use url::Url;

use super::error::StorageError;
use crate::config::StorageConfig;

/// Client for the product-images bucket.
#[derive(Clone)]
pub struct StorageClient {
    /// HTTP client.
    client: Client,
    /// Storage base URL.
    base_url: Url,
    /// Service key for authenticated uploads.
    service_key: SecretString,
    /// Target bucket.
    bucket: String,
}

impl std::fmt::Debug for StorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageClient")
            .field("base_url", &self.base_url.as_str())
            .field("service_key", &"[REDACTED]")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

impl StorageClient {
    /// Create a new storage client.
    #[must_use]
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.clone(),
            service_key: config.service_key.clone(),
            bucket: config.bucket.clone(),
        }
    }

    /// Bucket this client writes to.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Public URL of an object in the bucket.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidName` if the name cannot form a URL.
    pub fn public_url(&self, name: &str) -> Result<String, StorageError> {
        self.object_url(&["storage", "v1", "object", "public", &self.bucket, name])
            .map(String::from)
    }

    fn object_url(&self, segments: &[&str]) -> Result<Url, StorageError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StorageError::InvalidName(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Upload an object and return its public URL.
    ///
    /// With `upsert` set, an existing object of the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or storage rejects the upload.
    #[instrument(skip(self, bytes), fields(bucket = %self.bucket, size = bytes.len()))]
    pub async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<String, StorageError> {
        if name.is_empty() || name.contains('/') {
            return Err(StorageError::InvalidName(name.to_string()));
        }

        let url = self.object_url(&["storage", "v1", "object", &self.bucket, name])?;
        let key = self.service_key.expose_secret();

        let response = self
            .client
            .post(url)
            .bearer_auth(key)
            .header("apikey", key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %message, "Storage rejected upload");
            return Err(StorageError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(object = %name, "Object uploaded");
        self.public_url(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::tests::test_storage;

    #[test]
    fn test_public_url() {
        let client = StorageClient::new(&test_storage());
        assert_eq!(
            client.public_url("1700000000000-abc1234.png").unwrap(),
            "https://storage.padoca.test/storage/v1/object/public/product-images/1700000000000-abc1234.png"
        );
    }

    #[test]
    fn test_public_url_with_trailing_slash_base() {
        let mut config = test_storage();
        config.url = Url::parse("https://storage.padoca.test/").unwrap();
        let client = StorageClient::new(&config);
        assert_eq!(
            client.public_url("padoca_logo.png").unwrap(),
            "https://storage.padoca.test/storage/v1/object/public/product-images/padoca_logo.png"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = StorageClient::new(&test_storage());
        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("eyJhbGciOiJIUzI1NiJ9"));
    }

    #[tokio::test]
    async fn test_upload_rejects_nested_name() {
        let client = StorageClient::new(&test_storage());
        let result = client.upload("a/b.png", vec![1], "image/png", false).await;
        assert!(matches!(result, Err(StorageError::InvalidName(_))));
    }
}
