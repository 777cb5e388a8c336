//! Object storage for re-hosted Discord attachments.
//!
//! Discord CDN URLs expire, so attachment files are copied into an S3 compatible
//! bucket (Cloudflare R2 in production) under a stable key.

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};

use crate::server::{config::Config, error::storage::StorageError};

/// Cache header for re-hosted files; keys never change content.
pub const ATTACHMENT_CACHE_CONTROL: &str = "public, max-age=31536000";

#[async_trait]
pub trait AttachmentStorage: Send + Sync {
    /// Downloads `source_url` and stores it under `key`.
    async fn rehost(
        &self,
        source_url: &str,
        key: &str,
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    /// Removes the object stored under `key`.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// `AttachmentStorage` backed by an S3 compatible bucket.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    http: reqwest::Client,
    bucket: String,
}

impl S3Storage {
    /// Creates a client for the R2 endpoint configured in the environment.
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        let credentials = Credentials::new(
            &config.r2_access_key_id,
            &config.r2_secret_access_key,
            None,
            None,
            "paladin-env",
        );
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&config.r2_s3_endpoint)
            .region(Region::new("auto"))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            http,
            bucket: config.r2_bucket_name.clone(),
        }
    }
}

#[async_trait]
impl AttachmentStorage for S3Storage {
    async fn rehost(
        &self,
        source_url: &str,
        key: &str,
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        let download = |source: reqwest::Error| StorageError::Download {
            url: source_url.to_string(),
            source,
        };

        let body = self
            .http
            .get(source_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(download)?
            .bytes()
            .await
            .map_err(download)?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body.to_vec()))
            .set_content_type(content_type.map(str::to_string))
            .cache_control(ATTACHMENT_CACHE_CONTROL)
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Re-hosted {} as {}", source_url, key);

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
