//! Amazon S3 avatar storage (enabled with the `s3` cargo feature).

use async_trait::async_trait;
use aws_sdk_s3 as aws_s3;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, info};

use signet_core::errors::DomainError;
use signet_core::services::storage::AvatarStorageTrait;
use signet_shared::config::StorageConfig;

/// Stores avatars as objects in an S3 bucket
#[derive(Debug, Clone)]
pub struct S3AvatarStorage {
    client: aws_s3::Client,
    bucket: String,
    region: String,
}

impl S3AvatarStorage {
    /// Create a storage backed by the configured bucket.
    ///
    /// Credentials come from the standard AWS provider chain.
    pub async fn new(config: &StorageConfig) -> Result<Self, DomainError> {
        let bucket = config.s3_bucket.clone().ok_or_else(|| DomainError::Internal {
            message: "AVATAR_S3_BUCKET not configured".to_string(),
        })?;
        let region = config.s3_region.clone().ok_or_else(|| DomainError::Internal {
            message: "AVATAR_S3_REGION not configured".to_string(),
        })?;

        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_s3::config::Region::new(region.clone()))
            .load()
            .await;

        info!(%bucket, %region, "S3 avatar storage initialized");

        Ok(Self {
            client: aws_s3::Client::new(&aws_config),
            bucket,
            region,
        })
    }
}

fn s3_err(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: format!("{context}: {e}"),
    }
}

#[async_trait]
impl AvatarStorageTrait for S3AvatarStorage {
    async fn store(
        &self,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), DomainError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(content.to_vec()))
            .send()
            .await
            .map_err(|e| s3_err("S3 upload failed", e))?;

        debug!(%key, "avatar uploaded to S3");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| s3_err("S3 delete failed", e))?;

        Ok(())
    }

    fn url(&self, key: &str) -> String {
        format!("https://{}.s3.{}.amazonaws.com/{}", self.bucket, self.region, key)
    }
}
