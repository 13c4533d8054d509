use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;

use crate::error::StorageError;

/// Storage seam for the pipeline. A store addresses one bucket; keys
/// address objects within it. The pipeline only ever talks to this trait,
/// so tests can run against an in-memory implementation.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object's bytes.
    async fn get(&self, key: &str) -> Result<Bytes, StorageError>;

    /// List object keys under a prefix, in the backend's listing order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;

    /// Write an object with content-type and cache-control metadata.
    async fn put(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
        cache_control: &str,
    ) -> Result<(), StorageError>;
}

/// S3-backed store. `list` returns keys in ascending UTF-8 binary order,
/// which is what list_objects_v2 guarantees.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, key: &str) -> Result<Bytes, StorageError> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_no_such_key() {
                    StorageError::NotFound {
                        key: key.to_string(),
                    }
                } else {
                    StorageError::Internal(service.to_string())
                }
            })?;

        let data = result
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        Ok(data.into_bytes())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let result = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .send()
            .await
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        Ok(result
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(String::from))
            .collect())
    }

    async fn put(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
        cache_control: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .cache_control(cache_control)
            .send()
            .await
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        Ok(())
    }
}
