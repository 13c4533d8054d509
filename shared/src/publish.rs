use bytes::Bytes;

use crate::config::Config;
use crate::error::ResizeError;
use crate::storage::ObjectStore;
use crate::transform::OUTPUT_CONTENT_TYPE;

/// Downstream caches may hold a derived image for one day.
pub const CACHE_CONTROL: &str = "max-age=86400";

/// Where a derived image landed and where to send the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    pub published_key: String,
    pub redirect_location: String,
}

/// Write the transformed bytes at the verbatim request key.
///
/// The destination is exactly the key the caller asked for, so a front door
/// that checks object existence can serve repeat requests straight from
/// storage without re-invoking this pipeline. Duplicate requests may race
/// on the same key; output is deterministic, so last-writer-wins is fine.
pub async fn publish(
    store: &dyn ObjectStore,
    config: &Config,
    request_key: &str,
    body: Vec<u8>,
) -> Result<PublishResult, ResizeError> {
    store
        .put(
            request_key,
            Bytes::from(body),
            OUTPUT_CONTENT_TYPE,
            CACHE_CONTROL,
        )
        .await
        .map_err(|e| ResizeError::PublishError(e.to_string()))?;

    Ok(PublishResult {
        published_key: request_key.to_string(),
        redirect_location: format!("{}/{}", config.public_base_url, request_key),
    })
}
