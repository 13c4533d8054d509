use crate::config::Config;
use crate::error::ResizeError;
use crate::key;
use crate::publish::{self, PublishResult};
use crate::resolve;
use crate::storage::ObjectStore;
use crate::transform::{self, FitMode};

/// Run the request-to-derived-artifact pipeline for one key:
/// parse → policy → resolve → fetch → transform → publish.
///
/// Stages run strictly in sequence and short-circuit on the first failure.
/// No storage I/O happens before the key has parsed and passed the
/// resolution policy. The caller maps the error to a response.
pub async fn resize(
    store: &dyn ObjectStore,
    config: &Config,
    raw_key: &str,
) -> Result<PublishResult, ResizeError> {
    let spec = key::parse_key(raw_key)?;
    config.allowed_resolutions.check(&spec.resolution)?;

    let source =
        resolve::resolve_source(store, &config.original_prefix, &spec.original_path).await?;

    tracing::info!(key = %raw_key, source = %source.storage_key, "fetching source object");
    let data = store.get(&source.storage_key).await?;

    let fit = FitMode::for_resolution(&spec.resolution);
    let derived = transform::transform(&data, spec.width, spec.height, fit)?;

    publish::publish(store, config, raw_key, derived).await
}
