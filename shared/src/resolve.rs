use crate::error::ResizeError;
use crate::storage::ObjectStore;

/// The source object actually present in storage. May differ from the
/// requested path when the stored original carries a different extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub storage_key: String,
}

/// Locate the original asset for `original_path` under `original_prefix`.
///
/// The request key always ends in `.jpg`, but the stored original may not,
/// so exact-key existence is never assumed. Instead the trailing `.jpg` is
/// stripped from the nominal key and storage is listed under the remaining
/// prefix. The first listed key wins; with S3 that is the lowest key in
/// ascending UTF-8 binary order. An empty listing means the asset does not
/// exist.
pub async fn resolve_source(
    store: &dyn ObjectStore,
    original_prefix: &str,
    original_path: &str,
) -> Result<ResolvedSource, ResizeError> {
    let nominal = format!("{}/{}", original_prefix, original_path);
    let search_prefix = nominal.strip_suffix(".jpg").unwrap_or(&nominal);

    let keys = store.list(search_prefix).await?;
    match keys.into_iter().next() {
        Some(storage_key) => Ok(ResolvedSource { storage_key }),
        None => Err(ResizeError::SourceNotFound {
            prefix: search_prefix.to_string(),
        }),
    }
}
