use thiserror::Error;

/// Pipeline error taxonomy. Every stage fails fast and propagates its error
/// unmodified; the HTTP handler is the only place these map to status codes.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("invalid request key")]
    InvalidKey,

    #[error("resolution not allowed: {resolution}")]
    ResolutionNotAllowed { resolution: String },

    #[error("no source object under prefix: {prefix}")]
    SourceNotFound { prefix: String },

    #[error("failed to decode source image: {0}")]
    DecodeError(String),

    #[error("failed to transform image: {0}")]
    TransformError(String),

    #[error("failed to publish derived image: {0}")]
    PublishError(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Storage access errors, raised by `ObjectStore` implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("storage error: {0}")]
    Internal(String),
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not set")]
    MissingVar { name: &'static str },
}
