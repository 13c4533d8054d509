pub mod config;
pub mod error;
pub mod key;
pub mod pipeline;
pub mod policy;
pub mod publish;
pub mod resolve;
pub mod storage;
pub mod transform;

pub use config::Config;
pub use error::{ConfigError, ResizeError, StorageError};
pub use key::ResizeSpec;
pub use policy::AllowedResolutions;
pub use publish::PublishResult;
pub use resolve::ResolvedSource;
pub use storage::{ObjectStore, S3ObjectStore};

use std::sync::Arc;

/// Shared application state. The store is held behind the `ObjectStore`
/// trait so handlers can be driven by an in-memory store in tests.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ObjectStore>) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
