use std::env;

use crate::error::ConfigError;
use crate::policy::AllowedResolutions;

/// Process-wide configuration, read once at startup and immutable for the
/// lifetime of the process. Pipeline stages receive it by reference and
/// never read the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket holding both originals and derived images.
    pub bucket: String,
    /// Public base URL the redirect points at.
    pub public_base_url: String,
    /// Prefix under which original assets live.
    pub original_prefix: String,
    pub allowed_resolutions: AllowedResolutions,
}

impl Config {
    pub fn new(
        bucket: impl Into<String>,
        public_base_url: impl Into<String>,
        original_prefix: impl Into<String>,
        allowed_resolutions: AllowedResolutions,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            public_base_url: public_base_url.into(),
            original_prefix: original_prefix.into(),
            allowed_resolutions,
        }
    }

    /// Build the configuration from the environment.
    ///
    /// Required variables: `BUCKET`, `URL`, `ORIGINAL_PREFIX`.
    /// Optional: `ALLOWED_RESOLUTIONS` (comma-separated; absent means no
    /// restriction).
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket = require("BUCKET")?;
        let public_base_url = require("URL")?;
        let original_prefix = require("ORIGINAL_PREFIX")?;
        let allowed = env::var("ALLOWED_RESOLUTIONS").ok();

        Ok(Self {
            bucket,
            public_base_url,
            original_prefix,
            allowed_resolutions: AllowedResolutions::from_list(allowed.as_deref()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar { name })
}
