use std::collections::HashSet;

use crate::error::ResizeError;

/// Allow-list of resolution tokens, configured once at process start.
/// An empty set permits every resolution.
#[derive(Debug, Clone, Default)]
pub struct AllowedResolutions(HashSet<String>);

impl AllowedResolutions {
    /// Parse a comma-separated list, tolerating whitespace around commas.
    /// `None` or an all-whitespace value yields the empty (allow-all) set.
    pub fn from_list(list: Option<&str>) -> Self {
        let set = list
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        Self(set)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Exact-string membership check on the literal resolution token.
    /// Runs strictly after parsing, so a malformed key never reaches here.
    pub fn check(&self, resolution: &str) -> Result<(), ResizeError> {
        if self.0.is_empty() || self.0.contains(resolution) {
            Ok(())
        } else {
            Err(ResizeError::ResolutionNotAllowed {
                resolution: resolution.to_string(),
            })
        }
    }
}
