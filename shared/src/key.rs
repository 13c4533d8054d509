use regex::Regex;
use std::sync::OnceLock;

use crate::error::ResizeError;

/// A parsed resize request: the target box plus the original asset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSpec {
    pub width: u32,
    pub height: u32,
    /// The literal `WxH` substring from the key. Policy matching uses this
    /// exact text, never a re-derived string.
    pub resolution: String,
    /// The trailing path from the key. The stored original may carry a
    /// different extension; the resolver handles that.
    pub original_path: String,
}

static KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn key_pattern() -> &'static Regex {
    KEY_PATTERN.get_or_init(|| {
        Regex::new(r"^((\d+)x(\d+))/(.+\.jpg)$").expect("key grammar regex is a compile-time bug")
    })
}

/// Parse a raw request key of the form `{width}x{height}/{path}.jpg`.
///
/// The whole key must match the grammar; there are no partial parses.
/// Missing, empty, mismatching, zero-dimension, and out-of-range keys are
/// all `InvalidKey`.
pub fn parse_key(key: &str) -> Result<ResizeSpec, ResizeError> {
    let caps = key_pattern().captures(key).ok_or(ResizeError::InvalidKey)?;

    let width: u32 = caps[2].parse().map_err(|_| ResizeError::InvalidKey)?;
    let height: u32 = caps[3].parse().map_err(|_| ResizeError::InvalidKey)?;
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidKey);
    }

    Ok(ResizeSpec {
        width,
        height,
        resolution: caps[1].to_string(),
        original_path: caps[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_key() {
        let spec = parse_key("300x200/photos/dog.jpg").unwrap();
        assert_eq!(spec.width, 300);
        assert_eq!(spec.height, 200);
        assert_eq!(spec.resolution, "300x200");
        assert_eq!(spec.original_path, "photos/dog.jpg");
    }

    #[test]
    fn test_parse_nested_path() {
        let spec = parse_key("150x100/2024/01/photo-123.jpg").unwrap();
        assert_eq!(spec.resolution, "150x100");
        assert_eq!(spec.original_path, "2024/01/photo-123.jpg");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(parse_key(""), Err(ResizeError::InvalidKey)));
    }

    #[test]
    fn test_missing_resolution_rejected() {
        assert!(matches!(
            parse_key("photos/dog.jpg"),
            Err(ResizeError::InvalidKey)
        ));
    }

    #[test]
    fn test_missing_jpg_suffix_rejected() {
        // Scenario: avatar path with no extension at all
        assert!(matches!(
            parse_key("150x100/avatars/u1"),
            Err(ResizeError::InvalidKey)
        ));
        assert!(matches!(
            parse_key("150x100/avatars/u1.png"),
            Err(ResizeError::InvalidKey)
        ));
    }

    #[test]
    fn test_uppercase_extension_rejected() {
        assert!(matches!(
            parse_key("300x200/photos/dog.JPG"),
            Err(ResizeError::InvalidKey)
        ));
    }

    #[test]
    fn test_anchored_match() {
        assert!(matches!(
            parse_key("x300x200/photos/dog.jpg"),
            Err(ResizeError::InvalidKey)
        ));
        assert!(matches!(
            parse_key("300x200/photos/dog.jpg "),
            Err(ResizeError::InvalidKey)
        ));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            parse_key("0x100/photos/dog.jpg"),
            Err(ResizeError::InvalidKey)
        ));
        assert!(matches!(
            parse_key("100x0/photos/dog.jpg"),
            Err(ResizeError::InvalidKey)
        ));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        // Larger than u32 can hold
        assert!(matches!(
            parse_key("99999999999x100/photos/dog.jpg"),
            Err(ResizeError::InvalidKey)
        ));
    }

    #[test]
    fn test_signed_dimensions_rejected() {
        assert!(matches!(
            parse_key("-300x200/photos/dog.jpg"),
            Err(ResizeError::InvalidKey)
        ));
    }
}
