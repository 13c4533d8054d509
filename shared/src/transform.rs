use image::{imageops::FilterType, ImageFormat};
use std::io::Cursor;

use crate::error::ResizeError;

/// The one resolution that crops to fill its box instead of fitting inside.
pub const CROP_RESOLUTION: &str = "150x100";

/// MIME type of the canonical output encoding.
pub const OUTPUT_CONTENT_TYPE: &str = "image/png";

/// How a source image maps into the target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Scale to fill the box, cropping overflow, centered.
    Cover,
    /// Scale to fit inside the box without cropping. No padding is added,
    /// so the output may be smaller than the box along one axis.
    Contain,
}

impl FitMode {
    /// Fit policy is keyed on the literal resolution token.
    pub fn for_resolution(resolution: &str) -> Self {
        if resolution == CROP_RESOLUTION {
            FitMode::Cover
        } else {
            FitMode::Contain
        }
    }
}

/// Decode `data`, resize into the `width`x`height` box per `fit`, and
/// re-encode as PNG regardless of the source format. Pure in-memory, no
/// storage knowledge.
pub fn transform(
    data: &[u8],
    width: u32,
    height: u32,
    fit: FitMode,
) -> Result<Vec<u8>, ResizeError> {
    let img = image::load_from_memory(data).map_err(|e| ResizeError::DecodeError(e.to_string()))?;

    // Lanczos3 for quality, matching the rest of our image tooling
    let resized = match fit {
        FitMode::Cover => img.resize_to_fill(width, height, FilterType::Lanczos3),
        FitMode::Contain => img.resize(width, height, FilterType::Lanczos3),
    };

    let mut buf = Cursor::new(Vec::new());
    resized
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| ResizeError::TransformError(e.to_string()))?;

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Jpeg).unwrap();
        buf.into_inner()
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_fit_mode_selection() {
        assert_eq!(FitMode::for_resolution("150x100"), FitMode::Cover);
        assert_eq!(FitMode::for_resolution("300x200"), FitMode::Contain);
        assert_eq!(FitMode::for_resolution("100x150"), FitMode::Contain);
    }

    #[test]
    fn test_cover_fills_the_box() {
        // Square source into a wide box: cover crops to exact dimensions
        let out = transform(&jpeg_bytes(600, 600), 150, 100, FitMode::Cover).unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (150, 100));
    }

    #[test]
    fn test_contain_fits_without_cropping() {
        // Square source into a 300x200 box: constrained by height, no padding
        let out = transform(&jpeg_bytes(600, 600), 300, 200, FitMode::Contain).unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (200, 200));
    }

    #[test]
    fn test_contain_exact_aspect_match() {
        let out = transform(&jpeg_bytes(600, 400), 300, 200, FitMode::Contain).unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 200));
    }

    #[test]
    fn test_output_is_png_regardless_of_input() {
        const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];

        let from_jpeg = transform(&jpeg_bytes(100, 100), 50, 50, FitMode::Contain).unwrap();
        assert_eq!(&from_jpeg[..4], PNG_MAGIC);

        let from_png = transform(&png_bytes(100, 100), 50, 50, FitMode::Contain).unwrap();
        assert_eq!(&from_png[..4], PNG_MAGIC);
    }

    #[test]
    fn test_undecodable_bytes_is_decode_error() {
        let result = transform(b"definitely not an image", 100, 100, FitMode::Contain);
        assert!(matches!(result, Err(ResizeError::DecodeError(_))));
    }
}
