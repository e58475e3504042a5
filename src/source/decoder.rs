//! Image decoding with colour-mode normalization.

use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::{FuseError, Result};

/// What to do with source alpha channels on decode.
///
/// `Discard` converts every image to RGB, so per-image transparency never
/// reaches the canvas. `Preserve` keeps RGBA for sources that carry alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    #[default]
    Discard,
    Preserve,
}

/// Decode an image file and normalize its colour mode.
///
/// # Errors
///
/// Returns `FuseError::Decode` when the file cannot be opened or parsed,
/// carrying the path and the underlying cause.
pub fn decode(path: &Path, alpha: AlphaMode) -> Result<DynamicImage> {
    let image = ImageReader::open(path)
        .map_err(|e| FuseError::Decode {
            path: path.to_path_buf(),
            message: format!("cannot open file: {e}"),
        })?
        .with_guessed_format()
        .map_err(|e| FuseError::Decode {
            path: path.to_path_buf(),
            message: format!("cannot read header: {e}"),
        })?
        .decode()
        .map_err(|e| FuseError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(match alpha {
        AlphaMode::Discard => DynamicImage::ImageRgb8(image.to_rgb8()),
        AlphaMode::Preserve => {
            if image.color().has_alpha() {
                DynamicImage::ImageRgba8(image.to_rgba8())
            } else {
                DynamicImage::ImageRgb8(image.to_rgb8())
            }
        }
    })
}
