//! File validation and header probing.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ColorType, GenericImageView, ImageFormat, ImageReader};
use serde::Serialize;

use crate::error::{FuseError, Result};

/// File extensions accepted as image inputs (lowercase, without the dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff"];

/// Check whether a path has a supported image extension.
///
/// Matching is case-insensitive. A path with no extension is not supported.
/// Never fails.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Basic information about an image file.
#[derive(Debug, Clone, Serialize)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub color_mode: String,
    pub size_kb: u64,
}

/// Read an image file's dimensions, container format, colour mode, and
/// on-disk size.
///
/// # Errors
///
/// Returns `FuseError::Decode` when the file cannot be opened or parsed,
/// and `FuseError::Io` when its metadata cannot be read.
pub fn probe(path: &Path) -> Result<ImageInfo> {
    let reader = ImageReader::open(path)
        .map_err(|e| FuseError::Decode {
            path: path.to_path_buf(),
            message: format!("cannot open file: {e}"),
        })?
        .with_guessed_format()
        .map_err(|e| FuseError::Decode {
            path: path.to_path_buf(),
            message: format!("cannot read header: {e}"),
        })?;

    let format = reader.format();
    let image = reader.decode().map_err(|e| FuseError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let size_kb = fs::metadata(path)
        .map_err(|e| FuseError::Io {
            path: path.to_path_buf(),
            message: format!("cannot read metadata: {e}"),
        })?
        .len()
        / 1024;

    Ok(ImageInfo {
        path: path.to_path_buf(),
        width: image.width(),
        height: image.height(),
        format: format_label(format),
        color_mode: colour_label(image.color()).to_string(),
        size_kb,
    })
}

fn format_label(format: Option<ImageFormat>) -> String {
    match format {
        Some(f) => format!("{f:?}").to_uppercase(),
        None => "unknown".to_string(),
    }
}

fn colour_label(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "L16",
        ColorType::La16 => "LA16",
        ColorType::Rgb16 => "RGB16",
        ColorType::Rgba16 => "RGBA16",
        ColorType::Rgb32F => "RGB32F",
        ColorType::Rgba32F => "RGBA32F",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_is_supported_known_extensions() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(is_supported(Path::new(&format!("photo.{ext}"))), "{ext}");
        }
    }

    #[test]
    fn test_is_supported_is_case_insensitive() {
        assert!(is_supported(Path::new("photo.JPG")));
        assert!(is_supported(Path::new("photo.Png")));
    }

    #[test]
    fn test_is_supported_rejects_other_files() {
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("archive.tar.gz")));
        assert!(!is_supported(Path::new("no_extension")));
        assert!(!is_supported(Path::new("")));
    }

    #[test]
    fn test_probe_reads_dimensions_and_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.png");
        RgbImage::from_pixel(3, 2, Rgb([7, 8, 9])).save(&path).unwrap();

        let info = probe(&path).unwrap();
        assert_eq!(info.width, 3);
        assert_eq!(info.height, 2);
        assert_eq!(info.format, "PNG");
        assert_eq!(info.color_mode, "RGB");
    }

    #[test]
    fn test_probe_missing_file() {
        let result = probe(Path::new("/nonexistent/sample.png"));
        assert!(matches!(result, Err(FuseError::Decode { .. })));
    }

    #[test]
    fn test_probe_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not actually a png").unwrap();

        let result = probe(&path);
        assert!(matches!(result, Err(FuseError::Decode { .. })));
    }
}
