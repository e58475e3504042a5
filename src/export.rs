//! Composite encoding: format selection, quality mapping, and file output.

use std::fmt;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{FuseError, Result};

/// Output file format for the composed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
    #[value(name = "webp")]
    WebP,
}

impl OutputFormat {
    /// Infer the format from a destination path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPEG"),
            Self::WebP => write!(f, "WebP"),
        }
    }
}

/// Encode a composed image to `path`.
///
/// `quality` must be in `[1, 100]`. PNG output is always lossless: quality
/// never alters pixel fidelity, and an RGBA canvas selects maximum
/// compression effort. JPEG cannot carry alpha, so RGBA input is flattened
/// to RGB before encoding. WebP applies `quality` as a lossy control and
/// keeps alpha.
///
/// # Errors
///
/// Returns `FuseError::Config` for out-of-range quality, and
/// `FuseError::Encode` when the destination cannot be written or the codec
/// fails, carrying the path and cause.
pub fn encode(image: &DynamicImage, path: &Path, format: OutputFormat, quality: u8) -> Result<()> {
    if !(1..=100).contains(&quality) {
        return Err(FuseError::Config {
            message: format!("Quality must be between 1 and 100, got {quality}"),
            help: None,
        });
    }

    match format {
        OutputFormat::Png => encode_png(image, path),
        OutputFormat::Jpeg => encode_jpeg(image, path, quality),
        OutputFormat::WebP => encode_webp(image, path, quality),
    }
}

fn open_destination(path: &Path) -> Result<BufWriter<fs::File>> {
    let file = fs::File::create(path).map_err(|e| FuseError::Encode {
        path: path.to_path_buf(),
        message: format!("cannot create file: {e}"),
    })?;
    Ok(BufWriter::new(file))
}

fn encode_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let compression = if image.color().has_alpha() {
        CompressionType::Best
    } else {
        CompressionType::Default
    };

    let writer = open_destination(path)?;
    let encoder = PngEncoder::new_with_quality(writer, compression, FilterType::Adaptive);
    image.write_with_encoder(encoder).map_err(|e| FuseError::Encode {
        path: path.to_path_buf(),
        message: format!("PNG encoding failed: {e}"),
    })
}

fn encode_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    // JPEG has no alpha channel; flatten RGBA input to RGB.
    let rgb = image.to_rgb8();

    let writer = open_destination(path)?;
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    rgb.write_with_encoder(encoder).map_err(|e| FuseError::Encode {
        path: path.to_path_buf(),
        message: format!("JPEG encoding failed: {e}"),
    })
}

fn encode_webp(image: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let encoder = webp::Encoder::from_image(image).map_err(|message| FuseError::Encode {
        path: path.to_path_buf(),
        message: message.to_string(),
    })?;

    let data = encoder.encode(f32::from(quality));
    fs::write(path, &*data).map_err(|e| FuseError::Encode {
        path: path.to_path_buf(),
        message: format!("cannot write file: {e}"),
    })
}

/// Pick a destination that does not collide with an existing file.
///
/// Appends `_1`, `_2`, ... before the extension until the name is free.
pub fn unique_destination(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = path.extension().and_then(|e| e.to_str());

    let mut counter = 1u32;
    loop {
        let name = match ext {
            Some(ext) => format!("{stem}_{counter}.{ext}"),
            None => format!("{stem}_{counter}"),
        };
        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    use super::*;

    fn rgb_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, Rgb([200, 100, 50])))
    }

    fn rgba_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 3, Rgba([200, 100, 50, 0])))
    }

    #[test]
    fn test_from_path_inference() {
        assert_eq!(OutputFormat::from_path(Path::new("out.png")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("out.JPG")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_path(Path::new("out.jpeg")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_path(Path::new("out.webp")), Some(OutputFormat::WebP));
        assert_eq!(OutputFormat::from_path(Path::new("out.bmp")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_quality_out_of_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        let result = encode(&rgb_image(), &path, OutputFormat::Jpeg, 0);
        assert!(matches!(result, Err(FuseError::Config { .. })));
        assert!(!path.exists());

        let result = encode(&rgb_image(), &path, OutputFormat::Jpeg, 101);
        assert!(matches!(result, Err(FuseError::Config { .. })));
    }

    #[test]
    fn test_png_roundtrip_preserves_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        encode(&rgb_image(), &path, OutputFormat::Png, 90).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (4, 3));
    }

    #[test]
    fn test_png_keeps_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        encode(&rgba_image(), &path, OutputFormat::Png, 90).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_jpeg_flattens_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flat.jpg");

        encode(&rgba_image(), &path, OutputFormat::Jpeg, 85).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (4, 3));
        assert!(!back.color().has_alpha());
    }

    #[test]
    fn test_webp_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.webp");

        encode(&rgb_image(), &path, OutputFormat::WebP, 75).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (4, 3));
    }

    #[test]
    fn test_encode_to_unwritable_path() {
        let result = encode(
            &rgb_image(),
            Path::new("/nonexistent/dir/out.png"),
            OutputFormat::Png,
            90,
        );
        assert!(matches!(result, Err(FuseError::Encode { .. })));
    }

    #[test]
    fn test_unique_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("merged.png");

        // Nothing exists yet: the path is used as-is.
        assert_eq!(unique_destination(&path), path);

        std::fs::write(&path, b"").unwrap();
        let next = unique_destination(&path);
        assert_eq!(next, dir.path().join("merged_1.png"));

        std::fs::write(&next, b"").unwrap();
        assert_eq!(unique_destination(&path), dir.path().join("merged_2.png"));
    }
}
