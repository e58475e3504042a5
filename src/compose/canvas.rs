//! Canvas allocation and blitting.

use image::{imageops, DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::Result;
use crate::types::Background;

use super::{LayoutMode, LayoutPlan};

/// Compose images onto a single canvas according to the layout mode.
///
/// Images are pasted in input order as opaque overwrites: source pixels
/// fully replace canvas pixels inside the pasted rectangle, with no alpha
/// blending. Inputs are not mutated or retained; the returned canvas is
/// newly allocated.
///
/// # Errors
///
/// Returns `FuseError::EmptyInput` when `images` is empty.
pub fn compose(
    images: &[DynamicImage],
    mode: LayoutMode,
    spacing: u32,
    background: Background,
) -> Result<DynamicImage> {
    let sizes: Vec<(u32, u32)> = images.iter().map(|i| (i.width(), i.height())).collect();
    let plan = LayoutPlan::compute(mode, &sizes, spacing)?;

    let mut canvas = new_canvas(plan.width, plan.height, background);
    for (image, placement) in images.iter().zip(&plan.placements) {
        imageops::replace(
            &mut canvas,
            image,
            i64::from(placement.x),
            i64::from(placement.y),
        );
    }

    Ok(canvas)
}

/// Allocate the output canvas.
///
/// A transparent background yields an RGBA canvas with every pixel fully
/// transparent; a solid background yields an RGB canvas filled uniformly
/// with that colour.
fn new_canvas(width: u32, height: u32, background: Background) -> DynamicImage {
    match background {
        Background::Transparent => {
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])))
        }
        Background::Solid(colour) => {
            DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(colour.to_rgb())))
        }
    }
}
