//! Center-crop and resize transform
//!
//! Crops a raster to the target aspect ratio by trimming equal margins off
//! one axis, resizes it to the exact target dimensions, and encodes the
//! result as lossy WebP.

use crate::{Error, Result};
use image::{imageops::FilterType, DynamicImage};
use std::ops::Deref;
use webp::Encoder;

/// Pixel rectangle selected by the center crop. `x`/`y` are the top-left
/// corner; the region is left-inclusive, right-exclusive on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the centered crop of a `width` x `height` raster that matches the
/// target aspect ratio as closely as integer rounding allows.
///
/// Sources wider than the target lose width symmetrically and keep full
/// height; sources taller than or matching the target lose height and keep
/// full width. The cropped axis is floored and clamped to at least one pixel
/// so degenerate sources (1x1, 1xN) still yield a valid raster.
pub fn center_crop_region(
    width: u32,
    height: u32,
    target_width: u32,
    target_height: u32,
) -> CropRegion {
    let target_ratio = f64::from(target_width) / f64::from(target_height);
    let img_ratio = f64::from(width) / f64::from(height);

    if img_ratio > target_ratio {
        let new_width = ((target_ratio * f64::from(height)) as u32).max(1);
        let offset = (width - new_width) / 2;
        CropRegion {
            x: offset,
            y: 0,
            width: new_width,
            height,
        }
    } else {
        let new_height = ((f64::from(width) / target_ratio) as u32).max(1);
        let offset = (height - new_height) / 2;
        CropRegion {
            x: 0,
            y: offset,
            width,
            height: new_height,
        }
    }
}

/// Center-crop `img` to the target aspect ratio, then resize to exactly
/// `target_width` x `target_height` with Lanczos resampling.
pub fn crop_and_resize(
    img: &DynamicImage,
    target_width: u32,
    target_height: u32,
) -> DynamicImage {
    let region = center_crop_region(img.width(), img.height(), target_width, target_height);

    img.crop_imm(region.x, region.y, region.width, region.height)
        .resize_exact(target_width, target_height, FilterType::Lanczos3)
}

/// Encode `img` as lossy WebP at the given quality (1-100).
pub fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    // The encoder only accepts 8-bit RGB/RGBA variants, so normalize first.
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    let encoder = Encoder::from_image(&rgba).map_err(|reason| Error::WebPEncode(reason.to_string()))?;

    // WebPMemory is !Send; copy the bytes out before returning.
    Ok(encoder.encode(f32::from(quality)).deref().to_owned())
}
