//! Cut a score box out of the straightened table image

use crate::error::{ScoreError, ScoreResult};
use foosball_core::Quad;
use image::{imageops, RgbImage};

/// Crop the axis-aligned bounds of `quad` and turn it so the markers read
/// left to right.
///
/// The crop is transposed and flipped vertically, which is the same as a
/// quarter turn counter-clockwise.
pub fn crop(image: &RgbImage, quad: &Quad) -> ScoreResult<RgbImage> {
    let (top_left, bottom_right) = quad.bounds();
    let (width, height) = image.dimensions();

    let x1 = top_left.x.clamp(0, width as i32) as u32;
    let y1 = top_left.y.clamp(0, height as i32) as u32;
    let x2 = bottom_right.x.clamp(0, width as i32) as u32;
    let y2 = bottom_right.y.clamp(0, height as i32) as u32;

    let crop_width = x2.saturating_sub(x1);
    let crop_height = y2.saturating_sub(y1);
    if crop_width == 0 || crop_height == 0 {
        return Err(ScoreError::EmptyCrop {
            width: crop_width,
            height: crop_height,
        });
    }

    log::debug!("Cropping {crop_width}x{crop_height} at ({x1}, {y1})");

    let region = imageops::crop_imm(image, x1, y1, crop_width, crop_height).to_image();
    Ok(imageops::rotate270(&region))
}
