//! Image loading, saving and annotation helpers

use crate::Result;
use anyhow::Context;
use foosball_core::Point;
use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_circle_mut;
use std::path::Path;

const MARKER_RADIUS: i32 = 10;
const MARKER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Image utility functions
pub struct ImageUtils;

impl ImageUtils {
    /// Load any supported format as 8-bit RGB
    pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?;
        Ok(img.to_rgb8())
    }

    pub fn save_rgb<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
        image
            .save(&path)
            .with_context(|| format!("Failed to save image: {:?}", path.as_ref()))
    }

    pub fn save_gray<P: AsRef<Path>>(image: &GrayImage, path: P) -> Result<()> {
        image
            .save(&path)
            .with_context(|| format!("Failed to save image: {:?}", path.as_ref()))
    }

    /// Copy of `image` with a hollow circle around every point
    pub fn draw_points(image: &RgbImage, points: &[Point]) -> RgbImage {
        let mut out = image.clone();
        for p in points {
            draw_hollow_circle_mut(&mut out, (p.x, p.y), MARKER_RADIUS, MARKER_COLOR);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_points_marks_circle() {
        let image = RgbImage::new(50, 50);
        let out = ImageUtils::draw_points(&image, &[Point::new(25, 25)]);

        assert_eq!(out.get_pixel(35, 25), &MARKER_COLOR);
        assert_eq!(out.get_pixel(25, 25), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(35, 25), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = ImageUtils::load_rgb("does/not/exist.png").unwrap_err();
        assert!(err.to_string().contains("Failed to open image"));
    }
}
