//! Color segmentation
//!
//! Turns an RGB image into a binary mask (0 / 255) either by an HSV range or
//! by a luminance cutoff. Which one a scoreboard uses is chosen per region.

use crate::traits::Segmenter;
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::{Deserialize, Serialize};

pub const FOREGROUND: Luma<u8> = Luma([255]);
pub const BACKGROUND: Luma<u8> = Luma([0]);

/// Convert an RGB pixel to 8-bit HSV.
///
/// Hue is stored as degrees / 2 (`0..180`), saturation and value span
/// `0..=255`.
pub fn rgb_to_hsv(pixel: &Rgb<u8>) -> [u8; 3] {
    let [r, g, b] = pixel.0.map(f32::from);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v > 0.0 { (255.0 * diff / v).round() } else { 0.0 };

    let h = if diff == 0.0 {
        0.0
    } else if v == r {
        30.0 * (g - b) / diff
    } else if v == g {
        30.0 * ((b - r) / diff + 2.0)
    } else {
        30.0 * ((r - g) / diff + 4.0)
    };
    let h = if h < 0.0 { h + 180.0 } else { h };
    let h = h.round() as u16 % 180;

    [h as u8, s as u8, v as u8]
}

/// Inclusive per-channel HSV range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub min: [u8; 3],
    pub max: [u8; 3],
}

impl HsvRange {
    pub const fn new(min: [u8; 3], max: [u8; 3]) -> Self {
        Self { min, max }
    }

    /// Table frame.
    pub const fn blue() -> Self {
        Self::new([80, 70, 70], [130, 255, 255])
    }

    /// Lit markers on the left scoreboard.
    pub const fn orange() -> Self {
        Self::new([9, 40, 40], [24, 255, 255])
    }

    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.min[c] <= hsv[c] && hsv[c] <= self.max[c])
    }
}

impl Segmenter for HsvRange {
    fn segment(&self, image: &RgbImage) -> GrayImage {
        binarize(image, |px| self.contains(rgb_to_hsv(px)))
    }
}

/// 8-bit luma with ITU-R 601 weights (`0.299 R + 0.587 G + 0.114 B`), in
/// 16-bit fixed point and rounded.
pub fn luma_601(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0.map(u32::from);
    ((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8
}

/// Foreground where ITU-R 601 luma is strictly above `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumaThreshold {
    pub threshold: u8,
}

impl LumaThreshold {
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl Default for LumaThreshold {
    fn default() -> Self {
        Self::new(160)
    }
}

impl Segmenter for LumaThreshold {
    fn segment(&self, image: &RgbImage) -> GrayImage {
        binarize(image, |px| luma_601(px) > self.threshold)
    }
}

/// Segmentation method selected for a scoreboard region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Segmentation {
    Hsv(HsvRange),
    Luma(LumaThreshold),
}

impl Segmenter for Segmentation {
    fn segment(&self, image: &RgbImage) -> GrayImage {
        match self {
            Segmentation::Hsv(range) => range.segment(image),
            Segmentation::Luma(threshold) => threshold.segment(image),
        }
    }
}

/// Mask `image` with an HSV range.
pub fn mask(image: &RgbImage, range: &HsvRange) -> GrayImage {
    range.segment(image)
}

fn binarize<F>(image: &RgbImage, is_foreground: F) -> GrayImage
where
    F: Fn(&Rgb<u8>) -> bool,
{
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        if is_foreground(image.get_pixel(x, y)) {
            FOREGROUND
        } else {
            BACKGROUND
        }
    })
}

/// Number of foreground pixels in a mask.
pub fn foreground_count(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p.0[0] != 0).count()
}
