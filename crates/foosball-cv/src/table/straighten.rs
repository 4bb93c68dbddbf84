//! Straighten the table so that its lower long side is horizontal

use crate::color::{mask, HsvRange};
use crate::error::{ScoreError, ScoreResult};
use crate::shape::locate;
use foosball_core::{CornerSet, Point};
use image::{imageops, GrayImage, Rgb, RgbImage};
use imageproc::geometric_transformations::{rotate, Interpolation};
use serde::{Deserialize, Serialize};

/// Where the photograph is pasted inside the enlarged working canvas.
///
/// The canvas is `scale` times the photograph in both directions; the
/// photograph's top-left lands at `(width / offset_x_divisor,
/// height / offset_y_divisor)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPlacement {
    pub scale: u32,
    pub offset_x_divisor: f64,
    pub offset_y_divisor: f64,
}

impl Default for CanvasPlacement {
    fn default() -> Self {
        Self {
            scale: 2,
            offset_x_divisor: 1.5,
            offset_y_divisor: 2.0,
        }
    }
}

impl CanvasPlacement {
    pub fn offset(&self, width: u32, height: u32) -> (i64, i64) {
        (
            (width as f64 / self.offset_x_divisor) as i64,
            (height as f64 / self.offset_y_divisor) as i64,
        )
    }
}

/// Embed `image` in a black canvas large enough to rotate it without
/// losing the table off the edges.
pub fn pad_canvas(image: &RgbImage, placement: &CanvasPlacement) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut canvas = RgbImage::new(width * placement.scale, height * placement.scale);
    let (x, y) = placement.offset(width, height);
    imageops::overlay(&mut canvas, image, x, y);
    canvas
}

/// Blue mask and rectangle corners of the table.
pub fn locate_table(image: &RgbImage, blue: &HsvRange) -> ScoreResult<(GrayImage, CornerSet)> {
    let table_mask = mask(image, blue);
    let (_, corners) = locate(&table_mask).map_err(|err| match err {
        ScoreError::NoForegroundPixels => ScoreError::TableNotFound,
        other => other,
    })?;
    Ok((table_mask, corners))
}

/// The long side touching the lowest corner, as `(lowest, other)`.
///
/// ```text
///         d
///        / \
///       /   c          a-----d
///      a   /     and   |     |
///       \ /            b-----c
///        b
/// ```
/// Both yield `b` and `c`.
pub fn lower_long_side(corners: &CornerSet) -> (Point, Point) {
    let mut by_y = *corners.points();
    by_y.sort_by_key(Point::yx);

    let lowest = by_y[3];
    let second = by_y[1];
    let third = by_y[2];
    let other = if lowest.distance(&second) > lowest.distance(&third) {
        second
    } else {
        third
    };
    (lowest, other)
}

/// Angle of the line `a -> b` against the horizontal, radians.
///
/// A vertical line has no slope and is rejected.
pub fn line_rotation(a: Point, b: Point) -> ScoreResult<f64> {
    if a.x == b.x {
        return Err(ScoreError::VerticalLowerSide);
    }
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    Ok((dy / dx).atan())
}

/// Rotate the whole image about the lowest table corner so that the lower
/// long side of the table becomes horizontal.
pub fn straighten(image: &RgbImage, blue: &HsvRange) -> ScoreResult<RgbImage> {
    let (_, corners) = locate_table(image, blue)?;
    let (lower_a, lower_b) = lower_long_side(&corners);
    let rotation = line_rotation(lower_a, lower_b)?;

    log::debug!(
        "Lower long side {} -> {}, rotation {:.3} degrees",
        lower_a,
        lower_b,
        rotation.to_degrees()
    );

    if rotation == 0.0 {
        return Ok(image.clone());
    }

    // Positive theta turns the picture clockwise; undo the measured tilt.
    Ok(rotate(
        image,
        (lower_a.x as f32, lower_a.y as f32),
        -rotation as f32,
        Interpolation::Bilinear,
        Rgb([0, 0, 0]),
    ))
}
