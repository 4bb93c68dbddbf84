//! Minimum-area rotated bounding rectangle of a binary mask

use crate::error::{ScoreError, ScoreResult};
use foosball_core::{CornerSet, Point};
use image::GrayImage;
use imageproc::geometry::convex_hull;
use imageproc::point::Point as PixelPoint;
use serde::{Deserialize, Serialize};

/// Rotated rectangle with floating point corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedRect {
    pub width: f64,
    pub height: f64,
    /// Direction of the `width` side, degrees.
    pub angle: f64,
    pub corners: [(f64, f64); 4],
}

impl RotatedRect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Corners rounded to the nearest pixel.
    pub fn corner_set(&self) -> CornerSet {
        CornerSet(
            self.corners
                .map(|(x, y)| Point::new(x.round() as i32, y.round() as i32)),
        )
    }
}

/// Locate the smallest rotated rectangle enclosing every foreground pixel.
pub fn locate(mask: &GrayImage) -> ScoreResult<(RotatedRect, CornerSet)> {
    let points = row_extremes(mask);
    if points.is_empty() {
        return Err(ScoreError::NoForegroundPixels);
    }

    // Two hull points still give a side to measure against: the segment
    // itself, with zero width across it.
    let hull = convex_hull(points.as_slice());
    let rect = if hull.len() < 2 {
        axis_aligned(&points)
    } else {
        rotating_calipers(&hull)
    };

    log::debug!(
        "Located rectangle {:.1}x{:.1} at {:.2} degrees",
        rect.width,
        rect.height,
        rect.angle
    );

    Ok((rect, rect.corner_set()))
}

/// First and last foreground pixel of each row; only those can be on the hull.
fn row_extremes(mask: &GrayImage) -> Vec<PixelPoint<i32>> {
    let mut points = Vec::new();
    for y in 0..mask.height() {
        let mut first = None;
        let mut last = None;
        for x in 0..mask.width() {
            if mask.get_pixel(x, y).0[0] != 0 {
                first.get_or_insert(x);
                last = Some(x);
            }
        }
        if let (Some(first), Some(last)) = (first, last) {
            points.push(PixelPoint::new(first as i32, y as i32));
            if last != first {
                points.push(PixelPoint::new(last as i32, y as i32));
            }
        }
    }
    points
}

fn axis_aligned(points: &[PixelPoint<i32>]) -> RotatedRect {
    let min_x = points.iter().map(|p| p.x).min().unwrap_or(0) as f64;
    let max_x = points.iter().map(|p| p.x).max().unwrap_or(0) as f64;
    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0) as f64;
    let max_y = points.iter().map(|p| p.y).max().unwrap_or(0) as f64;

    RotatedRect {
        width: max_x - min_x,
        height: max_y - min_y,
        angle: 0.0,
        corners: [(min_x, max_y), (min_x, min_y), (max_x, min_y), (max_x, max_y)],
    }
}

/// Try every hull edge as a rectangle side and keep the smallest area.
fn rotating_calipers(hull: &[PixelPoint<i32>]) -> RotatedRect {
    let n = hull.len();
    let mut best: Option<(f64, RotatedRect)> = None;

    for i in 0..n {
        let p1 = hull[i];
        let p2 = hull[(i + 1) % n];
        let edge_x = (p2.x - p1.x) as f64;
        let edge_y = (p2.y - p1.y) as f64;
        let edge_len = edge_x.hypot(edge_y);
        if edge_len < 1e-10 {
            continue;
        }

        let (ux, uy) = (edge_x / edge_len, edge_y / edge_len);
        let (vx, vy) = (-uy, ux);

        let mut min_u = f64::MAX;
        let mut max_u = f64::MIN;
        let mut min_v = f64::MAX;
        let mut max_v = f64::MIN;
        for p in hull {
            let dx = (p.x - p1.x) as f64;
            let dy = (p.y - p1.y) as f64;
            let u = dx * ux + dy * uy;
            let v = dx * vx + dy * vy;
            min_u = min_u.min(u);
            max_u = max_u.max(u);
            min_v = min_v.min(v);
            max_v = max_v.max(v);
        }

        let width = max_u - min_u;
        let height = max_v - min_v;
        let area = width * height;
        if best.as_ref().is_some_and(|(best_area, _)| *best_area <= area) {
            continue;
        }

        let origin = (p1.x as f64, p1.y as f64);
        let at = |u: f64, v: f64| (origin.0 + u * ux + v * vx, origin.1 + u * uy + v * vy);
        let corners = [
            at(min_u, min_v),
            at(max_u, min_v),
            at(max_u, max_v),
            at(min_u, max_v),
        ];

        best = Some((
            area,
            RotatedRect {
                width,
                height,
                angle: uy.atan2(ux).to_degrees(),
                corners,
            },
        ));
    }

    best.map(|(_, rect)| rect).unwrap_or_else(|| axis_aligned(hull))
}
