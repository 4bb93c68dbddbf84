use super::edge::Edge;
use super::point::Point;
use serde::{Deserialize, Serialize};

/// Top-left and bottom-right of four points.
///
/// The two leftmost points (by `(x, y)`) give the top-left as the one with the
/// smallest `(y, x)`; the two rightmost give the bottom-right as the one with
/// the largest `(y, x)`.
pub fn crop_corners(points: &[Point; 4]) -> (Point, Point) {
    let mut sorted = *points;
    sorted.sort();

    let top_left = sorted[..2]
        .iter()
        .copied()
        .min_by_key(Point::yx)
        .unwrap_or(sorted[0]);
    let bottom_right = sorted[2..]
        .iter()
        .copied()
        .max_by_key(Point::yx)
        .unwrap_or(sorted[3]);

    (top_left, bottom_right)
}

/// Four corners of a rotated rectangle in detector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerSet(pub [Point; 4]);

impl CornerSet {
    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    /// Name the corners by position.
    pub fn classify(&self) -> TableCorners {
        let (top_left, bottom_right) = crop_corners(&self.0);

        let mut rest = self.0.to_vec();
        for taken in [top_left, bottom_right] {
            if let Some(idx) = rest.iter().position(|p| *p == taken) {
                rest.remove(idx);
            }
        }
        let bottom_left = rest.iter().copied().min().unwrap_or(top_left);
        let top_right = rest.iter().copied().max().unwrap_or(bottom_right);

        TableCorners {
            top_left,
            bottom_left,
            bottom_right,
            top_right,
        }
    }
}

/// Corners of the table classified by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCorners {
    pub top_left: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub top_right: Point,
}

impl TableCorners {
    pub fn as_array(&self) -> [Point; 4] {
        [self.top_left, self.bottom_left, self.bottom_right, self.top_right]
    }

    /// The two short sides of the table.
    ///
    /// All six corner pairs are ranked by length (ties keep enumeration
    /// order) and the two shortest are returned in ascending order.
    pub fn ends(&self) -> [Edge; 2] {
        let corners = self.as_array();
        let mut pairs = Vec::with_capacity(6);
        for i in 0..corners.len() {
            for j in (i + 1)..corners.len() {
                pairs.push(Edge::new(corners[i], corners[j]));
            }
        }

        pairs.sort_by(|a, b| a.length().total_cmp(&b.length()));
        let mut ends = [pairs[0], pairs[1]];
        ends.sort();
        ends
    }
}

/// Ordered quadrilateral around one scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quad(pub [Point; 4]);

impl Quad {
    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    /// Axis-aligned bounds as `(top_left, bottom_right)`.
    pub fn bounds(&self) -> (Point, Point) {
        crop_corners(&self.0)
    }
}
