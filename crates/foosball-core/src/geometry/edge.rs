use super::point::Point;
use serde::{Deserialize, Serialize};

/// A pair of points, compared lexicographically on `(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    pub fn midpoint(&self) -> Point {
        self.a.midpoint(&self.b)
    }
}
