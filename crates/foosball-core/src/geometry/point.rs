use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Integer pixel coordinate.
///
/// Ordering is lexicographic on `(x, y)`, which is what corner
/// classification and table end sorting rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Key that orders points top to bottom, then left to right.
    pub fn yx(&self) -> (i32, i32) {
        (self.y, self.x)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }

    /// Component-wise mean, rounded down.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(
            (self.x + other.x).div_euclid(2),
            (self.y + other.y).div_euclid(2),
        )
    }

    /// Displacement that carries `self` onto `other`.
    pub fn vector_to(&self, other: &Point) -> Vector {
        Vector::new(other.x - self.x, other.y - self.y)
    }

    pub fn translate(&self, v: Vector) -> Point {
        Point::new(self.x + v.dx, self.y + v.dy)
    }

    /// Multiply both coordinates by `k`.
    pub fn scale(&self, k: i32) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        self.translate(v)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Scale by a fraction, truncating each component toward zero.
    pub fn scale(&self, fraction: f64) -> Vector {
        Vector::new(
            (self.dx as f64 * fraction) as i32,
            (self.dy as f64 * fraction) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_rounds_down() {
        let a = Point::new(20, 20);
        let b = Point::new(20, 219);
        assert_eq!(a.midpoint(&b), Point::new(20, 119));

        let neg = Point::new(-3, 0).midpoint(&Point::new(0, 0));
        assert_eq!(neg, Point::new(-2, 0));
    }

    #[test]
    fn test_scale_truncates_toward_zero() {
        let v = Vector::new(50, -50);
        assert_eq!(v.scale(0.17), Vector::new(8, -8));
        assert_eq!(Vector::new(599, 0).scale(0.045), Vector::new(26, 0));
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let mut pts = vec![Point::new(5, 1), Point::new(1, 9), Point::new(1, 2)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 2), Point::new(1, 9), Point::new(5, 1)]);
    }

    #[test]
    fn test_translate_and_distance() {
        let p = Point::new(3, 4);
        assert_eq!(p + Vector::new(-3, -4), Point::new(0, 0));
        assert!((Point::new(0, 0).distance(&p) - 5.0).abs() < 1e-12);
        assert_eq!(p.vector_to(&Point::new(0, 0)), Vector::new(-3, -4));
    }
}
