//! Axis-aligned bounding boxes of labelled mask components

use foosball_core::Point;
use serde::{Deserialize, Serialize};

/// Pixel-inclusive bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box covering a single pixel.
    pub fn at(x: u32, y: u32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Grow the box so it covers pixel `(x, y)`.
    pub fn include(&mut self, x: u32, y: u32) {
        let right = (self.x + self.width).max(x + 1);
        let bottom = (self.y + self.height).max(y + 1);
        self.x = self.x.min(x);
        self.y = self.y.min(y);
        self.width = right - self.x;
        self.height = bottom - self.y;
    }

    /// Width times height, not the number of set pixels.
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Center pixel, rounded down.
    pub fn center(&self) -> Point {
        Point::new(
            ((2 * self.x + self.width - 1) / 2) as i32,
            ((2 * self.y + self.height - 1) / 2) as i32,
        )
    }
}
