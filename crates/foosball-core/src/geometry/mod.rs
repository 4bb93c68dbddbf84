//! Integer pixel geometry used to place the scoreboards.

pub mod edge;
pub mod point;
pub mod quad;

pub use edge::Edge;
pub use point::{Point, Vector};
pub use quad::{crop_corners, CornerSet, Quad, TableCorners};
