//! Table localization: straightening the photograph and placing the
//! scoreboards relative to the table outline.

pub mod regions;
pub mod straighten;

pub use regions::{derive_score_boxes, RegionGeometry, ScoreBoxes};
pub use straighten::{locate_table, lower_long_side, pad_canvas, straighten, CanvasPlacement};
