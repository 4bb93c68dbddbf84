//! Foosball Computer Vision Library
//!
//! Reads the two scoreboards of a foosball table from a single photograph:
//! the table is found by color and straightened, the scoreboards are placed
//! relative to its outline, and the lit markers on each are counted.

pub mod bbox;
pub mod color;
pub mod crop;
pub mod detection;
pub mod dots;
pub mod error;
pub mod shape;
pub mod table;
pub mod utils;

// Re-export commonly used types
pub use bbox::BBox;
pub use color::{HsvRange, LumaThreshold, Segmentation};
pub use detection::{DetectionConfig, DetectionResult, ScoreDetector};
pub use dots::{DetectedObject, DotFilter};
pub use error::{ScoreError, ScoreResult};
pub use foosball_core::{Score, ScoreBoard};

// Error handling
pub type Result<T> = anyhow::Result<T>;

/// Core traits for the CV system
pub mod traits {
    use super::*;
    use image::{GrayImage, RgbImage};

    /// Turns a color image into a binary mask.
    pub trait Segmenter {
        fn segment(&self, image: &RgbImage) -> GrayImage;
    }

    /// Receives intermediate images for inspection.
    pub trait DebugSink: Sync {
        fn enabled(&self) -> bool {
            true
        }
        fn save_rgb(&self, name: &str, image: &RgbImage) -> Result<()>;
        fn save_mask(&self, name: &str, mask: &GrayImage) -> Result<()>;
    }
}
