//! High-level detection module

pub mod config;
pub mod detector;

pub use config::{DebugConfig, DetectionConfig, RegionConfig};
pub use detector::{DetectionResult, ScoreDetector};
