//! Detection configuration

use crate::color::{HsvRange, LumaThreshold, Segmentation};
use crate::dots::DotFilter;
use crate::table::{CanvasPlacement, RegionGeometry};
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub canvas: CanvasPlacement,
    pub table_color: HsvRange,
    pub geometry: RegionGeometry,
    pub dots: DotFilter,
    /// Scoreboard at the first table end (smaller coordinates).
    pub left_region: RegionConfig,
    /// Scoreboard at the second table end.
    pub right_region: RegionConfig,
    pub debug: DebugConfig,
}

/// How one scoreboard is segmented and read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Prefix of the debug images of this region.
    pub name: String,
    pub segmentation: Segmentation,
    /// Markers advance from the far end, so the count is `10 - raw`.
    pub inverted: bool,
}

/// Debug image output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    pub save_intermediate: bool,
    pub output_dir: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            save_intermediate: false,
            output_dir: "debug".into(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasPlacement::default(),
            table_color: HsvRange::blue(),
            geometry: RegionGeometry::default(),
            dots: DotFilter::default(),
            left_region: RegionConfig {
                name: "left".into(),
                segmentation: Segmentation::Hsv(HsvRange::orange()),
                inverted: true,
            },
            right_region: RegionConfig {
                name: "right".into(),
                segmentation: Segmentation::Luma(LumaThreshold::new(160)),
                inverted: false,
            },
            debug: DebugConfig::default(),
        }
    }
}

impl DetectionConfig {
    /// Load a configuration; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config: {:?}", path.as_ref()))
    }

    /// Same configuration with debug images written to `dir`.
    pub fn with_debug_output<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.debug = DebugConfig {
            save_intermediate: true,
            output_dir: dir.into(),
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_calibration() {
        let config = DetectionConfig::default();
        assert_eq!(config.geometry.block_length, 0.045);
        assert_eq!(config.geometry.inner_margin, 0.015);
        assert_eq!(config.geometry.to_middle_margin, 0.17);
        assert_eq!((config.dots.min_area, config.dots.max_area), (15, 120));
        assert_eq!(config.table_color, HsvRange::new([80, 70, 70], [130, 255, 255]));
        assert!(config.left_region.inverted);
        assert!(!config.right_region.inverted);
    }

    #[test]
    fn test_partial_json_keeps_defaults() -> Result<()> {
        let json = r#"{
            "dots": { "min_area": 10, "max_area": 200, "expected_dots": 12 },
            "right_region": {
                "name": "right",
                "segmentation": { "method": "hsv", "min": [9, 40, 40], "max": [24, 255, 255] },
                "inverted": false
            }
        }"#;
        let config: DetectionConfig = serde_json::from_str(json)?;

        assert_eq!(config.dots.min_area, 10);
        assert_eq!(
            config.right_region.segmentation,
            Segmentation::Hsv(HsvRange::orange())
        );
        assert_eq!(config.geometry, RegionGeometry::default());
        assert_eq!(config.left_region, DetectionConfig::default().left_region);
        Ok(())
    }

    #[test]
    fn test_json_roundtrip_through_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!("foosball-config-{}.json", std::process::id()));
        let config = DetectionConfig::default().with_debug_output("out");
        std::fs::write(&path, serde_json::to_string_pretty(&config)?)?;

        let loaded = DetectionConfig::from_json_file(&path)?;
        std::fs::remove_file(&path)?;

        assert_eq!(loaded, config);
        assert!(loaded.debug.save_intermediate);
        Ok(())
    }
}
