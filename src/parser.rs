//! Score reading for the command-line tool

use anyhow::Context;
use foosball_core::ScoreBoard;
use foosball_cv::{detection::DetectionConfig, Result, ScoreDetector};
use std::path::{Path, PathBuf};

/// Where the configuration comes from and whether debug images are kept.
#[derive(Debug, Default, Clone)]
pub struct ParseOptions {
    pub config_path: Option<PathBuf>,
    pub debug_dir: Option<PathBuf>,
}

impl ParseOptions {
    /// Default configuration, or the JSON file if one was given, with the
    /// debug directory applied on top.
    pub fn load_config(&self) -> Result<DetectionConfig> {
        let config = match &self.config_path {
            Some(path) => DetectionConfig::from_json_file(path)?,
            None => DetectionConfig::default(),
        };
        Ok(match &self.debug_dir {
            Some(dir) => config.with_debug_output(dir),
            None => config,
        })
    }
}

/// Read both scores from the photograph at `image_path`.
pub fn parse_score<P: AsRef<Path>>(image_path: P, options: &ParseOptions) -> Result<ScoreBoard> {
    let config = options.load_config()?;
    let detector = ScoreDetector::new(config).context("Failed to set up score detector")?;

    let result = detector.detect_from_file(&image_path)?;
    log::debug!(
        "Read {:?} in {} ms",
        image_path.as_ref(),
        result.processing_time_ms
    );

    Ok(result.scores)
}

/// The score record as printed by the tool.
pub fn to_json(scores: &ScoreBoard) -> Result<String> {
    serde_json::to_string(scores).context("Failed to serialize scores")
}
