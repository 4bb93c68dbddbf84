//! Photograph-to-score pipeline

use super::config::{DetectionConfig, RegionConfig};
use crate::color::foreground_count;
use crate::crop::crop;
use crate::dots;
use crate::error::ScoreResult;
use crate::table::{derive_score_boxes, locate_table, pad_canvas, straighten, ScoreBoxes};
use crate::traits::{DebugSink, Segmenter};
use crate::utils::{DirectorySink, ImageUtils, NoDebug};
use crate::Result;
use anyhow::Context;
use foosball_core::{Quad, Score, ScoreBoard, TableCorners};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Scores plus the geometry they were read from
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResult {
    pub scores: ScoreBoard,
    pub table_corners: TableCorners,
    pub score_boxes: ScoreBoxes,
    pub processing_time_ms: u64,
}

/// Reads both scoreboards from a table photograph
pub struct ScoreDetector {
    config: DetectionConfig,
    sink: Box<dyn DebugSink>,
}

impl ScoreDetector {
    /// Create new detector; prepares the debug directory when enabled
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let sink: Box<dyn DebugSink> = if config.debug.save_intermediate {
            Box::new(DirectorySink::new(&config.debug.output_dir)?)
        } else {
            Box::new(NoDebug)
        };
        Ok(Self::with_sink(config, sink))
    }

    pub fn with_sink(config: DetectionConfig, sink: Box<dyn DebugSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect scores from an image file
    pub fn detect_from_file<P: AsRef<Path>>(&self, image_path: P) -> Result<DetectionResult> {
        let image = ImageUtils::load_rgb(&image_path)?;
        self.detect_from_rgb_image(&image)
            .with_context(|| format!("Failed to read score from: {:?}", image_path.as_ref()))
    }

    /// Detect scores from a decoded image
    pub fn detect_from_rgb_image(&self, image: &RgbImage) -> Result<DetectionResult> {
        Ok(self.detect(image)?)
    }

    /// Run every stage once; the first failure aborts.
    pub fn detect(&self, image: &RgbImage) -> ScoreResult<DetectionResult> {
        let start_time = Instant::now();
        let table_color = &self.config.table_color;

        let canvas = pad_canvas(image, &self.config.canvas);

        log::debug!("Straightening table..");
        let straight = straighten(&canvas, table_color)?;

        log::debug!("Finding table corners..");
        let (table_mask, corners) = locate_table(&straight, table_color)?;
        log::debug!("Table mask covers {} pixels", foreground_count(&table_mask));
        self.dump_mask("found_blue", &table_mask);

        let table_corners = corners.classify();

        log::debug!("Finding and cropping score blocks..");
        let score_boxes = derive_score_boxes(&table_corners, &self.config.geometry);
        if self.sink.enabled() {
            self.create_visualization(&straight, &table_corners, &score_boxes);
        }

        let (left, right) = self.read_regions(&straight, &score_boxes)?;
        let scores = ScoreBoard::new(left, right);

        log::debug!("Scores: left {} right {}", scores.left_score, scores.right_score);

        Ok(DetectionResult {
            scores,
            table_corners,
            score_boxes,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn read_regions(&self, image: &RgbImage, boxes: &ScoreBoxes) -> ScoreResult<(Score, Score)> {
        let left = self.read_region(image, &boxes.first, &self.config.left_region)?;
        let right = self.read_region(image, &boxes.second, &self.config.right_region)?;
        Ok((left, right))
    }

    #[cfg(feature = "parallel")]
    fn read_regions(&self, image: &RgbImage, boxes: &ScoreBoxes) -> ScoreResult<(Score, Score)> {
        let (left, right) = rayon::join(
            || self.read_region(image, &boxes.first, &self.config.left_region),
            || self.read_region(image, &boxes.second, &self.config.right_region),
        );
        Ok((left?, right?))
    }

    /// Crop, segment and count one scoreboard
    fn read_region(&self, image: &RgbImage, quad: &Quad, region: &RegionConfig) -> ScoreResult<Score> {
        log::debug!("Counting {} score..", region.name);

        let cropped = crop(image, quad)?;
        self.dump_rgb(&format!("{}_score_blocks", region.name), &cropped);

        let mask = region.segmentation.segment(&cropped);
        self.dump_mask(&format!("{}_score_blocks_black_white", region.name), &mask);

        let raw = dots::count(&mask, &self.config.dots)?;
        Ok(if region.inverted { raw.inverted() } else { raw })
    }

    /// Table corners and score box points circled on the straightened image
    fn create_visualization(&self, image: &RgbImage, corners: &TableCorners, boxes: &ScoreBoxes) {
        let mut points: Vec<_> = boxes.iter().flat_map(|quad| quad.points().to_vec()).collect();
        points.extend(corners.as_array());

        let overlay = ImageUtils::draw_points(image, &points);
        self.dump_rgb("debug", &overlay);
    }

    fn dump_rgb(&self, name: &str, image: &RgbImage) {
        if let Err(err) = self.sink.save_rgb(name, image) {
            log::warn!("Could not write debug image {name}: {err:#}");
        }
    }

    fn dump_mask(&self, name: &str, mask: &GrayImage) {
        if let Err(err) = self.sink.save_mask(name, mask) {
            log::warn!("Could not write debug image {name}: {err:#}");
        }
    }

    /// Export detection results in JSON format
    pub fn export_json(&self, results: &DetectionResult, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(results)
            .context("Failed to serialize detection results")?;

        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write JSON to: {:?}", output_path))?;

        Ok(())
    }
}
