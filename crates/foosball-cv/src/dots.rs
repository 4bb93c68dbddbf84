//! Count lit markers on a segmented scoreboard strip
//!
//! A scoreboard shows twelve dots in a row: two fixed anchors at the ends and
//! ten score markers. Active markers sit together from one end, so the
//! score is the run of evenly spaced dots before the first wide gap.

use crate::bbox::BBox;
use crate::error::{ScoreError, ScoreResult};
use foosball_core::{Point, Score};
use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Component size limits and the number of dots a scoreboard carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotFilter {
    pub min_area: u32,
    pub max_area: u32,
    pub expected_dots: usize,
}

impl Default for DotFilter {
    fn default() -> Self {
        Self {
            min_area: 15,
            max_area: 120,
            expected_dots: 12,
        }
    }
}

impl DotFilter {
    pub fn accepts(&self, area: u32) -> bool {
        (self.min_area..=self.max_area).contains(&area)
    }
}

/// One connected component of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub bbox: BBox,
    pub area: u32,
    pub centroid: Point,
}

impl From<BBox> for DetectedObject {
    fn from(bbox: BBox) -> Self {
        Self {
            bbox,
            area: bbox.area(),
            centroid: bbox.center(),
        }
    }
}

/// Label 4-connected foreground components, ordered by label.
pub fn detect_objects(mask: &GrayImage) -> Vec<DetectedObject> {
    let labels = connected_components(mask, Connectivity::Four, Luma([0u8]));

    let mut boxes: BTreeMap<u32, BBox> = BTreeMap::new();
    for (x, y, label) in labels.enumerate_pixels() {
        let label = label.0[0];
        if label == 0 {
            continue;
        }
        boxes
            .entry(label)
            .and_modify(|bbox| bbox.include(x, y))
            .or_insert_with(|| BBox::at(x, y));
    }

    boxes.into_values().map(DetectedObject::from).collect()
}

/// Count the active markers in a binary scoreboard mask.
pub fn count(mask: &GrayImage, filter: &DotFilter) -> ScoreResult<Score> {
    let mut centroids = Vec::new();
    for object in detect_objects(mask) {
        log::debug!("Found possible score block. Area: {}", object.area);
        if !filter.accepts(object.area) {
            log::info!("Skip object with area {}", object.area);
            continue;
        }
        centroids.push(object.centroid);
    }

    log::debug!("Found {} objects which have correct area", centroids.len());

    if centroids.len() != filter.expected_dots {
        return Err(ScoreError::InvalidDotCount {
            found: centroids.len(),
            expected: filter.expected_dots,
        });
    }

    let raw = score_from_points(&mut centroids);
    u8::try_from(raw)
        .ok()
        .and_then(Score::new)
        .ok_or(ScoreError::ScoreOutOfRange(raw))
}

/// Mean distance between neighbours in an ordered row.
pub fn average_spacing(points: &[Point]) -> f64 {
    let gaps: Vec<f64> = points.windows(2).map(|w| w[0].distance(&w[1])).collect();
    if gaps.is_empty() {
        return 0.0;
    }
    gaps.iter().sum::<f64>() / gaps.len() as f64
}

/// Sort `points` left to right and count the gaps no wider than average,
/// stopping at the first wider one.
pub fn score_from_points(points: &mut [Point]) -> usize {
    points.sort();
    let average = average_spacing(points);

    points
        .windows(2)
        .take_while(|w| w[0].distance(&w[1]) <= average)
        .count()
}
