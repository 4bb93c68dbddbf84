//! Scoreboard placement from the table outline
//!
//! Each scoreboard sits along one short end of the table, split in two by
//! the end's center markings. Every offset below is a fraction of a measured
//! length so the boxes follow the table at any photo scale.

use foosball_core::{Edge, Point, Quad, TableCorners, Vector};
use serde::{Deserialize, Serialize};

/// Fractions that shape the score boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionGeometry {
    /// Box depth, as a fraction of the distance between the two end midpoints.
    pub block_length: f64,
    /// Gap between the table edge and the box, same reference length.
    pub inner_margin: f64,
    /// Pull of each quarter point toward its end's midpoint.
    pub to_middle_margin: f64,
}

impl Default for RegionGeometry {
    fn default() -> Self {
        Self {
            block_length: 0.045,
            inner_margin: 0.015,
            to_middle_margin: 0.17,
        }
    }
}

/// Score boxes for both table ends, in table end order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoxes {
    pub first: Quad,
    pub second: Quad,
}

impl ScoreBoxes {
    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        [&self.first, &self.second].into_iter()
    }
}

/// Midpoint of an end and its two quarter points after the middle margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EndMiddles {
    middle: Point,
    a: Point,
    b: Point,
}

fn end_middles(end: &Edge, to_middle_margin: f64) -> EndMiddles {
    let middle = end.midpoint();
    let a = end.a.midpoint(&middle);
    let b = end.b.midpoint(&middle);

    EndMiddles {
        middle,
        a: a + a.vector_to(&middle).scale(to_middle_margin),
        b: b + b.vector_to(&middle).scale(to_middle_margin),
    }
}

fn score_box(a: Point, b: Point, depth: Vector) -> Quad {
    Quad([b, a, a + depth, b + depth])
}

/// Derive one score box per table end.
pub fn derive_score_boxes(corners: &TableCorners, geometry: &RegionGeometry) -> ScoreBoxes {
    let [end1, end2] = corners.ends();
    let m1 = end_middles(&end1, geometry.to_middle_margin);
    let m2 = end_middles(&end2, geometry.to_middle_margin);

    let along = m1.middle.vector_to(&m2.middle);
    let back = m2.middle.vector_to(&m1.middle);

    let inner1 = along.scale(geometry.inner_margin);
    let inner2 = back.scale(geometry.inner_margin);
    let depth1 = along.scale(geometry.block_length);
    let depth2 = back.scale(geometry.block_length);

    ScoreBoxes {
        first: score_box(m1.a + inner1, m1.b + inner1, depth1),
        second: score_box(m2.a + inner2, m2.b + inner2, depth2),
    }
}
