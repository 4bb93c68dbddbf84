//! Foosball Core
//!
//! Value types shared by the score detector: pixel geometry and scores.

pub mod geometry;
pub mod score;

pub use geometry::{CornerSet, Edge, Point, Quad, TableCorners, Vector};
pub use score::{Score, ScoreBoard};
