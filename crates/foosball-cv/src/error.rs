//! Failure taxonomy of the scoring pipeline
//!
//! Every variant is terminal for the current photograph.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("mask contains no foreground pixels")]
    NoForegroundPixels,

    #[error("table not found: no pixels in the table color range")]
    TableNotFound,

    #[error("score region crop is empty ({width}x{height})")]
    EmptyCrop { width: u32, height: u32 },

    #[error("cannot find correct amount of score blocks, expected {expected} but found {found}")]
    InvalidDotCount { found: usize, expected: usize },

    #[error("counted {0} active markers, more than a scoreboard can show")]
    ScoreOutOfRange(usize),

    #[error("lower long side of the table is vertical, cannot level it")]
    VerticalLowerSide,
}

pub type ScoreResult<T> = std::result::Result<T, ScoreError>;
