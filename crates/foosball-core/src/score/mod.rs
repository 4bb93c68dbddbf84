//! Score values read off the table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Points shown by a single scoreboard, `0..=Score::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 10;

    /// Returns `None` when `value` exceeds [`Score::MAX`].
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// The score counted from the opposite end of the board.
    pub fn inverted(&self) -> Self {
        Self(Self::MAX - self.0)
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("score {value} is above {}", Self::MAX))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Both scores of one photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBoard {
    pub left_score: Score,
    pub right_score: Score,
}

impl ScoreBoard {
    pub fn new(left_score: Score, right_score: Score) -> Self {
        Self {
            left_score,
            right_score,
        }
    }
}
