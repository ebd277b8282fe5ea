use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The cube puzzles the timer knows about.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleType {
    #[serde(rename = "2x2x2")]
    Cube2,
    #[default]
    #[serde(rename = "3x3x3")]
    Cube3,
    #[serde(rename = "4x4x4")]
    Cube4,
    #[serde(rename = "5x5x5")]
    Cube5,
    #[serde(rename = "6x6x6")]
    Cube6,
    #[serde(rename = "7x7x7")]
    Cube7,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown puzzle type {0:?}, expected one of 2x2x2, 3x3x3, 4x4x4, 5x5x5, 6x6x6, 7x7x7")]
pub struct UnknownPuzzleType(pub String);

impl PuzzleType {
    pub const ALL: [PuzzleType; 6] = [
        PuzzleType::Cube2,
        PuzzleType::Cube3,
        PuzzleType::Cube4,
        PuzzleType::Cube5,
        PuzzleType::Cube6,
        PuzzleType::Cube7,
    ];

    /// The edge length of the physical puzzle.
    pub fn size(self) -> usize {
        match self {
            PuzzleType::Cube2 => 2,
            PuzzleType::Cube3 => 3,
            PuzzleType::Cube4 => 4,
            PuzzleType::Cube5 => 5,
            PuzzleType::Cube6 => 6,
            PuzzleType::Cube7 => 7,
        }
    }

    /// The order of the simulated cube. Even puzzles carry a hidden middle
    /// layer so that every order is odd.
    pub fn model_order(self) -> usize {
        let size = self.size();
        if size % 2 == 0 { size + 1 } else { size }
    }

    pub fn tag(self) -> &'static str {
        match self {
            PuzzleType::Cube2 => "2x2x2",
            PuzzleType::Cube3 => "3x3x3",
            PuzzleType::Cube4 => "4x4x4",
            PuzzleType::Cube5 => "5x5x5",
            PuzzleType::Cube6 => "6x6x6",
            PuzzleType::Cube7 => "7x7x7",
        }
    }
}

impl Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PuzzleType {
    type Err = UnknownPuzzleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PuzzleType::ALL
            .into_iter()
            .find(|puzzle| puzzle.tag() == s)
            .ok_or_else(|| UnknownPuzzleType(s.to_owned()))
    }
}
