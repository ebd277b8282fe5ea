//! Move notation: `[width]<R|L|U|D|F|B|M>[w]['|2]`.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

use crate::color::Face;

/// What a move turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TurnTarget {
    /// A face together with `width` layers behind it.
    Face(Face),
    /// The middle slice between L and R, turning the same way as L.
    MiddleSlice,
}

/// One parsed move token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub target: TurnTarget,
    /// How many layers turn, counted from the face inward. Always 1 for
    /// non-wide moves.
    pub width: usize,
    /// Clockwise quarter turns: 1, 2 or 3.
    pub quarter_turns: u8,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move token")]
    Empty,
    #[error("Unknown face or slice in move {0:?}")]
    UnknownTarget(String),
    #[error("Unknown modifier in move {0:?}, expected nothing, `'` or `2`")]
    UnknownModifier(String),
}

impl Move {
    pub fn new(target: TurnTarget, width: usize, quarter_turns: u8) -> Move {
        Move {
            target,
            width,
            quarter_turns,
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            quarter_turns: (4 - self.quarter_turns) % 4,
            ..self
        }
    }

    pub fn is_wide(self) -> bool {
        self.width > 1
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.is_empty() {
            return Err(MoveParseError::Empty);
        }

        let wide = token.contains('w');
        let leading_digit = token
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as usize);
        let width = match (wide, leading_digit) {
            (true, Some(digit)) => digit,
            (true, None) => 2,
            (false, _) => 1,
        };

        let mut base = token.replacen('w', "", 1);
        if leading_digit.is_some() {
            base.remove(0);
        }

        let mut chars = base.chars();
        let target = match chars.next() {
            Some('U') => TurnTarget::Face(Face::U),
            Some('L') => TurnTarget::Face(Face::L),
            Some('F') => TurnTarget::Face(Face::F),
            Some('R') => TurnTarget::Face(Face::R),
            Some('B') => TurnTarget::Face(Face::B),
            Some('D') => TurnTarget::Face(Face::D),
            Some('M') => TurnTarget::MiddleSlice,
            _ => return Err(MoveParseError::UnknownTarget(token.to_owned())),
        };

        let quarter_turns = match chars.as_str() {
            "" => 1,
            "2" => 2,
            "'" => 3,
            _ => return Err(MoveParseError::UnknownModifier(token.to_owned())),
        };

        let width = match target {
            TurnTarget::Face(_) => width,
            TurnTarget::MiddleSlice => 1,
        };

        Ok(Move {
            target,
            width,
            quarter_turns,
        })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            TurnTarget::Face(face) => match self.width {
                0 | 1 => write!(f, "{face}")?,
                2 => write!(f, "{face}w")?,
                width => write!(f, "{width}{face}w")?,
            },
            TurnTarget::MiddleSlice => write!(f, "M")?,
        }
        match self.quarter_turns % 4 {
            2 => write!(f, "2"),
            3 => write!(f, "'"),
            _ => Ok(()),
        }
    }
}

/// Split a move sequence on whitespace and parse every token.
pub fn parse_sequence(sequence: &str) -> impl Iterator<Item = Result<Move, MoveParseError>> + '_ {
    sequence.split_whitespace().map(str::parse)
}

/// Invert a move sequence: reverse it and invert every move. Unrecognized
/// tokens are dropped.
pub fn invert_sequence(sequence: &str) -> String {
    let moves = parse_sequence(sequence)
        .filter_map(Result::ok)
        .collect::<Vec<_>>();
    itertools::join(moves.into_iter().rev().map(Move::inverse), " ")
}
