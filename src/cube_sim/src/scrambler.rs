//! Random-move scramble generation.

use itertools::Itertools;
use log::debug;

use crate::{
    catalog::PuzzleType,
    color::Face,
    moves::{Move, TurnTarget},
};

/// Generates random-move scrambles for one puzzle type.
pub struct Scrambler {
    puzzle: PuzzleType,
    length: usize,
    rng: fastrand::Rng,
}

impl Scrambler {
    pub fn new(puzzle: PuzzleType) -> Scrambler {
        Scrambler {
            puzzle,
            length: default_length(puzzle),
            rng: fastrand::Rng::new(),
        }
    }

    /// A scrambler whose output is fully determined by `seed`.
    pub fn with_seed(puzzle: PuzzleType, seed: u64) -> Scrambler {
        Scrambler {
            rng: fastrand::Rng::with_seed(seed),
            ..Scrambler::new(puzzle)
        }
    }

    #[must_use]
    pub fn with_length(mut self, length: usize) -> Scrambler {
        self.length = length;
        self
    }

    pub fn puzzle(&self) -> PuzzleType {
        self.puzzle
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Generate one scramble.
    ///
    /// Two consecutive moves never turn the same face and three consecutive
    /// moves never share an axis.
    pub fn next_moves(&mut self) -> Vec<Move> {
        let faces = allowed_faces(self.puzzle);
        let widths = allowed_widths(self.puzzle);
        let mut moves: Vec<Move> = Vec::with_capacity(self.length);

        while moves.len() < self.length {
            let face = faces[self.rng.usize(..faces.len())];
            let last_faces = moves
                .iter()
                .rev()
                .take(2)
                .filter_map(|m| match m.target {
                    TurnTarget::Face(face) => Some(face),
                    TurnTarget::MiddleSlice => None,
                })
                .collect_vec();

            if last_faces.first() == Some(&face) {
                continue;
            }
            if last_faces.len() == 2 && last_faces.iter().all(|f| f.axis() == face.axis()) {
                continue;
            }

            let width = widths[self.rng.usize(..widths.len())];
            let quarter_turns = self.rng.u8(1..=3);
            moves.push(Move::new(TurnTarget::Face(face), width, quarter_turns));
        }

        debug!(
            target: "scrambler",
            "Generated {} move scramble for {}",
            moves.len(),
            self.puzzle
        );
        moves
    }

    /// Generate one scramble in move notation.
    pub fn next_scramble(&mut self) -> String {
        self.next_moves().iter().join(" ")
    }
}

pub fn default_length(puzzle: PuzzleType) -> usize {
    match puzzle {
        PuzzleType::Cube2 => 11,
        PuzzleType::Cube3 => 20,
        PuzzleType::Cube4 => 40,
        PuzzleType::Cube5 => 60,
        PuzzleType::Cube6 => 80,
        PuzzleType::Cube7 => 100,
    }
}

fn allowed_faces(puzzle: PuzzleType) -> &'static [Face] {
    match puzzle {
        PuzzleType::Cube2 => &[Face::R, Face::U, Face::F],
        _ => &Face::ALL,
    }
}

fn allowed_widths(puzzle: PuzzleType) -> &'static [usize] {
    match puzzle {
        PuzzleType::Cube2 | PuzzleType::Cube3 => &[1],
        PuzzleType::Cube4 | PuzzleType::Cube5 => &[1, 2],
        PuzzleType::Cube6 | PuzzleType::Cube7 => &[1, 2, 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_sequence;

    #[test_log::test]
    fn test_scramble_lengths() {
        for puzzle in PuzzleType::ALL {
            let mut scrambler = Scrambler::with_seed(puzzle, 7);
            let text = scrambler.next_scramble();
            assert_eq!(text.split(' ').count(), default_length(puzzle));
            assert!(parse_sequence(&text).all(|m| m.is_ok()), "{text}");
        }
    }

    #[test_log::test]
    fn test_no_repeated_face_or_axis() {
        for puzzle in PuzzleType::ALL {
            let mut scrambler = Scrambler::with_seed(puzzle, 42).with_length(200);
            let faces = scrambler
                .next_moves()
                .into_iter()
                .map(|m| match m.target {
                    TurnTarget::Face(face) => face,
                    TurnTarget::MiddleSlice => panic!("scrambles only turn faces"),
                })
                .collect_vec();

            for (a, b) in faces.iter().tuple_windows() {
                assert_ne!(a, b);
            }
            for (a, b, c) in faces.iter().tuple_windows() {
                assert!(!(a.axis() == b.axis() && b.axis() == c.axis()));
            }
        }
    }

    #[test]
    fn test_two_by_two_uses_three_faces() {
        let mut scrambler = Scrambler::with_seed(PuzzleType::Cube2, 1).with_length(100);
        assert!(scrambler.next_moves().iter().all(|m| {
            m.width == 1
                && matches!(
                    m.target,
                    TurnTarget::Face(Face::R | Face::U | Face::F)
                )
        }));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let scrambler = Scrambler::with_seed(PuzzleType::Cube5, 99);
        assert_eq!(scrambler.puzzle(), PuzzleType::Cube5);
        assert_eq!(scrambler.length(), 60);

        let a = Scrambler::with_seed(PuzzleType::Cube5, 99).next_scramble();
        let b = Scrambler::with_seed(PuzzleType::Cube5, 99).next_scramble();
        assert_eq!(a, b);
    }
}
