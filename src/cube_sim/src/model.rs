use itertools::Itertools;
use log::{debug, trace};

use crate::{
    catalog::PuzzleType,
    color::{Color, Face},
    moves::{Move, TurnTarget},
    state::CubeState,
};

/// A simulated cube puzzle that move sequences can be applied to.
///
/// Even puzzles are simulated one order larger with a hidden middle layer.
/// [`CubeModel::state`] exposes the full simulated grid, while
/// [`CubeModel::visible_face`] shows only what a renderer should draw.
#[derive(Clone, Debug)]
pub struct CubeModel {
    puzzle: PuzzleType,
    state: CubeState,
}

impl CubeModel {
    /// Create a solved model of `puzzle` and apply `scramble` to it.
    pub fn new(scramble: &str, puzzle: PuzzleType) -> CubeModel {
        let mut model = CubeModel {
            puzzle,
            state: CubeState::solved(puzzle.model_order()),
        };
        if !scramble.trim().is_empty() {
            model.scramble(scramble);
        }
        model
    }

    pub fn puzzle(&self) -> PuzzleType {
        self.puzzle
    }

    /// The edge length of the physical puzzle.
    pub fn size(&self) -> usize {
        self.puzzle.size()
    }

    /// The order of the simulated grid, always odd.
    pub fn order(&self) -> usize {
        self.state.order()
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Reset to solved and apply every whitespace separated move of
    /// `sequence`. Unrecognized tokens are skipped.
    pub fn scramble(&mut self, sequence: &str) -> &CubeState {
        self.reset();
        for token in sequence.split_whitespace() {
            self.do_move(token);
        }
        &self.state
    }

    /// Apply a single move token to the current state. Unrecognized tokens
    /// leave the state untouched.
    pub fn do_move(&mut self, token: &str) {
        match token.parse::<Move>() {
            Ok(move_) => self.apply_move(move_),
            Err(e) => debug!(target: "cube_model", "Ignoring move {token:?}: {e}"),
        }
    }

    pub fn apply_move(&mut self, move_: Move) {
        let width = self.model_width(move_);
        trace!(
            target: "cube_model",
            "Applying {move_}: order={} width={width} quarter_turns={}",
            self.order(),
            move_.quarter_turns
        );
        for _ in 0..move_.quarter_turns {
            self.state.quarter_turn(move_.target, width);
        }
    }

    pub fn apply_moves(&mut self, moves: impl IntoIterator<Item = Move>) {
        for move_ in moves {
            self.apply_move(move_);
        }
    }

    /// The stickers of `face` as the physical puzzle shows them, row-major
    /// over `size()` rows and columns.
    pub fn visible_face(&self, face: Face) -> Vec<Color> {
        let order = self.order();
        let hidden = self.hidden_layer();
        let stickers = self.state.face(face);
        (0..order)
            .filter(|&r| Some(r) != hidden)
            .flat_map(|r| {
                (0..order)
                    .filter(move |&c| Some(c) != hidden)
                    .map(move |c| stickers[r * order + c])
            })
            .collect()
    }

    /// Whether the visible puzzle is solved. Turns of the hidden middle layer
    /// of an even puzzle can't be seen and don't count.
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .into_iter()
            .all(|face| self.visible_face(face).iter().all_equal())
    }

    fn hidden_layer(&self) -> Option<usize> {
        (self.size() != self.order()).then_some(self.order() / 2)
    }

    /// Translate the physical layer count of a move into model layers. On even
    /// puzzles a block reaching past the middle also carries the hidden layer.
    fn model_width(&self, move_: Move) -> usize {
        match move_.target {
            TurnTarget::Face(_) if self.hidden_layer().is_some() && move_.width > self.size() / 2 => {
                move_.width + 1
            }
            _ => move_.width,
        }
    }
}

impl Default for CubeModel {
    fn default() -> Self {
        CubeModel::new("", PuzzleType::default())
    }
}
