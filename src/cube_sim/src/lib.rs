#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Sticker-level simulation of NxNxN cubes.
//!
//! A [`CubeModel`] owns the sticker grid of one puzzle and applies move
//! notation such as `"R U R' U'"` or `"3Rw2"` to it. Even puzzles are
//! simulated one order larger, with a hidden middle layer that is never shown.

pub mod catalog;
pub mod color;
mod engine;
pub mod model;
pub mod moves;
pub mod scrambler;
pub mod state;

pub use catalog::{PuzzleType, UnknownPuzzleType};
pub use color::{Color, Face};
pub use model::CubeModel;
pub use moves::{Move, MoveParseError, TurnTarget, invert_sequence, parse_sequence};
pub use scrambler::Scrambler;
pub use state::CubeState;
