use std::fmt::{self, Display};

use itertools::Itertools;

use crate::color::{Color, Face};

/// A sticker cell: a face and the row-major index of a sticker on it.
pub(crate) type Cell = (Face, usize);

/// The sticker grid of an order-N cube: six faces of N² stickers each.
///
/// Each face is stored as seen from outside the cube in the standard cross
/// net. Row 0 of U borders B, row 0 of L, F, R and B borders U, and row 0 of
/// D borders F. Column 0 of U, F and D borders L, column 0 of L borders B,
/// column 0 of R borders F and column 0 of B borders R.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CubeState {
    order: usize,
    faces: [Vec<Color>; 6],
}

impl CubeState {
    pub(crate) fn solved(order: usize) -> CubeState {
        CubeState {
            order,
            faces: Face::ALL.map(|face| vec![face.solved_color(); order * order]),
        }
    }

    /// Overwrite every face with its solved color.
    pub fn reset(&mut self) {
        for face in Face::ALL {
            self.faces[face.index()].fill(face.solved_color());
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// The stickers of `face` in row-major order.
    pub fn face(&self, face: Face) -> &[Color] {
        &self.faces[face.index()]
    }

    pub fn faces(&self) -> &[Vec<Color>; 6] {
        &self.faces
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the order of the cube.
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Color {
        assert!(row < self.order && col < self.order);
        self.faces[face.index()][row * self.order + col]
    }

    /// Whether every face is a single color. Whole-cube rotations of a solved
    /// cube count as solved.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| face.iter().all_equal())
    }

    /// How many stickers of each color are on the cube, indexed like
    /// [`Color::ALL`].
    pub fn color_counts(&self) -> [usize; 7] {
        Color::ALL.map(|color| {
            self.faces
                .iter()
                .flatten()
                .filter(|&&sticker| sticker == color)
                .count()
        })
    }

    pub(crate) fn idx(&self, row: usize, col: usize) -> usize {
        row * self.order + col
    }

    pub(crate) fn get(&self, (face, index): Cell) -> Color {
        self.faces[face.index()][index]
    }

    pub(crate) fn set(&mut self, (face, index): Cell, color: Color) {
        self.faces[face.index()][index] = color;
    }

    /// Rotate the values of four cells: `a` moves into `b`, `b` into `c`,
    /// `c` into `d` and `d` into `a`.
    pub(crate) fn cycle4(&mut self, [a, b, c, d]: [Cell; 4]) {
        let tmp = self.get(d);
        self.set(d, self.get(c));
        self.set(c, self.get(b));
        self.set(b, self.get(a));
        self.set(a, tmp);
    }
}

impl Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.order;
        let row = |face: Face, r: usize| {
            self.face(face)[r * n..(r + 1) * n]
                .iter()
                .map(|color| color.letter())
                .collect::<String>()
        };
        let pad = " ".repeat(n + 1);

        for r in 0..n {
            writeln!(f, "{pad}{}", row(Face::U, r))?;
        }
        for r in 0..n {
            writeln!(
                f,
                "{}",
                [Face::L, Face::F, Face::R, Face::B]
                    .into_iter()
                    .map(|face| row(face, r))
                    .join(" ")
            )?;
        }
        for r in 0..n {
            writeln!(f, "{pad}{}", row(Face::D, r))?;
        }
        Ok(())
    }
}
