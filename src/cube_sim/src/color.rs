use std::fmt::{self, Display};

/// A sticker color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Orange,
    Green,
    Red,
    Blue,
    Yellow,
    /// Neutral placeholder for masked or illustrative states. Move application
    /// never produces it.
    Gray,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::White,
        Color::Orange,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Gray,
    ];

    /// The single-letter abbreviation used by the letter net.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Gray => '.',
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (255, 255, 255),
            Color::Orange => (255, 128, 0),
            Color::Green => (0, 255, 0),
            Color::Red => (255, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Yellow => (255, 255, 0),
            Color::Gray => (127, 127, 127),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the six outer faces. The discriminant is the face's index in the
/// sticker state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    U = 0,
    L = 1,
    F = 2,
    R = 3,
    B = 4,
    D = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The color every sticker of this face has when the cube is solved.
    pub fn solved_color(self) -> Color {
        SOLVED_COLORS[self.index()]
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// Faces on the same axis share an axis index.
    pub fn axis(self) -> usize {
        match self {
            Face::U | Face::D => 0,
            Face::L | Face::R => 1,
            Face::F | Face::B => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

const SOLVED_COLORS: [Color; 6] = [
    Color::White,
    Color::Orange,
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::Yellow,
];
