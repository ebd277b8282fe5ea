use cube_sim::{Color, CubeModel, Face};
use itertools::Itertools;
use owo_colors::OwoColorize;

/// Draw the cube as a cross net: U on top, then L F R B, then D.
///
/// With `raw` the full simulated grid is drawn, including the hidden middle
/// layer of even puzzles.
pub fn render_net(model: &CubeModel, colored: bool, raw: bool) -> String {
    let (dim, faces) = if raw {
        (model.order(), model.state().faces().clone())
    } else {
        (model.size(), Face::ALL.map(|face| model.visible_face(face)))
    };

    let row = |face: Face, r: usize| {
        let stickers = &faces[face.index()][r * dim..(r + 1) * dim];
        if colored {
            stickers.iter().map(|&c| block(c)).join("")
        } else {
            stickers.iter().map(|c| c.letter()).join(" ")
        }
    };
    let width = if colored { 2 * dim } else { 2 * dim - 1 };
    let pad = " ".repeat(width + 1);

    let mut lines = vec![];
    for r in 0..dim {
        lines.push(format!("{pad}{}", row(Face::U, r)));
    }
    for r in 0..dim {
        lines.push(
            [Face::L, Face::F, Face::R, Face::B]
                .into_iter()
                .map(|face| row(face, r))
                .join(" "),
        );
    }
    for r in 0..dim {
        lines.push(format!("{pad}{}", row(Face::D, r)));
    }
    lines.join("\n")
}

fn block(color: Color) -> String {
    let (r, g, b) = color.rgb();
    "  ".on_truecolor(r, g, b).to_string()
}
