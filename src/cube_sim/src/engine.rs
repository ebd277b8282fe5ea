//! Clockwise quarter turns over the sticker grid.
//!
//! Every turn is a face rotation plus a set of 4-cycles through the rows and
//! columns of the four faces bordering the turning layer. All indices are
//! functions of the cube order alone, so nothing here can go out of bounds.

use crate::{
    color::Face,
    moves::TurnTarget,
    state::CubeState,
};

impl CubeState {
    /// Apply one clockwise quarter turn of `target`. Face turns move `width`
    /// layers, clamped to `1..=order`; the middle slice ignores `width`.
    pub(crate) fn quarter_turn(&mut self, target: TurnTarget, width: usize) {
        let n = self.order();
        match target {
            TurnTarget::Face(face) => {
                let width = width.clamp(1, n);
                self.rotate_face_pieces_cw(face);
                for depth in 0..width {
                    self.cycle_layer(face, depth);
                }
                if width == n {
                    // The far face is clockwise from this side, anticlockwise from its own
                    for _ in 0..3 {
                        self.rotate_face_pieces_cw(face.opposite());
                    }
                }
            }
            TurnTarget::MiddleSlice => self.cycle_layer(Face::L, n / 2),
        }
    }

    /// Rotate the stickers of `face` a quarter turn clockwise as seen from
    /// outside: the sticker at (r, c) moves to (c, n-1-r).
    ///
    /// Works ring by ring from the outside in. Ring `j` is cycled with `n-1-2j`
    /// 4-cycles, one per position along its top edge excluding the last
    /// corner. The center of an odd face stays put.
    pub(crate) fn rotate_face_pieces_cw(&mut self, face: Face) {
        let n = self.order();
        for j in 0..n / 2 {
            let last = n - 1 - j;
            for i in 0..n - 1 - 2 * j {
                self.cycle4([
                    (face, self.idx(j, j + i)),
                    (face, self.idx(j + i, last)),
                    (face, self.idx(last, last - i)),
                    (face, self.idx(last - i, j)),
                ]);
            }
        }
    }

    /// Cycle the stickers of the layer `depth` layers behind `face` (0 is the
    /// outer layer) across the four bordering faces, in the direction of a
    /// clockwise turn of `face`.
    pub(crate) fn cycle_layer(&mut self, face: Face, depth: usize) {
        let n = self.order();
        let k = depth;
        let far = n - 1 - k;
        for i in 0..n {
            let rev = n - 1 - i;
            let cells = match face {
                Face::U => [
                    (Face::F, self.idx(k, i)),
                    (Face::L, self.idx(k, i)),
                    (Face::B, self.idx(k, i)),
                    (Face::R, self.idx(k, i)),
                ],
                Face::D => [
                    (Face::F, self.idx(far, i)),
                    (Face::R, self.idx(far, i)),
                    (Face::B, self.idx(far, i)),
                    (Face::L, self.idx(far, i)),
                ],
                Face::R => [
                    (Face::F, self.idx(i, far)),
                    (Face::U, self.idx(i, far)),
                    (Face::B, self.idx(rev, k)),
                    (Face::D, self.idx(i, far)),
                ],
                Face::L => [
                    (Face::U, self.idx(i, k)),
                    (Face::F, self.idx(i, k)),
                    (Face::D, self.idx(i, k)),
                    (Face::B, self.idx(rev, far)),
                ],
                Face::F => [
                    (Face::U, self.idx(far, i)),
                    (Face::R, self.idx(i, k)),
                    (Face::D, self.idx(k, rev)),
                    (Face::L, self.idx(rev, far)),
                ],
                Face::B => [
                    (Face::U, self.idx(k, i)),
                    (Face::L, self.idx(rev, k)),
                    (Face::D, self.idx(far, rev)),
                    (Face::R, self.idx(i, far)),
                ],
            };
            self.cycle4(cells);
        }
    }
}
