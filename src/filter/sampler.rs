//! Neighborhood sampling for the xBR filter.
//!
//! Each invocation reads a fixed pattern of 12 texels around the source
//! texel containing the evaluated coordinate. The pattern is written down
//! once, in multiples of two gradient steps `g1` (one texel toward the top
//! for the lower-right quadrant) and `g2` (one texel toward the left), and
//! reused for all four sub-texel quadrants by mirroring the steps through
//! the sign vector `dir`. That mirroring is what makes the filter
//! rotation/reflection-symmetric.

use crate::source::TexelSource;

/// The 12-texel neighborhood around an evaluated coordinate.
///
/// Layout for the lower-right quadrant (`dir = (+1, +1)`):
/// ```text
///      [ B][ C]
///  [ D][ E][ F][F4]
///  [ G][ H][ I][I4]
///      [H5][I5]
/// ```
///
/// `E` is the texel containing the coordinate. `B`/`D`/`F`/`H` are the
/// cardinal neighbors, `C`/`G`/`I` the corners the classifier compares
/// diagonals across, and `F4`/`I4`/`H5`/`I5` the one-texel-further
/// extensions used to corroborate edges. The other three quadrants see the
/// same pattern mirrored through `dir`.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub b: [f32; 3],
    pub c: [f32; 3],
    pub d: [f32; 3],
    pub e: [f32; 3],
    pub f: [f32; 3],
    pub g: [f32; 3],
    pub h: [f32; 3],
    pub i: [f32; 3],
    pub f4: [f32; 3],
    pub i4: [f32; 3],
    pub h5: [f32; 3],
    pub i5: [f32; 3],
    /// Quadrant sign vector, each component -1.0 or +1.0.
    pub dir: [f32; 2],
    /// Fractional position within the texel, centered to `[-0.5, 0.5)`.
    pub pos: [f32; 2],
}

/// Sample the 12-texel neighborhood at a normalized coordinate.
///
/// The coordinate is expected in `[0, 1]²`; offsets that land outside the
/// image clamp to the border texel.
pub fn sample_neighborhood<S: TexelSource>(source: &S, u: f32, v: f32) -> Neighborhood {
    let (width, height) = source.dimensions();
    let fx = u * width as f32;
    let fy = v * height as f32;
    let base_x = fx.floor() as i32;
    let base_y = fy.floor() as i32;

    let pos = [fx.fract() - 0.5, fy.fract() - 0.5];
    let dir = [sign_or_positive(pos[0]), sign_or_positive(pos[1])];

    // Gradient steps in whole texels: g1 moves one texel toward B (up for
    // dir.y = +1), g2 one texel toward D (left for dir.x = +1). Sampling in
    // integer steps keeps every fetch exactly nearest-texel.
    let sx = dir[0] as i32;
    let sy = dir[1] as i32;

    // Texel at `a` steps of g1 plus `b` steps of g2 from the center.
    let at = |a: i32, b: i32| source.texel(base_x - b * sx, base_y - a * sy);

    Neighborhood {
        e: at(0, 0),
        b: at(1, 0),
        c: at(1, -1),
        d: at(0, 1),
        f: at(0, -1),
        g: at(-1, 1),
        h: at(-1, 0),
        i: at(-1, -1),
        f4: at(0, -2),
        i4: at(-1, -2),
        h5: at(-2, 0),
        i5: at(-2, -1),
        dir,
        pos,
    }
}

/// Component-wise sign with 0 treated as +1.
///
/// `pos` sits strictly inside a texel in practice; forcing the degenerate 0
/// case positive keeps the sampling pattern well defined.
fn sign_or_positive(v: f32) -> f32 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}
