//! Edge classification over the sampled neighborhood.
//!
//! All decisions run on the luma projections of the 12 sampled texels. The
//! classifier first checks whether interpolation is licensed at all (flat
//! gradients and isolated noise must pass through untouched), then compares
//! the cost of reading the local structure as one diagonal versus the other.

use super::luma::luma;
use super::sampler::Neighborhood;

/// Luma projections of the 12 sampled texels.
#[derive(Debug, Clone, Copy)]
pub struct Lumas {
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
    pub g: f32,
    pub h: f32,
    pub i: f32,
    pub f4: f32,
    pub i4: f32,
    pub h5: f32,
    pub i5: f32,
}

impl Lumas {
    /// Project every texel of a neighborhood at the given gain.
    pub fn project(n: &Neighborhood, gain: f32) -> Self {
        Self {
            b: luma(n.b, gain),
            c: luma(n.c, gain),
            d: luma(n.d, gain),
            e: luma(n.e, gain),
            f: luma(n.f, gain),
            g: luma(n.g, gain),
            h: luma(n.h, gain),
            i: luma(n.i, gain),
            f4: luma(n.f4, gain),
            i4: luma(n.i4, gain),
            h5: luma(n.h5, gain),
            i5: luma(n.i5, gain),
        }
    }
}

/// The classifier's verdict for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeVerdict {
    /// A diagonal edge was detected through this pixel.
    pub edr: bool,
    /// The evaluation point lies on the corner side of the detected edge.
    pub fx: bool,
    /// Tie-break between the two correction candidates: F if true, H if not.
    pub px: bool,
    /// Apply the correction (`edr && fx`).
    pub nc: bool,
}

/// Whether two lumas compare as equal. Strict `<` at the threshold.
fn eq(a: f32, b: f32, threshold: f32) -> bool {
    (a - b).abs() < threshold
}

/// Asymmetric difference metric used to score a diagonal interpretation.
///
/// The final pair is weighted 4x, biasing toward the straight (non-diagonal)
/// reading unless the diagonal signal is strong.
fn weighted_distance(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32) -> f32 {
    (a - b).abs() + (a - c).abs() + (d - e).abs() + (d - f).abs() + 4.0 * (g - h).abs()
}

/// Interpolation license: suppresses corrections on flat gradients and
/// false edges from noise.
///
/// The center must differ from both its right and down neighbors, and the
/// 2x2 block must be corroborated by structure further out: a neighbor that
/// breaks from the row above, an extended run matching the far samples, or
/// the center repeating on a corner.
fn interp_restriction_lv1(l: &Lumas, threshold: f32) -> bool {
    let eq = |a: f32, b: f32| eq(a, b, threshold);

    !eq(l.e, l.f)
        && !eq(l.e, l.h)
        && ((!eq(l.f, l.b) && !eq(l.f, l.c))
            || (!eq(l.h, l.d) && !eq(l.h, l.g))
            || (eq(l.e, l.i)
                && ((!eq(l.f, l.f4) && !eq(l.f, l.i4))
                    || (!eq(l.h, l.h5) && !eq(l.h, l.i5))))
            || eq(l.e, l.g)
            || eq(l.e, l.c))
}

/// Classify the neighborhood: detect a diagonal edge and decide whether the
/// evaluation point takes the corrected pixel.
///
/// `dir` and `pos` are the sign vector and centered fractional position from
/// the sampler; they place the verdict within the texel's four quadrants so
/// the output varies smoothly instead of snapping per texel.
pub fn classify(l: &Lumas, dir: [f32; 2], pos: [f32; 2], threshold: f32) -> EdgeVerdict {
    // Cost of the edge running E->I versus H->F; the cheaper reading wins.
    let cost_ei = weighted_distance(l.e, l.c, l.g, l.i, l.h5, l.f4, l.h, l.f);
    let cost_hf = weighted_distance(l.h, l.d, l.i5, l.f, l.i4, l.b, l.e, l.i);

    let edr = cost_ei < cost_hf && interp_restriction_lv1(l, threshold);
    let fx = dir[0] * pos[0] + dir[1] * pos[1] > 0.5;
    let px = (l.e - l.f).abs() <= (l.e - l.h).abs();
    let nc = edr && fx;

    EdgeVerdict { edr, fx, px, nc }
}
