//! Final pixel selection.

use super::classifier::EdgeVerdict;
use super::sampler::Neighborhood;
use crate::config::XbrConfig;

/// Pick the output color from the classifier's verdict.
///
/// With a detected correction the pixel takes the better-matching of the
/// right (`F`) and down (`H`) neighbors; otherwise the center passes through
/// untouched. Alpha is fixed opaque.
///
/// When `mono_output` is set the red channel is replicated into green and
/// blue, matching the reference filter's single-channel framebuffer (see
/// [`XbrConfig::mono_output`]).
pub fn select_color(verdict: &EdgeVerdict, n: &Neighborhood, config: &XbrConfig) -> [f32; 4] {
    let rgb = if verdict.nc {
        if verdict.px {
            n.f
        } else {
            n.h
        }
    } else {
        n.e
    };

    if config.mono_output {
        [rgb[0], rgb[0], rgb[0], 1.0]
    } else {
        [rgb[0], rgb[1], rgb[2], 1.0]
    }
}
