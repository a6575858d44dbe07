//! Filter configuration and tuning constants.
//!
//! All comparisons inside the edge classifier are relative: the luma gain
//! only rescales the equality threshold, so the ratio `eq_threshold /
//! luma_gain` is what actually changes behavior. The defaults reproduce the
//! reference filter exactly.

use serde::{Deserialize, Serialize};

/// Gain applied to the luma projection of every sampled texel.
pub const XBR_Y_WEIGHT: f32 = 48.0;

/// Two lumas closer than this (at [`XBR_Y_WEIGHT`] gain) compare as equal.
pub const XBR_EQ_THRESHOLD: f32 = 15.0;

/// Configuration for the xBR filter.
///
/// Can be constructed directly, deserialized from JSON, or assembled from
/// CLI flags. Missing fields fall back to the reference values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct XbrConfig {
    /// Gain applied to the luma projection (default: 48.0).
    #[serde(default = "default_luma_gain")]
    pub luma_gain: f32,

    /// Absolute luma difference below which two texels compare as equal
    /// (default: 15.0). Strict `<` at the boundary.
    #[serde(default = "default_eq_threshold")]
    pub eq_threshold: f32,

    /// Replicate the selected color's red channel into green and blue
    /// before emitting (default: true).
    ///
    /// The reference filter runs against a single-channel (R8) framebuffer
    /// texture where only red carries data, so the replication is how the
    /// grayscale picture is reconstructed. Disable for RGB sources to pass
    /// the selected color through unchanged.
    #[serde(default = "default_true")]
    pub mono_output: bool,
}

impl Default for XbrConfig {
    fn default() -> Self {
        Self {
            luma_gain: XBR_Y_WEIGHT,
            eq_threshold: XBR_EQ_THRESHOLD,
            mono_output: true,
        }
    }
}

/// Default luma gain for serde
fn default_luma_gain() -> f32 {
    XBR_Y_WEIGHT
}

/// Default equality threshold for serde
fn default_eq_threshold() -> f32 {
    XBR_EQ_THRESHOLD
}

/// Default true value for serde
fn default_true() -> bool {
    true
}

impl XbrConfig {
    /// Create a config that emits the selected color's true channels
    /// instead of replicating red.
    pub fn full_color() -> Self {
        Self { mono_output: false, ..Default::default() }
    }
}
