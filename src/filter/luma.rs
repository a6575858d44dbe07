//! Luma projection for edge comparisons.

/// Perceptual luma weights (Rec. 601).
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Project a color to the scalar every edge/equality comparison runs on.
///
/// The gain is arbitrary on its own; it only rescales the classifier's
/// equality threshold. The value is never written to the output directly.
pub fn luma(color: [f32; 3], gain: f32) -> f32 {
    gain * (LUMA_R * color[0] + LUMA_G * color[1] + LUMA_B * color[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XBR_Y_WEIGHT;

    #[test]
    fn test_luma_white_equals_gain() {
        let y = luma([1.0, 1.0, 1.0], XBR_Y_WEIGHT);
        assert!((y - XBR_Y_WEIGHT).abs() < 1e-4);
    }

    #[test]
    fn test_luma_black_is_zero() {
        assert_eq!(luma([0.0, 0.0, 0.0], XBR_Y_WEIGHT), 0.0);
    }

    #[test]
    fn test_luma_green_dominates() {
        let g = XBR_Y_WEIGHT;
        assert!(luma([0.0, 1.0, 0.0], g) > luma([1.0, 0.0, 0.0], g));
        assert!(luma([1.0, 0.0, 0.0], g) > luma([0.0, 0.0, 1.0], g));
    }

    #[test]
    fn test_luma_scales_with_gain() {
        let color = [0.3, 0.6, 0.1];
        let at_one = luma(color, 1.0);
        let at_gain = luma(color, 48.0);
        assert!((at_gain - 48.0 * at_one).abs() < 1e-4);
    }
}
