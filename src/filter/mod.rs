//! xBR-LV1 edge-directed upscaling filter.
//!
//! This module implements the single-pass xBR level-1 filter, which
//! upscales pixel art without blurring or stair-stepping diagonal edges.
//!
//! # Algorithm Overview
//!
//! Each output pixel is a pure function of a 12-texel neighborhood in the
//! source image, chained through four stages:
//!
//! 1. [`sampler`] - locate the sub-texel quadrant and fetch the neighborhood
//! 2. [`luma`] - project each texel to the scalar used for all comparisons
//! 3. [`classifier`] - decide whether a diagonal edge passes through the
//!    pixel, which diagonal, and which side the evaluation point is on
//! 4. [`selector`] - emit one of three candidates: the right or down
//!    neighbor when a correction applies, the untouched center otherwise
//!
//! No state is carried between invocations, so the driver parallelizes
//! freely across output rows.

pub mod classifier;
pub mod luma;
pub mod sampler;
pub mod selector;

use image::RgbaImage;
use rayon::prelude::*;

use crate::config::XbrConfig;
use crate::source::TexelSource;

pub use classifier::{EdgeVerdict, Lumas};
pub use sampler::{sample_neighborhood, Neighborhood};

/// Evaluate the filter at one normalized coordinate.
///
/// `(u, v)` is expected in `[0, 1]²`. Returns RGBA with channels in
/// `[0, 1]` and alpha fixed to 1.0.
pub fn filter_pixel<S: TexelSource>(source: &S, u: f32, v: f32, config: &XbrConfig) -> [f32; 4] {
    let n = sampler::sample_neighborhood(source, u, v);
    let lumas = classifier::Lumas::project(&n, config.luma_gain);
    let verdict = classifier::classify(&lumas, n.dir, n.pos, config.eq_threshold);
    selector::select_color(&verdict, &n, config)
}

/// Upscale an image by an integer factor with the xBR filter.
///
/// Evaluates [`filter_pixel`] at every output pixel center. Rows are
/// computed in parallel; every pixel is independent.
///
/// # Arguments
///
/// * `input` - The source image
/// * `factor` - Integer scale factor (1 reproduces the input)
/// * `config` - Filter configuration
///
/// # Returns
///
/// A new image at `factor` times the input dimensions.
pub fn upscale(input: &RgbaImage, factor: u32, config: &XbrConfig) -> RgbaImage {
    let (width, height) = input.dimensions();
    let out_w = width * factor;
    let out_h = height * factor;
    let mut output = RgbaImage::new(out_w, out_h);
    if out_w == 0 || out_h == 0 {
        return output;
    }

    let stride = out_w as usize * 4;
    output
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(oy, row)| {
            let v = (oy as f32 + 0.5) / out_h as f32;
            for ox in 0..out_w as usize {
                let u = (ox as f32 + 0.5) / out_w as f32;
                let rgba = filter_pixel(input, u, v, config);
                row[ox * 4] = to_channel(rgba[0]);
                row[ox * 4 + 1] = to_channel(rgba[1]);
                row[ox * 4 + 2] = to_channel(rgba[2]);
                row[ox * 4 + 3] = to_channel(rgba[3]);
            }
        });

    output
}

/// Quantize a `[0, 1]` channel to 8 bits.
fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_image(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.put_pixel(x, y, color);
            }
        }
        img
    }

    #[test]
    fn test_upscale_dimensions() {
        let input = RgbaImage::new(8, 6);
        let output = upscale(&input, 4, &XbrConfig::default());
        assert_eq!(output.dimensions(), (32, 24));
    }

    #[test]
    fn test_upscale_factor_one_passes_through() {
        let mut input = RgbaImage::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                input.put_pixel(x, y, Rgba([(x * 90) as u8, (y * 90) as u8, 40, 255]));
            }
        }

        let output = upscale(&input, 1, &XbrConfig::full_color());

        // At factor 1 every sample lands on a texel center: no correction.
        for (x, y, pixel) in output.enumerate_pixels() {
            assert_eq!(pixel, input.get_pixel(x, y));
        }
    }

    #[test]
    fn test_upscale_solid_color() {
        let color = Rgba([100, 150, 200, 255]);
        let input = solid_image(4, 4, color);

        let output = upscale(&input, 3, &XbrConfig::full_color());

        for pixel in output.pixels() {
            assert_eq!(*pixel, color);
        }
    }

    #[test]
    fn test_upscale_solid_color_mono() {
        let input = solid_image(2, 2, Rgba([100, 150, 200, 255]));

        let output = upscale(&input, 2, &XbrConfig::default());

        for pixel in output.pixels() {
            assert_eq!(*pixel, Rgba([100, 100, 100, 255]));
        }
    }

    #[test]
    fn test_upscale_empty_image() {
        let input = RgbaImage::new(0, 0);
        let output = upscale(&input, 4, &XbrConfig::default());
        assert_eq!(output.dimensions(), (0, 0));
    }

    #[test]
    fn test_upscale_alpha_opaque() {
        let input = solid_image(2, 2, Rgba([10, 20, 30, 0]));
        let output = upscale(&input, 2, &XbrConfig::full_color());
        for pixel in output.pixels() {
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_filter_pixel_flat_field_returns_center() {
        let input = solid_image(3, 3, Rgba([51, 102, 153, 255]));

        let rgba = filter_pixel(&input, 0.5, 0.5, &XbrConfig::full_color());

        assert!((rgba[0] - 51.0 / 255.0).abs() < 1e-4);
        assert!((rgba[1] - 102.0 / 255.0).abs() < 1e-4);
        assert!((rgba[2] - 153.0 / 255.0).abs() < 1e-4);
        assert_eq!(rgba[3], 1.0);
    }

    #[test]
    fn test_filter_pixel_corrects_diagonal() {
        // Black upper-left triangle against white: at the corner side of
        // the black texel on the boundary, the filter snaps to the white
        // diagonal neighbors.
        let black = Rgba([0, 0, 0, 255]);
        let white = Rgba([255, 255, 255, 255]);
        let mut input = RgbaImage::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                input.put_pixel(x, y, if x + y < 3 { black } else { white });
            }
        }

        // Texel (1, 1) is black; F, H, I and the extended samples are white.
        // Evaluate deep in its lower-right quadrant.
        let (u, v) = ((1.0 + 0.9) / 4.0, (1.0 + 0.9) / 4.0);
        let rgba = filter_pixel(&input, u, v, &XbrConfig::full_color());
        assert_eq!(rgba, [1.0, 1.0, 1.0, 1.0]);

        // The texel center is untouched.
        let rgba = filter_pixel(&input, 1.5 / 4.0, 1.5 / 4.0, &XbrConfig::full_color());
        assert_eq!(rgba, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_to_channel_rounds() {
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(1.0), 255);
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(to_channel(-1.0), 0);
        assert_eq!(to_channel(2.0), 255);
    }
}
