//! Point-sampled access to source images.
//!
//! The filter never owns the image it reads; it only needs the pixel
//! dimensions and exact nearest-texel fetches with clamp-to-edge borders.
//! Any smoothing in the underlying sampler would corrupt the edge detector,
//! so the contract is integer texel coordinates, no filtering.

use image::RgbaImage;

/// A source image the filter can point-sample.
///
/// Out-of-range coordinates must clamp to the nearest edge texel (replicate
/// borders). This is an everyday case for the extended neighbor offsets near
/// image boundaries, never an error.
pub trait TexelSource {
    /// Pixel dimensions of the source, `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// RGB texel at integer coordinates, channels in `[0, 1]`.
    fn texel(&self, x: i32, y: i32) -> [f32; 3];
}

impl TexelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn texel(&self, x: i32, y: i32) -> [f32; 3] {
        let cx = x.clamp(0, self.width() as i32 - 1) as u32;
        let cy = y.clamp(0, self.height() as i32 - 1) as u32;
        let p = self.get_pixel(cx, cy);
        [
            p[0] as f32 / 255.0,
            p[1] as f32 / 255.0,
            p[2] as f32 / 255.0,
        ]
    }
}
