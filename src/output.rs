//! PNG input/output and file path generation

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbaImage;
use thiserror::Error;

/// Error type for image I/O operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Load an image file as RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage, OutputError> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}

/// Save an RGBA image to a PNG file, creating parent directories if needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Scale an image by an integer factor using nearest-neighbor interpolation.
///
/// The reference baseline next to the xBR filter: crisp blocks, no edge
/// smoothing.
pub fn scale_nearest(image: &RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image.clone();
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(image, w * factor, h * factor, FilterType::Nearest)
}

/// Generate the default output path: `{input}_x{scale}.png`.
pub fn generate_output_path(input: &Path, scale: u32) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{}_x{}.png", stem, scale);
    input.with_file_name(name)
}
