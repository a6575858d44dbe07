//! xbrup - Edge-directed xBR upscaling for pixel art
//!
//! This library implements the single-pass xBR level-1 filter: an
//! edge-directed interpolation heuristic that upscales low-resolution pixel
//! art (an 8-bit handheld framebuffer, sprite sheets) without introducing
//! blur or stair-stepping on diagonal edges.
//!
//! The core is a pure, stateless per-pixel function ([`filter_pixel`]) over
//! a point-sampleable source ([`TexelSource`]); [`upscale`] drives it across
//! a whole image in parallel. See the [`filter`] module for the algorithm.

pub mod cli;
pub mod config;
pub mod filter;
pub mod output;
pub mod source;

pub use config::{XbrConfig, XBR_EQ_THRESHOLD, XBR_Y_WEIGHT};
pub use filter::{filter_pixel, upscale};
pub use source::TexelSource;
