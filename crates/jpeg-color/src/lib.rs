//! Pixel representation and color space conversions
//!
//! This crate implements:
//! - `Pixel`, an immutable three-component sample tagged RGB or YCbCr
//! - RGB <-> YCbCr conversion with fixed studio-swing coefficients
//! - Batch conversion of interleaved buffers

pub mod pixel;
pub mod ycbcr;

pub use pixel::*;
pub use ycbcr::*;
