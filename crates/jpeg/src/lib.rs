//! # Block DCT core for JPEG-style compression
//!
//! This crate provides the transform and color stages of a block-based image
//! codec: everything between "an RGB raster" and "per-block frequency
//! coefficients". Quantization, zigzag ordering and entropy coding are left to
//! the caller.
//!
//! ## Quick Start
//!
//! ### Transforming a single block
//!
//! ```
//! use jpeg::{forward_dct, inverse_dct, Grid, TransformOptions};
//!
//! let block = Grid::filled(8, 8, 16.0f64).unwrap();
//! let options = TransformOptions::default();
//!
//! let coeffs = forward_dct(&block, &options);
//! assert!((coeffs[(0, 0)] - 128.0).abs() < 1e-9);
//!
//! let restored = inverse_dct(&coeffs, &options);
//! assert!(block.max_abs_diff(&restored).unwrap() < 1e-9);
//! ```
//!
//! ### Round-tripping an image
//!
//! ```
//! use jpeg::{reconstruct_raster, transform_raster, Raster};
//!
//! let raster = Raster::from_bytes(vec![200; 10 * 6 * 3], 10, 6, 30).unwrap();
//! let coefficients = transform_raster(&raster).unwrap();
//! assert_eq!(coefficients.block_count(), 2);
//!
//! let restored = reconstruct_raster(&coefficients).unwrap();
//! assert_eq!(restored.dimensions(), raster.dimensions());
//! ```
//!
//! ## Architecture
//!
//! - `jpeg-core`: errors, grids, rasters and shared types
//! - `jpeg-color`: `Pixel` and RGB <-> YCbCr conversion
//! - `jpeg-transform`: orthonormal and classic 2D DCT, partitioned across threads
//! - `jpeg-image`: the block-padded `Matrix`

pub mod pipeline;

// Re-export core types
pub use jpeg_core::{
    consts, Channel, Dimensions, Grid, JpegError, JpegResult, PixelFormat, Raster, RasterFormat,
    Scalar,
};

// Re-export color
pub use jpeg_color::{rgb_to_ycbcr, ycbcr_to_rgb, Pixel};

// Re-export transforms
pub use jpeg_transform::{
    classic_forward_dct, classic_inverse_dct, dct_channel, forward_dct, forward_dct_serial,
    idct_channel, inverse_dct, inverse_dct_serial, partition_ranges, ClassicDct, OrthonormalDct,
    Transform2d, TransformOptions,
};

// Re-export image storage
pub use jpeg_image::{clamp_to_byte, padded_size, Matrix};

pub use pipeline::{
    reconstruct_raster, transform_raster, BlockCoefficients, ImageCoefficients, ImageTransformer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
