//! Constants shared by the block transform crates

/// Edge length of a transform block in pixels
pub const BLOCK_SIZE: usize = 8;

/// Number of samples in one block
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Offset subtracted from 8-bit-range samples before the forward DCT
pub const LEVEL_SHIFT: f64 = 128.0;

/// Bytes per pixel of an interleaved 8-bit RGB raster
pub const RGB24_BYTES_PER_PIXEL: usize = 3;

/// Largest value a raster byte can hold, as a float
pub const MAX_SAMPLE_VALUE: f32 = 255.0;
