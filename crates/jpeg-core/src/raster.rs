//! Byte rasters exchanged with external image loaders and writers

use crate::consts::RGB24_BYTES_PER_PIXEL;
use crate::{Dimensions, JpegError, JpegResult};

/// Pixel layout of a raster buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RasterFormat {
    /// Interleaved 8-bit R, G, B
    Rgb24,
}

impl RasterFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            RasterFormat::Rgb24 => RGB24_BYTES_PER_PIXEL,
        }
    }
}

/// Row-strided 8-bit image buffer
///
/// The layout is validated once at construction so per-pixel access can
/// index the buffer without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    data: Vec<u8>,
    dimensions: Dimensions,
    stride: usize,
    format: RasterFormat,
}

impl Raster {
    /// Zeroed raster with a tight stride
    pub fn new(width: usize, height: usize) -> JpegResult<Self> {
        let stride = width * RGB24_BYTES_PER_PIXEL;
        Self::from_bytes(vec![0; stride * height], width, height, stride)
    }

    /// Wrap an RGB24 buffer with the given stride in bytes
    pub fn from_bytes(data: Vec<u8>, width: usize, height: usize, stride: usize) -> JpegResult<Self> {
        let format = RasterFormat::Rgb24;
        if width == 0 || height == 0 {
            return Err(JpegError::InvalidDimensions { width, height });
        }

        let row_bytes = width * format.bytes_per_pixel();
        if stride < row_bytes {
            return Err(JpegError::InvalidParameter(format!(
                "stride {stride} is shorter than a row of {row_bytes} bytes"
            )));
        }

        // The last row does not need trailing stride padding.
        let expected = stride * (height - 1) + row_bytes;
        if data.len() < expected {
            return Err(JpegError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            dimensions: Dimensions::new(width, height),
            stride,
            format,
        })
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn format(&self) -> RasterFormat {
        self.format
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Pixel bytes of row `y`, without stride padding
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width() * self.format.bytes_per_pixel()]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let len = self.width() * self.format.bytes_per_pixel();
        &mut self.data[start..start + len]
    }

    /// R, G, B bytes at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let row = self.row(y);
        let i = x * RGB24_BYTES_PER_PIXEL;
        [row[i], row[i + 1], row[i + 2]]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = x * RGB24_BYTES_PER_PIXEL;
        self.row_mut(y)[i..i + RGB24_BYTES_PER_PIXEL].copy_from_slice(&rgb);
    }
}
