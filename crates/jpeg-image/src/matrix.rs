//! Pixel matrix padded to whole transform blocks

use jpeg_color::Pixel;
use jpeg_core::consts::{BLOCK_SIZE, MAX_SAMPLE_VALUE};
use jpeg_core::{Dimensions, JpegError, JpegResult, Raster};

/// Round `n` up to the next multiple of the block size
pub fn padded_size(n: usize) -> usize {
    n.next_multiple_of(BLOCK_SIZE)
}

/// Clamp a channel value into a raster byte
///
/// Values below zero become 0, values above 255 become 255, everything else
/// is truncated toward zero. NaN maps to 0.
pub fn clamp_to_byte(value: f32) -> u8 {
    if value < 0.0 {
        0
    } else if value > MAX_SAMPLE_VALUE {
        u8::MAX
    } else {
        value as u8
    }
}

/// Row-major pixel store whose sides are multiples of the block size
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    height: usize,
    width: usize,
    original: Dimensions,
    pixels: Vec<Pixel>,
}

impl Matrix {
    /// Matrix of at least `height x width` pixels, filled with black
    pub fn new(height: usize, width: usize) -> Self {
        let padded_height = padded_size(height);
        let padded_width = padded_size(width);

        Self {
            height: padded_height,
            width: padded_width,
            original: Dimensions::new(width, height),
            pixels: vec![Pixel::black(); padded_height * padded_width],
        }
    }

    /// Padded height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Padded width
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Size requested at construction, before padding
    pub fn original_dimensions(&self) -> Dimensions {
        self.original
    }

    pub fn blocks_x(&self) -> usize {
        self.width / BLOCK_SIZE
    }

    pub fn blocks_y(&self) -> usize {
        self.height / BLOCK_SIZE
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn offset(&self, row: usize, col: usize) -> JpegResult<usize> {
        if row >= self.height || col >= self.width {
            return Err(JpegError::IndexOutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> JpegResult<Pixel> {
        let offset = self.offset(row, col)?;
        Ok(self.pixels[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> JpegResult<()> {
        let offset = self.offset(row, col)?;
        self.pixels[offset] = pixel;
        Ok(())
    }

    /// Copy a raster into a new matrix; padding stays black
    pub fn from_raster(raster: &Raster) -> Self {
        let mut matrix = Self::new(raster.height(), raster.width());
        let width = matrix.width;

        for y in 0..raster.height() {
            let dst = &mut matrix.pixels[y * width..y * width + raster.width()];
            for (pixel, rgb) in dst.iter_mut().zip(raster.row(y).chunks_exact(3)) {
                *pixel = Pixel::rgb(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32);
            }
        }

        log::debug!(
            "Loaded {}x{} raster into {}x{} matrix",
            raster.width(),
            raster.height(),
            matrix.width,
            matrix.height
        );
        matrix
    }

    /// Export the top-left `height x width` region as an RGB raster
    pub fn to_raster(&self, height: usize, width: usize) -> JpegResult<Raster> {
        if height == 0 || width == 0 || height > self.height || width > self.width {
            return Err(JpegError::InvalidDimensions { width, height });
        }

        let mut raster = Raster::new(width, height)?;
        for y in 0..height {
            let src = &self.pixels[y * self.width..y * self.width + width];
            for (rgb, pixel) in raster.row_mut(y).chunks_exact_mut(3).zip(src) {
                rgb[0] = clamp_to_byte(pixel.r());
                rgb[1] = clamp_to_byte(pixel.g());
                rgb[2] = clamp_to_byte(pixel.b());
            }
        }
        Ok(raster)
    }

    /// Export the region requested at construction
    pub fn to_original_raster(&self) -> JpegResult<Raster> {
        self.to_raster(self.original.height, self.original.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jpeg_core::PixelFormat;

    #[test]
    fn test_padding() {
        for (requested, padded) in [(0, 0), (1, 8), (7, 8), (8, 8), (9, 16), (64, 64), (65, 72)] {
            assert_eq!(padded_size(requested), padded, "padding of {}", requested);
        }

        let matrix = Matrix::new(13, 20);
        assert_eq!((matrix.height(), matrix.width()), (16, 24));
        assert_eq!(matrix.original_dimensions(), Dimensions::new(20, 13));
        assert_eq!((matrix.blocks_y(), matrix.blocks_x()), (2, 3));
    }

    #[test]
    fn test_new_matrix_is_black() {
        let matrix = Matrix::new(3, 5);
        assert_eq!(matrix.pixels().len(), 64);
        assert!(matrix
            .pixels()
            .iter()
            .all(|p| p.format() == PixelFormat::Rgb && p.components() == [0.0; 3]));
    }

    #[test]
    fn test_bounds_check() {
        let mut matrix = Matrix::new(16, 24);
        assert_eq!(
            matrix.get(16, 0).unwrap_err(),
            JpegError::IndexOutOfRange {
                row: 16,
                col: 0,
                height: 16,
                width: 24
            }
        );
        assert!(matches!(
            matrix.get(0, 24),
            Err(JpegError::IndexOutOfRange { col: 24, .. })
        ));
        assert!(matrix.set(20, 3, Pixel::black()).is_err());
        assert!(matrix.get(15, 23).is_ok());
    }

    #[test]
    fn test_set_then_get() {
        let mut matrix = Matrix::new(8, 8);
        let pixel = Pixel::ycbcr(100.0, 120.0, 130.0);
        matrix.set(3, 6, pixel).unwrap();
        assert_eq!(matrix.get(3, 6).unwrap(), pixel);
        assert_eq!(matrix.get(6, 3).unwrap(), Pixel::black());
    }

    #[test]
    fn test_clamp_to_byte() {
        assert_eq!(clamp_to_byte(-5.0), 0);
        assert_eq!(clamp_to_byte(300.0), 255);
        assert_eq!(clamp_to_byte(127.9), 127);
        assert_eq!(clamp_to_byte(255.0), 255);
        assert_eq!(clamp_to_byte(f32::NAN), 0);
    }

    #[test]
    fn test_raster_export_clamps() {
        let mut matrix = Matrix::new(1, 1);
        matrix.set(0, 0, Pixel::rgb(-5.0, 300.0, 127.9)).unwrap();
        let raster = matrix.to_raster(1, 1).unwrap();
        assert_eq!(raster.as_bytes(), &[0, 255, 127]);
    }

    #[test]
    fn test_raster_roundtrip_with_stride() {
        // 3x2 raster with 4 bytes of row padding
        let mut data = Vec::new();
        for y in 0..2u8 {
            for x in 0..3u8 {
                data.extend_from_slice(&[x * 10, y * 20, x + y]);
            }
            data.extend_from_slice(&[0xAA; 4]);
        }
        let raster = Raster::from_bytes(data, 3, 2, 13).unwrap();

        let matrix = Matrix::from_raster(&raster);
        assert_eq!((matrix.height(), matrix.width()), (8, 8));
        assert_eq!(matrix.get(1, 2).unwrap(), Pixel::rgb(20.0, 20.0, 3.0));
        assert_eq!(matrix.get(1, 3).unwrap(), Pixel::black());
        assert_eq!(matrix.get(2, 0).unwrap(), Pixel::black());

        let exported = matrix.to_original_raster().unwrap();
        assert_eq!(exported.dimensions(), Dimensions::new(3, 2));
        for y in 0..2 {
            assert_eq!(exported.row(y), raster.row(y));
        }
    }

    #[test]
    fn test_export_region_must_fit() {
        let matrix = Matrix::new(8, 8);
        assert!(matches!(
            matrix.to_raster(9, 8),
            Err(JpegError::InvalidDimensions { width: 8, height: 9 })
        ));
        assert!(matrix.to_raster(0, 8).is_err());
    }
}
