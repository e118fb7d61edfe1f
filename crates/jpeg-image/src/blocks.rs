//! Moving single blocks between a matrix and transform grids

use jpeg_color::Pixel;
use jpeg_core::consts::BLOCK_SIZE;
use jpeg_core::{Channel, Grid, JpegError, JpegResult, PixelFormat};

use crate::Matrix;

impl Matrix {
    fn block_origin(&self, block_row: usize, block_col: usize) -> JpegResult<(usize, usize)> {
        let row = block_row * BLOCK_SIZE;
        let col = block_col * BLOCK_SIZE;
        if block_row >= self.blocks_y() || block_col >= self.blocks_x() {
            return Err(JpegError::IndexOutOfRange {
                row,
                col,
                height: self.height(),
                width: self.width(),
            });
        }
        Ok((row, col))
    }

    /// One channel of one block, with `level_shift` subtracted from every sample
    pub fn channel_block(
        &self,
        block_row: usize,
        block_col: usize,
        channel: Channel,
        level_shift: f64,
    ) -> JpegResult<Grid<f64>> {
        let (row0, col0) = self.block_origin(block_row, block_col)?;
        let pixels = self.pixels();
        let width = self.width();

        Grid::from_fn(BLOCK_SIZE, BLOCK_SIZE, |r, c| {
            let pixel = pixels[(row0 + r) * width + col0 + c];
            pixel.channel(channel) as f64 - level_shift
        })
    }

    /// Overwrite one block from three channel grids stored as `format`
    ///
    /// `level_shift` is added back to every sample before it is stored.
    pub fn set_block(
        &mut self,
        block_row: usize,
        block_col: usize,
        channels: &[Grid<f64>; 3],
        format: PixelFormat,
        level_shift: f64,
    ) -> JpegResult<()> {
        let (row0, col0) = self.block_origin(block_row, block_col)?;
        for grid in channels {
            if grid.rows() != BLOCK_SIZE || grid.cols() != BLOCK_SIZE {
                return Err(JpegError::InvalidDimensions {
                    width: grid.cols(),
                    height: grid.rows(),
                });
            }
        }

        let [first, second, third] = channels;
        for r in 0..BLOCK_SIZE {
            for c in 0..BLOCK_SIZE {
                let pixel = Pixel::new(
                    (first[(r, c)] + level_shift) as f32,
                    (second[(r, c)] + level_shift) as f32,
                    (third[(r, c)] + level_shift) as f32,
                    format,
                );
                self.set(row0 + r, col0 + c, pixel)?;
            }
        }
        Ok(())
    }
}
