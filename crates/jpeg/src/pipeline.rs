//! Whole-image block transforms
//!
//! Runs every 8x8 block of a matrix through the forward transform in luma /
//! chroma space and back. Quantization and entropy coding are left to the
//! caller, which receives the raw coefficients.

use jpeg_core::consts::{BLOCK_SIZE, LEVEL_SHIFT};
use jpeg_core::{Channel, Dimensions, Grid, JpegError, JpegResult, PixelFormat, Raster};
use jpeg_image::{padded_size, Matrix};
use jpeg_transform::{OrthonormalDct, Transform2d, TransformOptions};
use rayon::prelude::*;

/// Coefficients of one block: Y, Cb, Cr
pub type BlockCoefficients = [Grid<f64>; 3];

/// Coefficients of every block of an image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCoefficients {
    /// Image size before padding
    pub original: Dimensions,
    pub blocks_x: usize,
    pub blocks_y: usize,
    /// Blocks in raster order, left to right then top to bottom
    pub blocks: Vec<BlockCoefficients>,
}

impl ImageCoefficients {
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Padded image size covered by the blocks
    pub fn padded_dimensions(&self) -> Dimensions {
        self.original.padded_to(BLOCK_SIZE)
    }

    /// Coefficients of `channel` (0 = Y, 1 = Cb, 2 = Cr) in block `(block_x, block_y)`
    pub fn block(&self, block_x: usize, block_y: usize, channel: usize) -> Option<&Grid<f64>> {
        if block_x >= self.blocks_x || channel >= 3 {
            return None;
        }
        self.blocks
            .get(block_y * self.blocks_x + block_x)
            .map(|block| &block[channel])
    }
}

/// Runs a 2D transform over every block of an image
#[derive(Debug, Clone)]
pub struct ImageTransformer<D = OrthonormalDct> {
    transform: D,
}

impl Default for ImageTransformer<OrthonormalDct> {
    /// Blocks are spread across threads; each block is transformed serially
    fn default() -> Self {
        Self::new(TransformOptions::serial())
    }
}

impl ImageTransformer<OrthonormalDct> {
    pub fn new(options: TransformOptions) -> Self {
        Self {
            transform: OrthonormalDct::new(options),
        }
    }
}

impl<D: Transform2d + Sync> ImageTransformer<D> {
    pub fn with_transform(transform: D) -> Self {
        Self { transform }
    }

    /// Level-shift and transform the Y, Cb and Cr channels of every block
    pub fn forward(&self, matrix: &Matrix) -> JpegResult<ImageCoefficients> {
        let blocks_x = matrix.blocks_x();
        let blocks_y = matrix.blocks_y();

        log::debug!(
            "Forward transform of {}x{} matrix ({} blocks)",
            matrix.width(),
            matrix.height(),
            blocks_x * blocks_y
        );

        let blocks = (0..blocks_x * blocks_y)
            .into_par_iter()
            .map(|index| -> JpegResult<BlockCoefficients> {
                let (block_x, block_y) = (index % blocks_x, index / blocks_x);
                let [y, cb, cr] = Channel::YCBCR
                    .map(|channel| matrix.channel_block(block_y, block_x, channel, LEVEL_SHIFT));
                Ok([
                    self.transform.forward(&y?),
                    self.transform.forward(&cb?),
                    self.transform.forward(&cr?),
                ])
            })
            .collect::<JpegResult<Vec<BlockCoefficients>>>()?;

        Ok(ImageCoefficients {
            original: matrix.original_dimensions(),
            blocks_x,
            blocks_y,
            blocks,
        })
    }

    /// Rebuild a matrix of luma/chroma pixels from block coefficients
    pub fn inverse(&self, coefficients: &ImageCoefficients) -> JpegResult<Matrix> {
        let original = coefficients.original;
        let mut matrix = Matrix::new(original.height, original.width);

        if matrix.blocks_x() != coefficients.blocks_x || matrix.blocks_y() != coefficients.blocks_y {
            return Err(JpegError::InvalidParameter(format!(
                "{}x{} blocks do not cover a {}x{} image",
                coefficients.blocks_x,
                coefficients.blocks_y,
                padded_size(original.width),
                padded_size(original.height)
            )));
        }

        let expected = coefficients.blocks_x * coefficients.blocks_y;
        if coefficients.blocks.len() != expected {
            return Err(JpegError::BufferTooSmall {
                expected,
                actual: coefficients.blocks.len(),
            });
        }

        log::debug!("Inverse transform of {} blocks", expected);

        let samples: Vec<BlockCoefficients> = coefficients
            .blocks
            .par_iter()
            .map(|block| block.each_ref().map(|grid| self.transform.inverse(grid)))
            .collect();

        for (index, block) in samples.iter().enumerate() {
            let (block_x, block_y) = (index % coefficients.blocks_x, index / coefficients.blocks_x);
            matrix.set_block(block_y, block_x, block, PixelFormat::YCbCr, LEVEL_SHIFT)?;
        }

        Ok(matrix)
    }
}

/// Load a raster and transform every block with default options
pub fn transform_raster(raster: &Raster) -> JpegResult<ImageCoefficients> {
    let transformer: ImageTransformer = ImageTransformer::default();
    transformer.forward(&Matrix::from_raster(raster))
}

/// Invert block coefficients back into an RGB raster of the original size
pub fn reconstruct_raster(coefficients: &ImageCoefficients) -> JpegResult<Raster> {
    let transformer: ImageTransformer = ImageTransformer::default();
    transformer.inverse(coefficients)?.to_original_raster()
}
