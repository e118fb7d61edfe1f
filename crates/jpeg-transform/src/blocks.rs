//! Block-wise transforms over whole channel planes
//!
//! A plane is split into `BLOCK_SIZE x BLOCK_SIZE` blocks which are
//! transformed independently. Blocks are distributed across the rayon pool;
//! each block runs its own transform serially.

use jpeg_core::consts::BLOCK_SIZE;
use jpeg_core::{Grid, JpegError, JpegResult, Scalar};
use rayon::prelude::*;

use crate::dct::{forward_dct_serial, inverse_dct_serial};

fn check_plane(len: usize, width: usize, height: usize) -> JpegResult<()> {
    if width == 0 || height == 0 || width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
        return Err(JpegError::InvalidDimensions { width, height });
    }
    if len != width * height {
        return Err(JpegError::BufferTooSmall {
            expected: width * height,
            actual: len,
        });
    }
    Ok(())
}

/// Top-left sample of block `(block_x, block_y)`, checked against the plane
fn block_origin(len: usize, width: usize, block_x: usize, block_y: usize) -> JpegResult<(usize, usize)> {
    if width == 0 || len % width != 0 {
        return Err(JpegError::InvalidDimensions {
            width,
            height: len / width.max(1),
        });
    }

    let height = len / width;
    let x0 = block_x.saturating_mul(BLOCK_SIZE);
    let y0 = block_y.saturating_mul(BLOCK_SIZE);
    if x0.saturating_add(BLOCK_SIZE) > width || y0.saturating_add(BLOCK_SIZE) > height {
        return Err(JpegError::IndexOutOfRange {
            row: y0,
            col: x0,
            height,
            width,
        });
    }
    Ok((x0, y0))
}

/// Copy block `(block_x, block_y)` out of a row-major plane
pub fn extract_block<T: Scalar>(plane: &[T], width: usize, block_x: usize, block_y: usize) -> JpegResult<Grid<T>> {
    let (x0, y0) = block_origin(plane.len(), width, block_x, block_y)?;
    Grid::from_fn(BLOCK_SIZE, BLOCK_SIZE, |r, c| plane[(y0 + r) * width + x0 + c])
}

/// Write an 8x8 block back into a row-major plane
pub fn insert_block<T: Scalar>(
    block: &Grid<T>,
    plane: &mut [T],
    width: usize,
    block_x: usize,
    block_y: usize,
) -> JpegResult<()> {
    if block.rows() != BLOCK_SIZE || block.cols() != BLOCK_SIZE {
        return Err(JpegError::InvalidDimensions {
            width: block.cols(),
            height: block.rows(),
        });
    }

    let (x0, y0) = block_origin(plane.len(), width, block_x, block_y)?;
    for r in 0..BLOCK_SIZE {
        let start = (y0 + r) * width + x0;
        plane[start..start + BLOCK_SIZE].copy_from_slice(block.row(r));
    }
    Ok(())
}

fn transform_plane<T, F>(plane: &[T], width: usize, height: usize, transform: F) -> JpegResult<Vec<T>>
where
    T: Scalar,
    F: Fn(&Grid<T>) -> Grid<T> + Sync,
{
    check_plane(plane.len(), width, height)?;

    let blocks_x = width / BLOCK_SIZE;
    let blocks_y = height / BLOCK_SIZE;

    let transformed = (0..blocks_x * blocks_y)
        .into_par_iter()
        .map(|index| -> JpegResult<Grid<T>> {
            let block = extract_block(plane, width, index % blocks_x, index / blocks_x)?;
            Ok(transform(&block))
        })
        .collect::<JpegResult<Vec<_>>>()?;

    let mut output = vec![T::zero(); plane.len()];
    for (index, block) in transformed.iter().enumerate() {
        insert_block(block, &mut output, width, index % blocks_x, index / blocks_x)?;
    }
    Ok(output)
}

/// Apply the forward DCT to every block of a channel plane
pub fn dct_channel<T: Scalar>(channel: &[T], width: usize, height: usize) -> JpegResult<Vec<T>> {
    transform_plane(channel, width, height, forward_dct_serial)
}

/// Apply the inverse DCT to every block of a coefficient plane
pub fn idct_channel<T: Scalar>(channel: &[T], width: usize, height: usize) -> JpegResult<Vec<T>> {
    transform_plane(channel, width, height, inverse_dct_serial)
}
