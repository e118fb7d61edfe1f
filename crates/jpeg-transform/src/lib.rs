//! Transform operations for block-based compression
//!
//! This crate implements the 2D DCT (Discrete Cosine Transform) and its
//! inverse over plain numeric grids:
//! - the orthonormal transform, with the outer output index partitioned
//!   across worker threads
//! - the classic alpha/beta normalized transform, kept as a scalar reference
//! - block-wise transforms over whole channel planes

pub mod blocks;
pub mod classic;
pub mod dct;
pub mod options;
pub mod partition;

pub use blocks::*;
pub use classic::*;
pub use dct::*;
pub use options::*;
pub use partition::*;

use jpeg_core::{Grid, Scalar};

/// A forward/inverse pair of 2D transforms over grids
pub trait Transform2d {
    fn forward<T: Scalar>(&self, input: &Grid<T>) -> Grid<T>;
    fn inverse<T: Scalar>(&self, coeffs: &Grid<T>) -> Grid<T>;
}

/// Orthonormal DCT, partitioned per the configured options
#[derive(Debug, Clone, Copy, Default)]
pub struct OrthonormalDct {
    pub options: TransformOptions,
}

impl OrthonormalDct {
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }
}

impl Transform2d for OrthonormalDct {
    fn forward<T: Scalar>(&self, input: &Grid<T>) -> Grid<T> {
        forward_dct(input, &self.options)
    }

    fn inverse<T: Scalar>(&self, coeffs: &Grid<T>) -> Grid<T> {
        inverse_dct(coeffs, &self.options)
    }
}

/// Classic alpha/beta DCT, always serial
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicDct;

impl Transform2d for ClassicDct {
    fn forward<T: Scalar>(&self, input: &Grid<T>) -> Grid<T> {
        classic_forward_dct(input)
    }

    fn inverse<T: Scalar>(&self, coeffs: &Grid<T>) -> Grid<T> {
        classic_inverse_dct(coeffs)
    }
}
