//! Two-dimensional numeric grids fed to the transforms

use std::ops::{Index, IndexMut};

use crate::{JpegError, JpegResult, Scalar};

/// Row-major `rows x cols` grid of samples or coefficients
///
/// A grid usually holds one channel of one block, but any positive size is
/// accepted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawGrid<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Unchecked wire form of a grid, validated through `Grid::from_vec`
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = JpegError;

    fn try_from(raw: RawGrid<T>) -> JpegResult<Self> {
        Grid::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl<T: Scalar> Grid<T> {
    /// Zero-filled grid
    pub fn new(rows: usize, cols: usize) -> JpegResult<Self> {
        Self::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }

    /// Wrap an existing row-major buffer
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> JpegResult<Self> {
        Self::check_dimensions(rows, cols)?;
        if data.len() != rows * cols {
            return Err(JpegError::BufferTooSmall {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> JpegResult<Self> {
        Self::check_dimensions(rows, cols)?;
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Grid of the same shape with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> JpegResult<Self> {
        Self::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Zero-filled grid with the shape of `self`
    pub fn zeros_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: vec![T::zero(); self.data.len()],
        }
    }

    fn check_dimensions(rows: usize, cols: usize) -> JpegResult<()> {
        if rows == 0 || cols == 0 {
            return Err(JpegError::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Largest absolute elementwise difference, `None` when shapes differ
    pub fn max_abs_diff(&self, other: &Grid<T>) -> Option<f64> {
        if self.rows != other.rows || self.cols != other.cols {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| (a.as_f64() - b.as_f64()).abs())
                .fold(0.0, f64::max),
        )
    }

    /// Same values converted to another scalar type
    pub fn cast<U: Scalar>(&self) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| U::cast_from_f64(v.as_f64())).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}
