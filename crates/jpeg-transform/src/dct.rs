//! Orthonormal 2D DCT-II / DCT-III with partition-parallel evaluation
//!
//! For a `rows x cols` grid `m` the forward transform is
//!
//! ```text
//! c(u, n)  = sqrt(1/n) if u == 0 else sqrt(2/n)
//! X[i, j]  = c(i, rows) c(j, cols) sum_k sum_l m[k, l]
//!            cos((2k+1) i pi / 2rows) cos((2l+1) j pi / 2cols)
//! ```
//!
//! and the inverse swaps the roles of the spatial and frequency indices.
//! Each output cell is an independent double sum, so the outer output index
//! is split into contiguous partitions that write disjoint rows of the
//! result. Every cell is computed with the same arithmetic whatever the
//! partitioning, which makes parallel and serial results bit-identical.

use std::f64::consts::PI;
use std::ops::Range;

use jpeg_core::{Grid, Scalar};
use rayon::prelude::*;

use crate::{partition_ranges, TransformOptions};

/// `cos((2x + 1) u pi / 2n)` for every frequency `u` and position `x` along one axis
#[derive(Debug, Clone)]
pub(crate) struct CosineTable {
    n: usize,
    values: Vec<f64>,
}

impl CosineTable {
    pub(crate) fn new(n: usize) -> Self {
        let mut values = Vec::with_capacity(n * n);
        for u in 0..n {
            for x in 0..n {
                let angle = ((2 * x + 1) as f64 * u as f64 * PI) / (2 * n) as f64;
                values.push(angle.cos());
            }
        }
        Self { n, values }
    }

    #[inline]
    pub(crate) fn get(&self, u: usize, x: usize) -> f64 {
        self.values[u * self.n + x]
    }
}

/// Orthonormal scale for frequency `u` along an axis of length `n`
#[inline]
pub fn normalization(u: usize, n: usize) -> f64 {
    if u == 0 {
        (1.0 / n as f64).sqrt()
    } else {
        (2.0 / n as f64).sqrt()
    }
}

/// Cosine tables and scale factors for one grid shape
struct Basis {
    row_cos: CosineTable,
    col_cos: CosineTable,
    row_norm: Vec<f64>,
    col_norm: Vec<f64>,
}

impl Basis {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_cos: CosineTable::new(rows),
            col_cos: CosineTable::new(cols),
            row_norm: (0..rows).map(|u| normalization(u, rows)).collect(),
            col_norm: (0..cols).map(|v| normalization(v, cols)).collect(),
        }
    }
}

/// Forward coefficients for frequency rows `range`, written to `out`
fn forward_rows<T: Scalar>(input: &Grid<T>, basis: &Basis, range: Range<usize>, out: &mut [T]) {
    let rows = input.rows();
    let cols = input.cols();

    for (offset, i) in range.enumerate() {
        for j in 0..cols {
            let mut sum = 0.0;
            for k in 0..rows {
                let cos_ik = basis.row_cos.get(i, k);
                for (l, &sample) in input.row(k).iter().enumerate() {
                    sum += sample.as_f64() * cos_ik * basis.col_cos.get(j, l);
                }
            }
            let scale = basis.row_norm[i] * basis.col_norm[j];
            out[offset * cols + j] = T::cast_from_f64(scale * sum);
        }
    }
}

/// Reconstructed samples for spatial rows `range`, written to `out`
fn inverse_rows<T: Scalar>(coeffs: &Grid<T>, basis: &Basis, range: Range<usize>, out: &mut [T]) {
    let rows = coeffs.rows();
    let cols = coeffs.cols();

    for (offset, k) in range.enumerate() {
        for l in 0..cols {
            let mut sum = 0.0;
            for i in 0..rows {
                let row_term = basis.row_norm[i] * basis.row_cos.get(i, k);
                for (j, &coeff) in coeffs.row(i).iter().enumerate() {
                    sum += row_term * basis.col_norm[j] * coeff.as_f64() * basis.col_cos.get(j, l);
                }
            }
            out[offset * cols + l] = T::cast_from_f64(sum);
        }
    }
}

/// Evaluate `kernel` over partitions of the output rows
///
/// Partitions receive disjoint slices of the output; the call returns once
/// every partition has finished.
fn run_partitioned<T, F>(input: &Grid<T>, parallelism: usize, kernel: F) -> Grid<T>
where
    T: Scalar,
    F: Fn(Range<usize>, &mut [T]) + Sync,
{
    let rows = input.rows();
    let cols = input.cols();
    let mut output = input.zeros_like();
    let ranges = partition_ranges(rows, parallelism);

    log::trace!(
        "DCT over {}x{} grid in {} partition(s)",
        rows,
        cols,
        ranges.len()
    );

    if ranges.len() <= 1 {
        kernel(0..rows, output.as_mut_slice());
        return output;
    }

    let mut chunks = Vec::with_capacity(ranges.len());
    let mut rest = output.as_mut_slice();
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * cols);
        chunks.push((range, head));
        rest = tail;
    }

    chunks
        .into_par_iter()
        .for_each(|(range, out)| kernel(range, out));

    output
}

/// Forward 2D DCT of `input`, partitioned per `options`
pub fn forward_dct<T: Scalar>(input: &Grid<T>, options: &TransformOptions) -> Grid<T> {
    let basis = Basis::new(input.rows(), input.cols());
    run_partitioned(input, options.parallelism, |range, out| {
        forward_rows(input, &basis, range, out)
    })
}

/// Inverse 2D DCT of `coeffs`, partitioned per `options`
pub fn inverse_dct<T: Scalar>(coeffs: &Grid<T>, options: &TransformOptions) -> Grid<T> {
    let basis = Basis::new(coeffs.rows(), coeffs.cols());
    run_partitioned(coeffs, options.parallelism, |range, out| {
        inverse_rows(coeffs, &basis, range, out)
    })
}

/// Forward 2D DCT on the calling thread
pub fn forward_dct_serial<T: Scalar>(input: &Grid<T>) -> Grid<T> {
    forward_dct(input, &TransformOptions::serial())
}

/// Inverse 2D DCT on the calling thread
pub fn inverse_dct_serial<T: Scalar>(coeffs: &Grid<T>) -> Grid<T> {
    inverse_dct(coeffs, &TransformOptions::serial())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn test_block(rows: usize, cols: usize) -> Grid<f64> {
        Grid::from_fn(rows, cols, |r, c| {
            ((r * 31 + c * 17) % 256) as f64 - 128.0 + (r as f64 * 0.25)
        })
        .unwrap()
    }

    #[test]
    fn test_constant_block_is_dc_only() {
        let input = Grid::filled(8, 8, 100.0f64).unwrap();
        let output = forward_dct_serial(&input);

        assert_abs_diff_eq!(output[(0, 0)], 800.0, epsilon = 1e-9);
        for r in 0..8 {
            for c in 0..8 {
                if (r, c) != (0, 0) {
                    assert!(
                        output[(r, c)].abs() < 1e-9,
                        "AC coefficient ({}, {}) = {}",
                        r,
                        c,
                        output[(r, c)]
                    );
                }
            }
        }
    }

    #[test]
    fn test_constant_rectangular_grid_dc() {
        let input = Grid::filled(5, 12, 3.0f64).unwrap();
        let output = forward_dct(&input, &TransformOptions::new().parallelism(2));

        assert_abs_diff_eq!(output[(0, 0)], 3.0 * 60.0f64.sqrt(), epsilon = 1e-9);
        let max_ac = output.as_slice()[1..]
            .iter()
            .fold(0.0f64, |acc, v| acc.max(v.abs()));
        assert!(max_ac < 1e-9, "AC energy leaked: {}", max_ac);
    }

    #[test]
    fn test_roundtrip_f64() {
        let input = test_block(8, 8);
        let coeffs = forward_dct(&input, &TransformOptions::new().parallelism(3));
        let restored = inverse_dct(&coeffs, &TransformOptions::new().parallelism(3));

        let error = input.max_abs_diff(&restored).unwrap();
        assert!(error < 1e-9, "roundtrip error {}", error);
    }

    #[test]
    fn test_roundtrip_f32() {
        let input: Grid<f32> = test_block(8, 8).cast();
        let coeffs = forward_dct_serial(&input);
        let restored = inverse_dct_serial(&coeffs);

        for (a, b) in input.as_slice().iter().zip(restored.as_slice()) {
            let tolerance = 1e-3 * a.abs().max(1.0);
            assert!((a - b).abs() <= tolerance, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_roundtrip_rectangular() {
        let input = test_block(5, 12);
        let coeffs = forward_dct_serial(&input);
        assert_eq!((coeffs.rows(), coeffs.cols()), (5, 12));

        let restored = inverse_dct_serial(&coeffs);
        let error = input.max_abs_diff(&restored).unwrap();
        assert!(error < 1e-9, "roundtrip error {}", error);
    }

    #[test]
    fn test_energy_is_preserved() {
        let input = test_block(8, 8);
        let coeffs = forward_dct_serial(&input);

        let energy = |g: &Grid<f64>| g.as_slice().iter().map(|v| v * v).sum::<f64>();
        let ratio = energy(&coeffs) / energy(&input);
        assert_abs_diff_eq!(ratio, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let input = test_block(16, 16);
        let serial = forward_dct_serial(&input);

        for parallelism in [2, 3, 5, 16, 64] {
            let options = TransformOptions::new().parallelism(parallelism);
            let parallel = forward_dct(&input, &options);
            assert_eq!(parallel, serial, "forward differs with {} partitions", parallelism);

            let restored_parallel = inverse_dct(&serial, &options);
            let restored_serial = inverse_dct_serial(&serial);
            assert_eq!(
                restored_parallel, restored_serial,
                "inverse differs with {} partitions",
                parallelism
            );
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let input = Grid::filled(1, 1, 42.0f64).unwrap();
        let coeffs = forward_dct_serial(&input);
        assert_abs_diff_eq!(coeffs[(0, 0)], 42.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_propagates() {
        let mut input = Grid::filled(4, 4, 1.0f64).unwrap();
        input[(2, 1)] = f64::NAN;
        let coeffs = forward_dct_serial(&input);
        assert!(coeffs.as_slice().iter().all(|v| v.is_nan()));
    }
}
