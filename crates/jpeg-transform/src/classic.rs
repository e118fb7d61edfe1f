//! Classic alpha/beta normalized DCT
//!
//! Scalar reference formulation. On square grids it produces the same
//! coefficients as the orthonormal transform in [`crate::dct`]; on
//! rectangular grids `beta` no longer matches the orthonormal scale, so
//! only square grids round-trip exactly.

use std::f64::consts::PI;

use jpeg_core::{Grid, Scalar};

/// DC terms use `1/sqrt(2)`, every other frequency `1`
#[inline]
pub fn alpha(u: usize) -> f64 {
    if u == 0 {
        std::f64::consts::FRAC_1_SQRT_2
    } else {
        1.0
    }
}

/// Overall scale for an `x_len x y_len` grid
#[inline]
pub fn beta(x_len: usize, y_len: usize) -> f64 {
    1.0 / x_len as f64 + 1.0 / y_len as f64
}

/// Sample `a` weighted by the cosine basis of frequency pair `(u, v)` at `(x, y)`
///
/// `x` runs along the first grid axis (length `x_len`), `y` along the second.
#[inline]
pub fn basis_function(a: f64, u: usize, v: usize, x: usize, y: usize, x_len: usize, y_len: usize) -> f64 {
    let b = (((2 * x + 1) as f64 * u as f64 * PI) / (2 * x_len) as f64).cos();
    let c = (((2 * y + 1) as f64 * v as f64 * PI) / (2 * y_len) as f64).cos();
    a * b * c
}

/// Forward transform
pub fn classic_forward_dct<T: Scalar>(input: &Grid<T>) -> Grid<T> {
    let (x_len, y_len) = (input.rows(), input.cols());
    let scale = beta(x_len, y_len);
    let mut coeffs = input.zeros_like();

    for u in 0..x_len {
        for v in 0..y_len {
            let mut sum = 0.0;
            for x in 0..x_len {
                for y in 0..y_len {
                    sum += basis_function(input[(x, y)].as_f64(), u, v, x, y, x_len, y_len);
                }
            }
            coeffs[(u, v)] = T::cast_from_f64(sum * scale * alpha(u) * alpha(v));
        }
    }

    coeffs
}

/// Inverse transform
pub fn classic_inverse_dct<T: Scalar>(coeffs: &Grid<T>) -> Grid<T> {
    let (x_len, y_len) = (coeffs.rows(), coeffs.cols());
    let scale = beta(x_len, y_len);
    let mut output = coeffs.zeros_like();

    for x in 0..x_len {
        for y in 0..y_len {
            let mut sum = 0.0;
            for u in 0..x_len {
                for v in 0..y_len {
                    sum += basis_function(coeffs[(u, v)].as_f64(), u, v, x, y, x_len, y_len)
                        * alpha(u)
                        * alpha(v);
                }
            }
            output[(x, y)] = T::cast_from_f64(sum * scale);
        }
    }

    output
}
