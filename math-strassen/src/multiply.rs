//! Strassen recursion over padded power-of-two matrices

use ndarray::{Array2, ArrayView2, s};
use rayon::prelude::*;

use crate::{Result, StrassenError};

/// Sub-problem size at or below which the recursion falls back to the
/// ordinary dot product
const BASE_SIZE: usize = 8;

/// Matrix size from which the seven sub-products of a recursion level are
/// computed in parallel (below this, forking costs more than it saves)
const PARALLEL_THRESHOLD: usize = 128;

/// Multiply two square matrices of equal size.
///
/// Inputs of any size are accepted; internally both are zero-padded toward
/// the bottom right to the next power of two, multiplied recursively, and
/// the product is cropped back to the original size.
pub fn strassen_multiply(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    let (a_rows, a_cols) = a.dim();
    let (b_rows, b_cols) = b.dim();

    if a_rows != a_cols {
        return Err(StrassenError::NotSquare {
            rows: a_rows,
            cols: a_cols,
        });
    }
    if b_rows != b_cols {
        return Err(StrassenError::NotSquare {
            rows: b_rows,
            cols: b_cols,
        });
    }
    if a_rows != b_rows {
        return Err(StrassenError::DimensionMismatch {
            a: a_rows,
            b: b_rows,
        });
    }

    let n = a_rows;
    if n == 0 {
        return Ok(Array2::zeros((0, 0)));
    }

    let padded = n.next_power_of_two();
    log::debug!("multiplying {n}x{n} matrices (padded to {padded}x{padded})");

    let a_full = pad(a, padded);
    let b_full = pad(b, padded);
    let product = strassen_geo(a_full.view(), b_full.view());

    Ok(product.slice(s![..n, ..n]).to_owned())
}

/// Zero-pad a square matrix to `size` rows/columns, filling toward the
/// bottom right
fn pad(m: &Array2<f64>, size: usize) -> Array2<f64> {
    let n = m.nrows();
    if n == size {
        return m.clone();
    }

    let mut out = Array2::zeros((size, size));
    out.slice_mut(s![..n, ..n]).assign(m);
    out
}

/// Strassen recursion; `a` and `b` are power-of-two sized
fn strassen_geo(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = a.nrows();
    if n <= BASE_SIZE {
        return a.dot(&b);
    }

    let m = n / 2;
    let a11 = a.slice(s![..m, ..m]);
    let a12 = a.slice(s![..m, m..]);
    let a21 = a.slice(s![m.., ..m]);
    let a22 = a.slice(s![m.., m..]);
    let b11 = b.slice(s![..m, ..m]);
    let b12 = b.slice(s![..m, m..]);
    let b21 = b.slice(s![m.., ..m]);
    let b22 = b.slice(s![m.., m..]);

    // The seven Strassen factor pairs
    let pairs: [(Array2<f64>, Array2<f64>); 7] = [
        (&a11 + &a22, &b11 + &b22),
        (&a21 + &a22, b11.to_owned()),
        (a11.to_owned(), &b12 - &b22),
        (a22.to_owned(), &b21 - &b11),
        (&a11 + &a12, b22.to_owned()),
        (&a21 - &a11, &b11 + &b12),
        (&a12 - &a22, &b21 + &b22),
    ];

    let products: Vec<Array2<f64>> = if n >= PARALLEL_THRESHOLD {
        pairs
            .par_iter()
            .map(|(x, y)| strassen_geo(x.view(), y.view()))
            .collect()
    } else {
        pairs
            .iter()
            .map(|(x, y)| strassen_geo(x.view(), y.view()))
            .collect()
    };

    let [m1, m2, m3, m4, m5, m6, m7] = &products[..] else {
        unreachable!("seven factor pairs yield seven products");
    };

    let mut out = Array2::zeros((n, n));
    out.slice_mut(s![..m, ..m]).assign(&(m1 + m4 - m5 + m7));
    out.slice_mut(s![..m, m..]).assign(&(m3 + m5));
    out.slice_mut(s![m.., ..m]).assign(&(m2 + m4));
    out.slice_mut(s![m.., m..]).assign(&(m1 - m2 + m3 + m6));
    out
}
