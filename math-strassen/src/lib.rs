//! Strassen Matrix Multiplication
//!
//! Multiplies square `f64` matrices with Strassen's divide-and-conquer
//! scheme: pad to the next power of two, split into quadrants, combine the
//! seven recursive sub-products, crop the result. Small sub-problems fall
//! back to the ordinary dot product, and the seven products at a recursion
//! level run in parallel once the matrices are large enough to amortize
//! the fork.
//!
//! # Example
//! ```
//! use ndarray::array;
//! use math_strassen::strassen_multiply;
//!
//! let a = array![[1.0, 2.0], [3.0, 4.0]];
//! let b = array![[5.0, 6.0], [7.0, 8.0]];
//! let c = strassen_multiply(&a, &b).unwrap();
//! assert_eq!(c, array![[19.0, 22.0], [43.0, 50.0]]);
//! ```

mod multiply;

pub use multiply::strassen_multiply;

/// Error types for matrix multiplication
#[derive(Debug, thiserror::Error)]
pub enum StrassenError {
    #[error("Matrix is not square: {rows} rows by {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrices are not aligned: {a} vs {b}")]
    DimensionMismatch { a: usize, b: usize },
}

pub type Result<T> = std::result::Result<T, StrassenError>;
