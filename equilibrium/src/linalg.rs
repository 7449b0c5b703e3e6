//! Small linear-algebra kernels shared by the solver's components.
//!
//! Everything here is a thin, explicit wrapper over `nalgebra`'s dense vector/matrix types;
//! kept separate so the rest of the solver reads in terms of the operations the algorithm
//! actually names (dot, matvec, transpose, norm) rather than `nalgebra` call sites scattered
//! throughout.

use nalgebra::{DMatrix, DVector};

/// `A[i][j]` as `f64`, transposed into a `numTotal x numSS` integer-valued matrix.
///
/// Cached once per solver invocation; `A` itself is never mutated.
pub fn transpose_int(a: &DMatrix<i64>) -> DMatrix<i64> {
    a.transpose()
}

/// `sum_i v[i]` over an integer row/column.
pub fn sum_int_row(a: &DMatrix<i64>, row: usize) -> i64 {
    a.row(row).iter().sum()
}

/// The Euclidean norm of a dense vector.
pub fn norm(v: &DVector<f64>) -> f64 {
    v.norm()
}

/// `min(a, b)`.
pub fn min2(a: f64, b: f64) -> f64 {
    a.min(b)
}
