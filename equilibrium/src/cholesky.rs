//! Cholesky-based Newton step.
//!
//! Wraps `nalgebra::linalg::Cholesky` the way the reference algorithm wraps its own in-place
//! decomposition: attempt a decomposition of (a copy of) the Hessian, and report failure rather
//! than panicking when a pivot is non-positive. The caller (the dogleg selector, C8) treats
//! failure as a signal to fall back to a Cauchy step, not as an error.

use nalgebra::{DMatrix, DVector};

/// Solves `Hes * p = Grad` for `p`, then negates it to produce the Newton step `-H^-1 * Grad`.
///
/// Returns `None` if `Hes` is not (numerically) symmetric positive definite, the same
/// condition the reference algorithm's `choleskyDecomposition` flags via a non-positive pivot.
pub fn newton_step(hes: &DMatrix<f64>, grad: &DVector<f64>) -> Option<DVector<f64>> {
    let chol = nalgebra::linalg::Cholesky::new(hes.clone())?;
    let mut p_b = chol.solve(grad);
    p_b *= -1.0;
    Some(p_b)
}
