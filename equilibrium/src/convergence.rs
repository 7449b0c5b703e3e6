//! Convergence test (C11): entrywise absolute-tolerance comparison on the gradient.

use nalgebra::DVector;

/// `true` iff `|Grad[i]| <= AbsTol[i]` for every monomer `i`.
pub fn converged(grad: &DVector<f64>, abs_tol: &DVector<f64>) -> bool {
    grad.iter().zip(abs_tol.iter()).all(|(&g, &tol)| g.abs() <= tol)
}
