//! Gradient and Hessian of `-g(lambda)`, the dual objective.

use nalgebra::{DMatrix, DVector};

use crate::problem::EquilibriumProblem;

/// `Grad[i] = <x, A[i,.]> - x0[i]`: the mass-balance residual for monomer `i`.
pub fn gradient(problem: &EquilibriumProblem, x: &DVector<f64>) -> DVector<f64> {
    let num_ss = problem.num_ss();
    let mut grad = DVector::zeros(num_ss);
    for i in 0..num_ss {
        let ax: f64 = problem
            .a()
            .row(i)
            .iter()
            .zip(x.iter())
            .map(|(&a_ij, &x_j)| a_ij as f64 * x_j)
            .sum();
        grad[i] = ax - problem.x0()[i];
    }
    grad
}

/// `Hes[m,n] = sum_j A[m,j] * A[n,j] * x[j]`, symmetric positive-definite.
///
/// Only the upper triangle is computed directly; the lower triangle is mirrored, matching the
/// reference algorithm's `getHes` (and avoiding computing the same sum twice).
pub fn hessian(problem: &EquilibriumProblem, x: &DVector<f64>) -> DMatrix<f64> {
    let num_ss = problem.num_ss();
    let num_total = problem.num_total();
    let a = problem.a();
    let mut hes = DMatrix::zeros(num_ss, num_ss);
    for n in 0..num_ss {
        for m in 0..=n {
            let mut acc = 0.0;
            for j in 0..num_total {
                acc += (a[(m, j)] as f64) * (a[(n, j)] as f64) * x[j];
            }
            hes[(m, n)] = acc;
        }
    }
    for m in 1..num_ss {
        for n in 0..m {
            hes[(m, n)] = hes[(n, m)];
        }
    }
    hes
}
