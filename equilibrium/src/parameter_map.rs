//! The parameter map: dual variables lambda to primal mole fractions x.

use nalgebra::DVector;

use crate::error::SolveError;
use crate::problem::EquilibriumProblem;
use crate::MAXLOGX;

/// Computes `x[j] = exp(-G[j] + <lambda, AT[j]>)` for every complex `j`.
///
/// Returns [`SolveError::Overflow`] the first time `logx_j` would exceed [`MAXLOGX`], i.e. the
/// first complex whose mole fraction would not be finite. Has no side effects on `lambda` or
/// the problem's free energies.
pub fn get_x(problem: &EquilibriumProblem, lambda: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
    let num_total = problem.num_total();
    let mut x = DVector::zeros(num_total);
    for j in 0..num_total {
        let at_row: f64 = problem
            .at()
            .row(j)
            .iter()
            .zip(lambda.iter())
            .map(|(&a_ij, &lam_i)| a_ij as f64 * lam_i)
            .sum();
        let logx = -problem.g()[j] + at_row;
        if logx > MAXLOGX {
            return Err(SolveError::Overflow { j });
        }
        x[j] = logx.exp();
    }
    Ok(x)
}
