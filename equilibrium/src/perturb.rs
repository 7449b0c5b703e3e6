//! Restart perturbation: nudges lambda away from a stalled point without risking overflow.

use nalgebra::DVector;
use rand::rngs::StdRng;

use crate::parameter_map::get_x;
use crate::problem::EquilibriumProblem;
use crate::rng::uniform01;

/// Adds scaled uniform noise to `lambda` until the resulting `x` is overflow-free.
///
/// Halves `scale` and retries on overflow; terminates because shrinking `scale` toward zero
/// recovers the (by construction feasible) unperturbed `lambda`.
pub fn perturb_lambda(
    problem: &EquilibriumProblem,
    lambda: &DVector<f64>,
    mut scale: f64,
    rng: &mut StdRng,
) -> DVector<f64> {
    loop {
        let candidate = DVector::from_iterator(
            lambda.len(),
            lambda
                .iter()
                .map(|&lam_i| lam_i + scale * (2.0 * uniform01(rng) - 1.0)),
        );
        if get_x(problem, &candidate).is_ok() {
            return candidate;
        }
        scale /= 2.0;
    }
}
