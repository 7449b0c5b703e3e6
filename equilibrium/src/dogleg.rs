//! Dogleg search-direction selector (C8): Newton / Cauchy / interpolated step choice, tagged
//! with a [`StepOutcome`] the trust-region driver uses to build [`crate::trust_region::RunStats`].

use nalgebra::{DMatrix, DVector};

use crate::cholesky::newton_step;

/// Classification of a dogleg step, replacing the reference algorithm's integer return codes
/// (1 through 6) with a tagged enum, per `SPEC_FULL.md` §9's "Cholesky failure as signal" note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The unconstrained Newton step already lies inside the trust region.
    Newton,
    /// The Cauchy point lies outside the trust region; stepped to the boundary along steepest
    /// descent.
    CauchyBoundary,
    /// Interpolated between the Cauchy point and the Newton point on the trust-region boundary.
    Dogleg,
    /// Cholesky failed and the (interior) Cauchy step was taken as a result.
    ForcedCauchyCholeskyFail,
    /// Cholesky failed, but the Cauchy point was outside the trust region regardless; the
    /// failure didn't change which step was taken.
    HarmlessCholeskyFail,
    /// Neither dogleg root lay in `[0, 1]`; fell back to the Cauchy point. Should not occur for
    /// a well-posed problem.
    DoglegRootFail,
}

impl StepOutcome {
    /// Index into a 6-slot `RunStats` array, matching the reference algorithm's 1..=6 codes
    /// (reindexed to 0..6).
    pub fn stat_index(self) -> usize {
        match self {
            StepOutcome::Newton => 0,
            StepOutcome::CauchyBoundary => 1,
            StepOutcome::Dogleg => 2,
            StepOutcome::ForcedCauchyCholeskyFail => 3,
            StepOutcome::HarmlessCholeskyFail => 4,
            StepOutcome::DoglegRootFail => 5,
        }
    }
}

/// Computes the dogleg search direction `p` for the current gradient, Hessian, and trust radius.
///
/// See `SPEC_FULL.md` §4.6 for the derivation; notation (`pB`, `pU`, `a`/`b`/`c`/`q`) matches
/// Nocedal & Wright's dogleg method, as the reference algorithm's own comments do.
pub fn search_direction(
    grad: &DVector<f64>,
    hes: &DMatrix<f64>,
    delta: f64,
) -> (DVector<f64>, StepOutcome) {
    let delta2 = delta * delta;

    let p_b = newton_step(hes, grad);
    let chol_ok = p_b.is_some();

    if let Some(ref p_b) = p_b {
        let p_b2 = p_b.norm_squared();
        if p_b2 <= delta2 {
            return (p_b.clone(), StepOutcome::Newton);
        }
    }

    let h_grad = hes * grad;
    let mag1 = grad.norm_squared();
    let mag2 = grad.dot(&h_grad);
    let p_u_coeff = mag1 / mag2;
    let p_u = grad.map(|g| -p_u_coeff * g);
    let p_u2 = p_u.norm_squared();

    if p_u2 >= delta2 {
        let tau = (delta2 / p_u2).sqrt();
        let p = &p_u * tau;
        let outcome = if chol_ok {
            StepOutcome::CauchyBoundary
        } else {
            StepOutcome::HarmlessCholeskyFail
        };
        return (p, outcome);
    }

    let p_b = match p_b {
        Some(p_b) => p_b,
        None => return (p_u, StepOutcome::ForcedCauchyCholeskyFail),
    };

    let p_b2 = p_b.norm_squared();
    let p_b_p_u = p_b.dot(&p_u);

    let a = p_b2 + p_u2 - 2.0 * p_b_p_u;
    let b = 2.0 * (p_b_p_u - p_u2);
    let c = p_u2 - delta2;
    let sgn_b = if b < 0.0 { -1.0 } else { 1.0 };

    let q = -0.5 * (b + sgn_b * (b * b - 4.0 * a * c).sqrt());
    let x1 = q / a;
    let x2 = c / q;

    if (0.0..=1.0).contains(&x2) {
        (&p_u + (&p_b - &p_u) * x2, StepOutcome::Dogleg)
    } else if (0.0..=1.0).contains(&x1) {
        (&p_u + (&p_b - &p_u) * x1, StepOutcome::Dogleg)
    } else {
        (p_u, StepOutcome::DoglegRootFail)
    }
}
