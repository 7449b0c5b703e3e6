//! Trust-region driver (C9): the outer restart loop wrapping the inner dogleg iteration.
//!
//! Structurally this mirrors the reference algorithm's `CalcConc` nested loops (outer: trial
//! index and perturbed initial condition; inner: Newton/dogleg steps against a fixed initial
//! condition). The outer loop here is a restart strategy rather than a Jacobian-refresh retry,
//! but the nesting shape follows the same pattern: an outer convergence loop wrapping an inner
//! iteration loop, with a `tracing` span bracketing each outer attempt.

use nalgebra::DVector;
use rand::rngs::StdRng;
use tracing::{debug, trace, warn};

use crate::config::SolverConfig;
use crate::convergence::converged;
use crate::dogleg::{search_direction, StepOutcome};
use crate::error::SolveError;
use crate::free_energy::free_energy;
use crate::gradient::{gradient, hessian};
use crate::initial_guess::initial_guess;
use crate::linalg::{min2, norm};
use crate::parameter_map::get_x;
use crate::problem::EquilibriumProblem;
use crate::rng::seeded_rng;
use crate::NUM_PRECISION;

/// Counters classifying every search-direction decision taken during the last trial.
///
/// Indexed by [`StepOutcome::stat_index`]; reset at the start of each trial, so the values
/// reported in [`SolveOutcome`] describe only the trial that produced the returned `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats([i64; 6]);

impl RunStats {
    fn record(&mut self, outcome: StepOutcome) {
        self.0[outcome.stat_index()] += 1;
    }

    /// The six counters in `StepOutcome::stat_index` order: Newton, Cauchy-boundary, dogleg,
    /// forced-Cauchy-on-Cholesky-failure, harmless-Cholesky-failure, dogleg-root-failure.
    pub fn as_array(&self) -> [i64; 6] {
        self.0
    }

    /// Total inner iterations the counters account for.
    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }
}

/// Result of one [`solve`] invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    /// Equilibrium mole fractions, one per complex. Reflects the best lambda explored in the
    /// last trial even when `converged` is `false`.
    pub x: DVector<f64>,
    /// `true` iff the gradient tolerance was satisfied within `config.max_trial` restarts.
    pub converged: bool,
    /// Free energy of the solution in kcal per liter, per `SPEC_FULL.md` §4.8.
    pub free_energy: f64,
    /// Step-classification counters from the trial that produced `x`.
    pub run_stats: RunStats,
}

/// Solves for the equilibrium mole fractions of `problem` under `config`.
///
/// Overflow during the initial guess or immediately after an accepted step is fatal
/// ([`SolveError::Overflow`]); the initial-guess heuristic is designed to make this
/// unreachable for well-posed inputs, so a triggered overflow here means malformed inputs.
/// Overflow while evaluating a trial step inside the rho computation is not an error: rho is
/// set to `-1.0`, which guarantees the step is rejected and the loop continues.
pub fn solve(problem: &EquilibriumProblem, config: &SolverConfig) -> Result<SolveOutcome, SolveError> {
    config.validate()?;

    let num_ss = problem.num_ss();
    let abs_tol = DVector::from_iterator(num_ss, (0..num_ss).map(|i| config.tol * problem.x0()[i]));

    let mut n_trial: usize = 0;
    let mut lambda = DVector::zeros(num_ss);
    let mut x = DVector::zeros(problem.num_total());
    let mut grad = DVector::from_element(num_ss, f64::MAX);
    let mut run_stats = RunStats::default();
    let mut rng: Option<StdRng> = None;

    while !converged(&grad, &abs_tol) && n_trial < config.max_trial {
        if n_trial == 1 {
            rng = Some(seeded_rng(config.seed));
            warn!(trial = n_trial, "first trial did not converge, seeding restart perturbation");
        }

        let _trial_span = tracing::debug_span!("trial", n_trial).entered();
        debug!(perturb_scale = config.perturb_scale, "building initial guess");

        lambda = initial_guess(
            problem,
            if n_trial >= 1 {
                Some((config.perturb_scale, rng.as_mut().expect("rng seeded before first restart")))
            } else {
                None
            },
        );
        x = get_x(problem, &lambda)?;
        grad = gradient(problem, &x);

        let mut delta = 0.99 * config.delta_bar;
        let mut iters = 0usize;
        let mut n_no_step = 0usize;
        run_stats = RunStats::default();

        while iters < config.max_iters && !converged(&grad, &abs_tol) && n_no_step < config.max_no_step {
            let hes = hessian(problem, &x);
            let (p, outcome) = search_direction(&grad, &hes, delta);
            run_stats.record(outcome);

            let neg_h = x.sum() - lambda.dot(problem.x0());
            let new_lambda = &lambda + &p;
            let rho = match get_x(problem, &new_lambda) {
                Ok(new_x) => {
                    let new_neg_h = new_x.sum() - new_lambda.dot(problem.x0());
                    let hp = &hes * &p;
                    let p_hp = p.dot(&hp);
                    (neg_h - new_neg_h) / (-grad.dot(&p) - p_hp / 2.0)
                }
                Err(_) => -1.0,
            };

            if rho < 0.25 {
                delta /= 4.0;
            } else if rho > 0.75 && (norm(&p) - delta).abs() < NUM_PRECISION {
                delta = min2(2.0 * delta, config.delta_bar);
            }

            let accepted = rho > config.eta;
            if accepted {
                lambda = new_lambda;
                n_no_step = 0;
            } else {
                n_no_step += 1;
            }
            trace!(rho, delta, ?outcome, accepted, "inner step");

            x = get_x(problem, &lambda)?;
            grad = gradient(problem, &x);
            iters += 1;
        }

        if n_no_step >= config.max_no_step {
            warn!(n_trial, iters, "trial stalled without satisfying tolerance");
        }

        n_trial += 1;
    }

    let solver_converged = n_trial < config.max_trial;
    debug!(solver_converged, n_trial, "trust-region loop finished");

    let free_energy = free_energy(problem, &x, config.kt, config.moles_water_per_liter);

    Ok(SolveOutcome {
        x,
        converged: solver_converged,
        free_energy,
        run_stats,
    })
}
