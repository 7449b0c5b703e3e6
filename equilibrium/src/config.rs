use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Tuning parameters for the trust-region dual solver.
///
/// Assembled once per [`crate::solve`] invocation. Validated at construction time rather than
/// clamped silently, so a malformed tuning value surfaces immediately instead of producing a
/// solver that quietly behaves differently than the caller asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum inner (Newton/dogleg) iterations per trial.
    pub max_iters: usize,
    /// Convergence tolerance; the absolute per-monomer tolerance is `tol * x0[i]`.
    pub tol: f64,
    /// Upper bound on the trust radius.
    pub delta_bar: f64,
    /// Step-acceptance threshold, must lie in `(0, 0.25)`.
    pub eta: f64,
    /// Thermal energy unit (kcal/mol) used to scale the free energy.
    pub kt: f64,
    /// Stall threshold: consecutive rejected steps before a restart is triggered.
    pub max_no_step: usize,
    /// Maximum number of perturbed restarts.
    pub max_trial: usize,
    /// Initial magnitude of the restart perturbation applied to lambda.
    pub perturb_scale: f64,
    /// Moles of water per liter of solution, used to convert the free energy to kcal/L.
    pub moles_water_per_liter: f64,
    /// RNG seed for restart perturbations. Zero requests a system/entropy-derived seed.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 10_000,
            tol: 1e-7,
            delta_bar: 1000.0,
            eta: 0.05,
            kt: 0.001_987_2 * 310.15,
            max_no_step: 50,
            max_trial: 50,
            perturb_scale: 100.0,
            moles_water_per_liter: 55.14,
            seed: 0,
        }
    }
}

impl SolverConfig {
    /// Validates this configuration, returning [`SolveError::InvalidConfig`] on the first
    /// parameter that violates its documented domain.
    pub fn validate(&self) -> Result<(), SolveError> {
        let checks: &[(bool, &str)] = &[
            (self.max_iters > 0, "max_iters must be positive"),
            (self.tol > 0.0, "tol must be positive"),
            (self.delta_bar > 0.0, "delta_bar must be positive"),
            (
                self.eta > 0.0 && self.eta < 0.25,
                "eta must lie in (0, 0.25)",
            ),
            (self.kt > 0.0, "kt must be positive"),
            (self.max_no_step > 0, "max_no_step must be positive"),
            (self.max_trial > 0, "max_trial must be positive"),
            (self.perturb_scale > 0.0, "perturb_scale must be positive"),
            (
                self.moles_water_per_liter > 0.0,
                "moles_water_per_liter must be positive",
            ),
        ];
        for (ok, msg) in checks {
            if !ok {
                return Err(SolveError::InvalidConfig(msg.to_string()));
            }
        }
        Ok(())
    }

    /// Sets `eta`, validating it lies in `(0, 0.25)` as the trust-region method requires.
    pub fn with_eta(mut self, eta: f64) -> Result<Self, SolveError> {
        if !(eta > 0.0 && eta < 0.25) {
            return Err(SolveError::InvalidConfig(
                "eta must lie in (0, 0.25)".to_string(),
            ));
        }
        self.eta = eta;
        Ok(self)
    }

    /// Sets the RNG seed used for restart perturbations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
