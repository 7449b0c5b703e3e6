//! Equilibrium mole fractions of aggregating molecular complexes in dilute solution.
//!
//! Given the stoichiometry of a fixed set of complexes, their standard free energies, and the
//! total amount of each monomer, [`solve`] computes the equilibrium mole fraction of every
//! complex by minimizing a convex free-energy functional subject to mass-balance constraints.
//! The constrained primal is converted to an unconstrained concave dual and solved with a
//! trust-region Newton method using a dogleg step (Nocedal & Wright, *Numerical Optimization*,
//! ch. 4).
//!
//! This crate is the solver only: it does not discover which complexes are thermodynamically
//! relevant, parse input files, or enumerate complexes from sequence. Callers supply the
//! stoichiometry matrix, free energies, and target mole fractions; this crate returns the
//! converged mole fractions and free energy.
//!
//! ```
//! use equilibrium::{solve, EquilibriumProblem, SolverConfig};
//! use nalgebra::{DMatrix, DVector};
//!
//! // One monomer, one complex (itself): no aggregation.
//! let problem = EquilibriumProblem::new(
//!     DMatrix::from_row_slice(1, 1, &[1]),
//!     DVector::from_row_slice(&[0.0]),
//!     DVector::from_row_slice(&[1e-6]),
//! ).unwrap();
//! let outcome = solve(&problem, &SolverConfig::default()).unwrap();
//! assert!(outcome.converged);
//! assert!((outcome.x[0] - 1e-6).abs() < 1e-9);
//! ```

mod cholesky;
mod config;
mod convergence;
mod dogleg;
mod error;
mod free_energy;
mod gradient;
mod initial_guess;
mod linalg;
mod parameter_map;
mod perturb;
mod problem;
mod rng;
mod trust_region;

pub use config::SolverConfig;
pub use dogleg::StepOutcome;
pub use error::SolveError;
pub use problem::EquilibriumProblem;
pub use trust_region::{solve, RunStats, SolveOutcome};

/// Overflow ceiling on `logx = -G[j] + <lambda, AT[j]>`. A fixed value, not a tuning parameter:
/// it exists purely to keep `exp(logx)` finite, so it is pinned well below `f64::MAX`'s
/// log (≈709.78) with comfortable margin rather than configured per problem.
pub const MAXLOGX: f64 = 700.0;

/// Tolerance used by the trust-region driver's "step hit the boundary" test
/// (`|‖p‖ - delta| < NUM_PRECISION`), which decides whether to grow the trust radius.
pub const NUM_PRECISION: f64 = 1e-9;
