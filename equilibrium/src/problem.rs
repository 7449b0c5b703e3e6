//! The owned `(A, G, x0)` bundle the solver operates on.
//!
//! Bundling these three into one validated type, rather than passing three loose arguments into
//! `solve`, mirrors bundling an operator and its data behind a single `SolverProblem`/
//! `OdeSolverProblem` value before handing it to a solver.

use nalgebra::{DMatrix, DVector};

use crate::error::SolveError;
use crate::linalg::transpose_int;

/// Stoichiometry, free energies, and target monomer fractions for one equilibrium system.
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumProblem {
    /// `numSS x numTotal`: `a[(i, j)]` is the count of monomer `i` in complex `j`.
    a: DMatrix<i64>,
    /// Transpose of `a`, cached once.
    at: DMatrix<i64>,
    /// Length `numTotal`, free energy of complex `j` in units of kT.
    g: DVector<f64>,
    /// Length `numSS`, target mole fraction of monomer `i`.
    x0: DVector<f64>,
}

impl EquilibriumProblem {
    /// Validates and bundles the problem data.
    ///
    /// Checks the shape agreement between `a`, `g`, and `x0`, that every `x0[i]` is strictly
    /// positive, and the coverage invariant from `SPEC_FULL.md` §3: every monomer must appear
    /// (with nonzero count) in at least one complex. None of this is part of the trust-region
    /// algorithm itself; it is the boundary validation a Rust entry point performs on
    /// caller-constructed matrices that the reference C implementation's fixed-up-front
    /// allocation never had to re-check.
    pub fn new(a: DMatrix<i64>, g: DVector<f64>, x0: DVector<f64>) -> Result<Self, SolveError> {
        let num_ss = x0.len();
        let num_total = g.len();

        if a.nrows() != num_ss || a.ncols() != num_total {
            return Err(SolveError::DimensionMismatch(format!(
                "A is {}x{} but x0 has length {} and G has length {}",
                a.nrows(),
                a.ncols(),
                num_ss,
                num_total
            )));
        }
        if num_ss == 0 || num_total == 0 {
            return Err(SolveError::DimensionMismatch(
                "numSS and numTotal must both be positive".to_string(),
            ));
        }
        for i in 0..num_ss {
            if x0[i] <= 0.0 {
                return Err(SolveError::DimensionMismatch(format!(
                    "x0[{i}] must be strictly positive, got {}",
                    x0[i]
                )));
            }
        }
        for j in 0..num_total {
            if a.column(j).iter().all(|&count| count == 0) {
                return Err(SolveError::DimensionMismatch(format!(
                    "complex {j} has an all-zero column in A"
                )));
            }
        }
        for i in 0..num_ss {
            if a.row(i).iter().all(|&count| count == 0) {
                return Err(SolveError::DimensionMismatch(format!(
                    "monomer {i} does not appear in any complex"
                )));
            }
        }

        let at = transpose_int(&a);
        Ok(Self { a, at, g, x0 })
    }

    pub fn num_ss(&self) -> usize {
        self.x0.len()
    }

    pub fn num_total(&self) -> usize {
        self.g.len()
    }

    pub fn a(&self) -> &DMatrix<i64> {
        &self.a
    }

    pub fn at(&self) -> &DMatrix<i64> {
        &self.at
    }

    pub fn g(&self) -> &DVector<f64> {
        &self.g
    }

    pub fn x0(&self) -> &DVector<f64> {
        &self.x0
    }

    /// `true` if monomer `i` appears in exactly one complex (itself, size 1).
    ///
    /// The equilibrium fraction of such a monomer is analytically known and is pinned exactly
    /// by the initial-guess generator (C6) rather than solved for.
    pub fn is_inert(&self, i: usize) -> bool {
        self.a.row(i).iter().filter(|&&count| count != 0).count() == 1
    }

    /// The unique complex index `j` such that `A[i][j] != 0`, for an inert monomer `i`.
    ///
    /// Panics if `i` is not inert; callers must check [`Self::is_inert`] first.
    pub fn inert_complex(&self, i: usize) -> usize {
        self.a
            .row(i)
            .iter()
            .position(|&count| count != 0)
            .expect("inert_complex called on a non-inert monomer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(a: &[i64], g: &[f64], x0: &[f64], num_ss: usize, num_total: usize) -> Result<EquilibriumProblem, SolveError> {
        EquilibriumProblem::new(
            DMatrix::from_row_slice(num_ss, num_total, a),
            DVector::from_row_slice(g),
            DVector::from_row_slice(x0),
        )
    }

    #[test]
    fn accepts_well_formed_problem() {
        let p = problem(&[1, 0, 1, 0, 1, 1], &[0.0, 0.0, -8.0], &[1e-5, 1e-5], 2, 3).unwrap();
        assert_eq!(p.num_ss(), 2);
        assert_eq!(p.num_total(), 3);
        assert!(!p.is_inert(0));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let a = DMatrix::from_row_slice(2, 3, &[1, 0, 1, 0, 1, 1]);
        let g = DVector::from_row_slice(&[0.0, 0.0]); // wrong length
        let x0 = DVector::from_row_slice(&[1e-5, 1e-5]);
        assert!(EquilibriumProblem::new(a, g, x0).is_err());
    }

    #[test]
    fn rejects_monomer_absent_from_every_complex() {
        // monomer 1 never appears
        let a = DMatrix::from_row_slice(2, 2, &[1, 1, 0, 0]);
        let g = DVector::from_row_slice(&[0.0, 0.0]);
        let x0 = DVector::from_row_slice(&[1e-5, 1e-5]);
        assert!(EquilibriumProblem::new(a, g, x0).is_err());
    }

    #[test]
    fn rejects_nonpositive_x0() {
        let a = DMatrix::from_row_slice(1, 1, &[1]);
        let g = DVector::from_row_slice(&[0.0]);
        let x0 = DVector::from_row_slice(&[0.0]);
        assert!(EquilibriumProblem::new(a, g, x0).is_err());
    }

    #[test]
    fn detects_inert_monomer() {
        let p = problem(&[1, 0, 0, 0, 1, 2], &[0.0, 0.0, -5.0], &[3e-6, 1e-5], 2, 3).unwrap();
        assert!(p.is_inert(0));
        assert_eq!(p.inert_complex(0), 0);
        assert!(!p.is_inert(1));
    }
}
