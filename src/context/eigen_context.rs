//! Validating entry point for the eigensolver.
//!
//! This module provides the `EigenContext` struct, which holds the solver
//! options, checks the input matrix (shape, then symmetry) and runs the QR
//! iteration. It is the surface an outer CLI or service layer calls with a
//! matrix it obtained from a file or from the random generator.
//!
//! # Usage
//!
//! 1. Construct an `EigenContext` (usually from `EigenOptions::default()`).
//! 2. Call `solve` with a symmetric matrix; receive the positionally paired
//!    eigenvalues and eigenvectors plus iteration stats.

use crate::config::EigenOptions;
use crate::eigen::{EigenDecomposition, EigenSolver, QrIteration};
use crate::error::SpektrError;
use crate::matrix::dense::{check_symmetric, check_symmetric_within, square_dim};
use faer::Mat;
use num_traits::Float;
use tracing::{debug, info};

/// Context and configuration for a symmetric eigenproblem.
pub struct EigenContext<T> {
    /// Solver options
    pub opts: EigenOptions<T>,
}

impl<T> EigenContext<T>
where
    T: Float + From<f64> + Send + Sync + std::fmt::Debug,
{
    pub fn new(opts: EigenOptions<T>) -> Self {
        Self { opts }
    }

    /// Validate `a` and compute its approximate eigendecomposition.
    ///
    /// The symmetry check compares entries exactly unless
    /// `opts.symmetry_tol` was set, in which case the tolerant comparison is
    /// used instead.
    ///
    /// # Errors
    /// * `NotSquare` / `EmptyMatrix` - unusable shape
    /// * `NotSymmetric` - the symmetry contract is violated
    /// * `SingularColumn` - a rank-deficient iterate stopped the QR iteration
    pub fn solve(&self, a: &Mat<T>) -> Result<EigenDecomposition<T>, SpektrError> {
        let n = square_dim(a)?;
        info!(dimension = n, max_iterations = self.opts.max_iterations, "eigensolve start");

        match self.opts.symmetry_tol {
            None => check_symmetric(a)?,
            Some(tol) => check_symmetric_within(a, tol)?,
        }

        let mut solver = QrIteration::from_options(&self.opts);
        let eig = solver.eigen(a)?;
        debug!(
            iterations = eig.stats.iterations,
            converged = eig.stats.converged,
            "eigensolve done"
        );
        Ok(eig)
    }
}

impl<T> Default for EigenContext<T>
where
    T: Float + From<f64> + Send + Sync + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new(EigenOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn solves_a_symmetric_matrix_end_to_end() {
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 1.0 });
        let eig = EigenContext::default().solve(&a).unwrap();
        assert_abs_diff_eq!(eig.values[0], 3.0, epsilon = 1e-4);
        assert_abs_diff_eq!(eig.values[1], 1.0, epsilon = 1e-4);
        assert_eq!(eig.stats.iterations, 10);
    }

    #[test]
    fn rejects_asymmetric_input() {
        let a = Mat::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
        assert!(matches!(
            EigenContext::default().solve(&a),
            Err(SpektrError::NotSymmetric(0, 1))
        ));
    }

    #[test]
    fn symmetry_tolerance_is_opt_in() {
        let mut a = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 1.0 });
        a[(0, 1)] = 1.0 + 1e-12;

        // Exact check (the default) rejects the perturbed matrix.
        assert!(EigenContext::<f64>::default().solve(&a).is_err());

        let opts = EigenOptions { symmetry_tol: Some(1e-9), ..EigenOptions::default() };
        assert!(EigenContext::new(opts).solve(&a).is_ok());
    }

    #[test]
    fn rejects_rectangular_input() {
        let a = Mat::<f64>::from_fn(3, 2, |_, _| 1.0);
        assert!(matches!(
            EigenContext::default().solve(&a),
            Err(SpektrError::NotSquare(3, 2))
        ));
    }
}
