//! Unshifted QR iteration for symmetric matrices.
//!
//! Starting from A₀ = A, each step factors the current iterate into Q·R and
//! reassembles it in reverse order: Aₖ₊₁ = Rₖ·Qₖ = Qₖᵀ·Aₖ·Qₖ. Every step is a
//! similarity transform, so the spectrum is preserved while the iterates of a
//! symmetric matrix drift toward diagonal form. The running product of the Q
//! factors converges toward the eigenvector basis, and the diagonal of the
//! final iterate is read off as the eigenvalues.
//!
//! The default runs exactly ten iterations with no convergence test, trading
//! accuracy for a bounded, predictable running time. An off-diagonal-norm
//! tolerance can be supplied to stop earlier; no shifting or deflation is
//! attempted.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §8.2 (unshifted QR)

use crate::config::EigenOptions;
use crate::eigen::{EigenDecomposition, EigenSolver};
use crate::error::SpektrError;
use crate::factor::{GramSchmidt, QrFactors};
use crate::matrix::dense::{identity, mat_mul, off_diagonal_norm};
use crate::utils::convergence::{Convergence, EigenStats};
use faer::Mat;
use num_traits::Float;
use tracing::{debug, warn};

/// QR-iteration eigensolver.
pub struct QrIteration<T> {
    pub conv: Convergence<T>,
    factorizer: GramSchmidt<T>,
}

impl<T: Float + From<f64> + Send + Sync> QrIteration<T> {
    /// Create a solver running a fixed number of iterations, no early stop.
    pub fn new(max_iters: usize) -> Self {
        Self {
            conv: Convergence { tol: None, max_iters },
            factorizer: GramSchmidt::new(),
        }
    }

    /// Enable early stopping once the off-diagonal Frobenius norm drops to `tol`.
    pub fn with_tolerance(mut self, tol: T) -> Self {
        self.conv.tol = Some(tol);
        self
    }

    /// Build a solver from the full option set.
    pub fn from_options(opts: &EigenOptions<T>) -> Self {
        Self {
            conv: Convergence {
                tol: opts.off_diagonal_tol,
                max_iters: opts.max_iterations,
            },
            factorizer: GramSchmidt::with_breakdown_tol(opts.breakdown_tol),
        }
    }
}

impl<T> EigenSolver<Mat<T>> for QrIteration<T>
where
    T: Float + From<f64> + Send + Sync + std::fmt::Debug,
{
    type Error = SpektrError;
    type Scalar = T;

    /// Run the QR iteration on a symmetric matrix.
    ///
    /// Symmetry itself is the caller's contract (see `EigenContext` for the
    /// validating entry point); a rank-deficient iterate surfaces as
    /// `SingularColumn`, propagated unchanged from the factorizer.
    fn eigen(&mut self, a: &Mat<T>) -> Result<EigenDecomposition<T>, SpektrError> {
        let n = crate::matrix::dense::square_dim(a)?;
        let mut current = a.clone();
        let mut overall_q = identity(n);
        let mut stats = EigenStats {
            iterations: 0,
            off_diagonal_norm: off_diagonal_norm(&current),
            converged: false,
        };

        for k in 1..=self.conv.max_iters {
            let QrFactors { q, r } = self.factorizer.factor(&current).inspect_err(|e| {
                warn!(iteration = k, "QR iteration aborted: {e}");
            })?;
            current = mat_mul(&r, &q);
            overall_q = mat_mul(&overall_q, &q);

            let off = off_diagonal_norm(&current);
            debug!(iteration = k, off_diagonal_norm = ?off);
            let (stop, s) = self.conv.check(off, k);
            stats = s;
            if stop {
                break;
            }
        }

        Ok(EigenDecomposition {
            values: (0..n).map(|i| current[(i, i)]).collect(),
            vectors: overall_q,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn diagonal_matrix_is_a_fixed_point() {
        let d = [4.0, 2.0, 1.0];
        let a = Mat::from_fn(3, 3, |i, j| if i == j { d[i] } else { 0.0 });
        let eig = QrIteration::new(10).eigen(&a).unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(eig.values[i], d[i], epsilon = 1e-12);
            // Eigenvectors are the standard basis, in input order.
            for r in 0..3 {
                let e = if r == i { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(eig.vectors[(r, i)], e, epsilon = 1e-12);
            }
        }
        assert_eq!(eig.stats.iterations, 10);
    }

    #[test]
    fn symmetric_2x2_converges_to_known_eigenpairs() {
        // [[2,1],[1,2]]: eigenvalues 3 and 1, eigenvectors (1,1)/√2 and (1,-1)/√2.
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 1.0 });
        let eig = QrIteration::new(10).eigen(&a).unwrap();

        assert_abs_diff_eq!(eig.values[0], 3.0, epsilon = 1e-4);
        assert_abs_diff_eq!(eig.values[1], 1.0, epsilon = 1e-4);

        let s = 0.5f64.sqrt();
        let expected = [[s, s], [s, -s]];
        for i in 0..2 {
            let v = eig.vector(i);
            // Parallel up to sign: |v · v_true| ≈ 1 for unit vectors.
            let align = (v[0] * expected[i][0] + v[1] * expected[i][1]).abs();
            assert_abs_diff_eq!(align, 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn tolerance_stops_before_the_budget() {
        let a = Mat::from_fn(3, 3, |i, j| if i == j { (i + 1) as f64 } else { 0.0 });
        let eig = QrIteration::new(50)
            .with_tolerance(1e-12)
            .eigen(&a)
            .unwrap();
        // Already diagonal: the first check fires.
        assert_eq!(eig.stats.iterations, 1);
        assert!(eig.stats.converged);
    }

    #[test]
    fn singular_iterate_aborts_with_the_factorizer_error() {
        // Symmetric with an identically zero first column.
        let a = Mat::from_fn(2, 2, |i, j| if (i, j) == (1, 1) { 5.0 } else { 0.0 });
        assert!(matches!(
            QrIteration::new(10).eigen(&a),
            Err(SpektrError::SingularColumn(0))
        ));
    }
}
