//! Classical Gram-Schmidt QR factorization.
//!
//! Orthogonalizes the columns of a square matrix A left to right: each column
//! has its projections onto the previously computed orthonormal columns
//! subtracted, the remainder's norm becomes the diagonal entry of R, and the
//! normalized remainder becomes the next column of Q. Projection coefficients
//! land in the strict upper triangle of R, so A = Q·R holds by construction
//! and R is never written below the diagonal.
//!
//! A zero (or sub-tolerance) remainder norm means the column is linearly
//! dependent on its predecessors; the factorization reports this as a
//! breakdown instead of dividing by zero and letting NaNs spread.
//!
//! # References
//! - Trefethen & Bau, Numerical Linear Algebra, Lecture 7
//! - Golub & Van Loan, Matrix Computations, §5.2

use crate::core::traits::{ColumnOps, InnerProduct};
use crate::error::SpektrError;
use crate::factor::{FactorProbe, NoopProbe, QrFactors};
use crate::matrix::dense::{square_dim, zeros};
use faer::Mat;
use num_traits::Float;

/// Classical Gram-Schmidt factorizer.
///
/// Holds the breakdown tolerance: a column whose orthogonalized norm is at or
/// below it is reported as [`SpektrError::SingularColumn`]. The default,
/// machine epsilon, catches exact zeros and denormal noise without rejecting
/// legitimately small pivots.
pub struct GramSchmidt<T> {
    pub breakdown_tol: T,
}

impl<T: Float + From<f64> + Send + Sync> GramSchmidt<T> {
    /// Create a factorizer with the default breakdown tolerance.
    pub fn new() -> Self {
        GramSchmidt { breakdown_tol: T::epsilon() }
    }

    /// Create a factorizer with an explicit breakdown tolerance.
    pub fn with_breakdown_tol(tol: T) -> Self {
        GramSchmidt { breakdown_tol: tol }
    }

    /// Factor a square matrix into Q·R.
    ///
    /// # Errors
    /// * `NotSquare` / `EmptyMatrix` - the input shape is unusable
    /// * `SingularColumn(j)` - column j is linearly dependent on columns 0..j
    pub fn factor(&self, a: &Mat<T>) -> Result<QrFactors<T>, SpektrError> {
        self.factor_with_probe(a, &mut NoopProbe)
    }

    /// Factor with a diagnostics probe observing each column norm.
    pub fn factor_with_probe(
        &self,
        a: &Mat<T>,
        probe: &mut dyn FactorProbe<T>,
    ) -> Result<QrFactors<T>, SpektrError> {
        let n = square_dim(a)?;
        let mut q = zeros(n, n);
        let mut r = zeros(n, n);
        let ip = ();

        for j in 0..n {
            let mut v = a.column_owned(j);

            // Subtract the projection onto each previously orthogonalized
            // column; v ends orthogonal to all of Q[:,0..j].
            for i in 0..j {
                let qi = q.column_owned(i);
                let rij = ip.dot(&qi, &v);
                r[(i, j)] = rij;
                for (vk, qk) in v.iter_mut().zip(qi.iter()) {
                    *vk = *vk - rij * *qk;
                }
            }

            let v_norm = ip.norm(&v);
            probe.column(j, v_norm);
            if v_norm <= self.breakdown_tol {
                return Err(SpektrError::SingularColumn(j));
            }

            r[(j, j)] = v_norm;
            for vk in v.iter_mut() {
                *vk = *vk / v_norm;
            }
            q.set_column(j, &v);
        }

        Ok(QrFactors { q, r })
    }
}

impl<T: Float + From<f64> + Send + Sync> Default for GramSchmidt<T> {
    fn default() -> Self {
        Self::new()
    }
}
