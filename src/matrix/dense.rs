//! Dense-matrix helpers on top of Faer.
//!
//! This module provides the `DenseMatrix` trait for construction from raw
//! column-major storage, Float-generic primitives (zeros, identity, matrix
//! product) used by the factorization kernels, and the shape/symmetry checks
//! performed before a matrix enters the solvers.

use crate::error::SpektrError;
use faer::Mat;
use num_traits::Float;

/// Construction of dense matrices from raw storage.
pub trait DenseMatrix<T> {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self;
}

impl<T: Copy + Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
    }
}

/// All-zero n×m matrix.
pub fn zeros<T: Float>(nrows: usize, ncols: usize) -> Mat<T> {
    Mat::from_fn(nrows, ncols, |_, _| T::zero())
}

/// n×n identity matrix.
pub fn identity<T: Float>(n: usize) -> Mat<T> {
    Mat::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
}

/// Dense matrix product C = A · B.
pub fn mat_mul<T: Float>(a: &Mat<T>, b: &Mat<T>) -> Mat<T> {
    assert_eq!(a.ncols(), b.nrows(), "Inner dimensions must agree");
    Mat::from_fn(a.nrows(), b.ncols(), |i, j| {
        (0..a.ncols()).fold(T::zero(), |acc, k| acc + a[(i, k)] * b[(k, j)])
    })
}

/// Frobenius norm of the off-diagonal part of a matrix.
///
/// QR iteration drives a symmetric matrix toward diagonal form; this is the
/// quantity its optional convergence check watches.
pub fn off_diagonal_norm<T: Float>(a: &Mat<T>) -> T {
    let mut acc = T::zero();
    for j in 0..a.ncols() {
        for i in 0..a.nrows() {
            if i != j {
                acc = acc + a[(i, j)] * a[(i, j)];
            }
        }
    }
    acc.sqrt()
}

/// Returns the dimension of a square matrix, or the appropriate error.
pub fn square_dim<T>(a: &Mat<T>) -> Result<usize, SpektrError> {
    if a.nrows() != a.ncols() {
        return Err(SpektrError::NotSquare(a.nrows(), a.ncols()));
    }
    if a.nrows() == 0 {
        return Err(SpektrError::EmptyMatrix);
    }
    Ok(a.nrows())
}

/// Checks that a matrix equals its transpose, entry for entry.
///
/// Exact floating-point comparison, matching the contract that the caller
/// hands over a symmetric matrix. Use [`check_symmetric_within`] when the
/// input carries rounding noise and the caller has opted into a tolerance.
pub fn check_symmetric<T: Float>(a: &Mat<T>) -> Result<(), SpektrError> {
    for j in 0..a.ncols() {
        for i in 0..j {
            if a[(i, j)] != a[(j, i)] {
                return Err(SpektrError::NotSymmetric(i, j));
            }
        }
    }
    Ok(())
}

/// Tolerance-based symmetry check: |A[i,j] − A[j,i]| ≤ tol for all i, j.
pub fn check_symmetric_within<T: Float>(a: &Mat<T>, tol: T) -> Result<(), SpektrError> {
    for j in 0..a.ncols() {
        for i in 0..j {
            if (a[(i, j)] - a[(j, i)]).abs() > tol {
                return Err(SpektrError::NotSymmetric(i, j));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mat_mul_matches_manual() {
        // [[1,2],[3,4]] * [[5,6],[7,8]] = [[19,22],[43,50]]
        let a = Mat::from_fn(2, 2, |i, j| (1 + 2 * i + j) as f64);
        let b = Mat::from_fn(2, 2, |i, j| (5 + 2 * i + j) as f64);
        let c = mat_mul(&a, &b);
        assert_abs_diff_eq!(c[(0, 0)], 19.0);
        assert_abs_diff_eq!(c[(0, 1)], 22.0);
        assert_abs_diff_eq!(c[(1, 0)], 43.0);
        assert_abs_diff_eq!(c[(1, 1)], 50.0);
    }

    #[test]
    fn identity_is_neutral() {
        let a = Mat::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        let c = mat_mul(&a, &identity(3));
        for j in 0..3 {
            for i in 0..3 {
                assert_eq!(c[(i, j)], a[(i, j)]);
            }
        }
    }

    #[test]
    fn off_diagonal_norm_ignores_diagonal() {
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 7.0 } else { 3.0 });
        assert_abs_diff_eq!(off_diagonal_norm(&a), (18.0f64).sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn square_dim_rejects_bad_shapes() {
        let rect = Mat::<f64>::from_fn(2, 3, |_, _| 0.0);
        assert!(matches!(square_dim(&rect), Err(SpektrError::NotSquare(2, 3))));
        let empty = Mat::<f64>::from_fn(0, 0, |_, _| 0.0);
        assert!(matches!(square_dim(&empty), Err(SpektrError::EmptyMatrix)));
        let ok = Mat::<f64>::from_fn(2, 2, |_, _| 0.0);
        assert_eq!(square_dim(&ok).unwrap(), 2);
    }

    #[test]
    fn symmetry_checks() {
        let s = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 1.0 });
        assert!(check_symmetric(&s).is_ok());

        let mut a = s.clone();
        a[(0, 1)] = 1.0 + 1e-12;
        assert!(matches!(check_symmetric(&a), Err(SpektrError::NotSymmetric(0, 1))));
        assert!(check_symmetric_within(&a, 1e-9).is_ok());
        assert!(matches!(
            check_symmetric_within(&a, 1e-15),
            Err(SpektrError::NotSymmetric(0, 1))
        ));
    }
}
