//! API options for the eigen-iterator.
//!
//! This module provides the `EigenOptions` struct, which carries the iteration
//! budget and the optional tolerances of the QR-iteration eigensolver. The
//! defaults run exactly ten iterations with no convergence check and validate
//! symmetry by exact comparison.

use num_traits::Float;

/// Eigensolver parameters.
#[derive(Debug, Clone)]
pub struct EigenOptions<T> {
    /// Iteration budget for the QR iteration
    pub max_iterations: usize,

    /// Optional off-diagonal Frobenius-norm threshold for early stopping
    pub off_diagonal_tol: Option<T>,

    /// Column-norm threshold below which Gram-Schmidt reports a singular column
    pub breakdown_tol: T,

    /// Optional tolerance for the symmetry check; `None` compares exactly
    pub symmetry_tol: Option<T>,
}

impl<T: Float> Default for EigenOptions<T> {
    fn default() -> Self {
        EigenOptions {
            max_iterations: 10,
            off_diagonal_tol: None,
            breakdown_tol: T::epsilon(),
            symmetry_tol: None,
        }
    }
}
