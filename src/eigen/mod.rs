//! Eigensolver interface and decomposition result type.

use crate::core::traits::ColumnOps;
use crate::utils::convergence::EigenStats;
use faer::Mat;
use num_traits::Float;
use std::fmt;

/// Common interface for any eigensolver over a matrix type `M`.
pub trait EigenSolver<M> {
    type Error;
    /// Compute the (approximate) eigendecomposition of `a`.
    fn eigen(&mut self, a: &M) -> Result<EigenDecomposition<Self::Scalar>, Self::Error>;
    type Scalar: Copy + PartialOrd;
}

/// Approximate eigendecomposition of a symmetric matrix.
///
/// Eigenvalue i pairs positionally with column i of the accumulated
/// orthogonal matrix. No ordering beyond the index order of the final
/// iterate's diagonal is imposed.
pub struct EigenDecomposition<T> {
    /// Eigenvalues, in index order
    pub values: Vec<T>,
    /// Accumulated orthogonal matrix whose columns are the eigenvectors
    pub vectors: Mat<T>,
    /// Iteration stats from the solve
    pub stats: EigenStats<T>,
}

impl<T: Float> EigenDecomposition<T> {
    /// Problem dimension.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Owned copy of eigenvector i.
    pub fn vector(&self, i: usize) -> Vec<T> {
        self.vectors.column_owned(i)
    }

    /// The positionally paired (eigenvalue, eigenvector) list.
    pub fn pairs(&self) -> Vec<(T, Vec<T>)> {
        (0..self.len()).map(|i| (self.values[i], self.vector(i))).collect()
    }
}

impl<T: Float + fmt::Display> fmt::Display for EigenDecomposition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            write!(f, "eigenvalue {value:.4} with eigenvector [")?;
            for r in 0..self.vectors.nrows() {
                if r > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", self.vectors[(r, i)])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

pub mod qr_iteration;
pub use qr_iteration::QrIteration;
