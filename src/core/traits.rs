//! Core linear-algebra traits for spektr.

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd + From<f64>;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// By-value column access for column-addressable matrices.
///
/// Gram-Schmidt mutates each extracted column while later projections still
/// read the matrix, so columns move out as independent copies rather than
/// aliases.
pub trait ColumnOps<T> {
    /// Owned copy of column j.
    fn column_owned(&self, j: usize) -> Vec<T>;
    /// Overwrite column j with the given entries.
    fn set_column(&mut self, j: usize, col: &[T]);
}
