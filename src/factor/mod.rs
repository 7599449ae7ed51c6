//! QR factorization interfaces.

use faer::Mat;

/// A QR factorization: `a = q · r` with orthonormal `q` and upper-triangular `r`.
pub struct QrFactors<T> {
    /// Orthonormal columns
    pub q: Mat<T>,
    /// Upper triangular, zero below the diagonal by construction
    pub r: Mat<T>,
}

/// Per-column diagnostics hook for the factorizer.
///
/// Receives each column's residual norm (the would-be diagonal entry of R)
/// before normalization. The default implementation discards everything, so
/// the numeric kernel performs no I/O of its own; callers wanting a
/// factorization-time trace supply their own probe.
pub trait FactorProbe<T> {
    /// Called once per column j with the orthogonalized column's norm.
    fn column(&mut self, j: usize, norm: T);
}

/// Probe that ignores all events.
pub struct NoopProbe;

impl<T> FactorProbe<T> for NoopProbe {
    fn column(&mut self, _j: usize, _norm: T) {}
}

pub mod gram_schmidt;
pub use gram_schmidt::GramSchmidt;
