//! Iteration tracking & optional tolerance checks for the eigen-iterator.

/// Stopping criteria & stats.
///
/// `tol` is an off-diagonal Frobenius-norm threshold. When `None`, the loop
/// always runs to `max_iters`.
pub struct Convergence<T> {
    pub tol: Option<T>,
    pub max_iters: usize,
}

#[derive(Clone, Debug)]
pub struct EigenStats<T> {
    pub iterations: usize,
    pub off_diagonal_norm: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Returns (should_stop, stats) given current `off_norm` and iteration `i`.
    pub fn check(&self, off_norm: T, i: usize) -> (bool, EigenStats<T>) {
        let converged = self.tol.is_some_and(|t| off_norm <= t) || i >= self.max_iters;
        (
            converged,
            EigenStats {
                iterations: i,
                off_diagonal_norm: off_norm,
                converged,
            },
        )
    }
}
