//! Shared utilities: convergence tracking and residual checks.

pub mod convergence;
pub mod residual;

pub use convergence::{Convergence, EigenStats};
pub use residual::eigen_residual;
