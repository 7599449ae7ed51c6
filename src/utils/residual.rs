//! Eigenpair residual computation.

use crate::core::traits::{InnerProduct, MatVec};
use faer::Mat;
use num_traits::Float;

/// Residual norm ‖A·v − λ·v‖₂ of a computed eigenpair.
///
/// An exact eigenpair gives zero; the size of the residual measures how far
/// the fixed-count QR iteration got for this pair.
pub fn eigen_residual<T>(a: &Mat<T>, value: T, vector: &[T]) -> T
where
    T: Float + From<f64> + Send + Sync,
{
    let x = vector.to_vec();
    let mut av = vec![T::zero(); vector.len()];
    a.matvec(&x, &mut av);
    for (avi, vi) in av.iter_mut().zip(vector) {
        *avi = *avi - value * *vi;
    }
    let ip = ();
    ip.norm(&av)
}
