//! Random symmetric matrix generation.

use faer::Mat;
use rand::Rng;

use crate::matrix::dense::zeros;

/// Generates a random n×n symmetric matrix with entries drawn uniformly
/// from [0, 1).
///
/// The upper triangle (diagonal included) is sampled and mirrored, so
/// symmetry holds exactly, not just within rounding.
pub fn random_symmetric<R: Rng>(rng: &mut R, n: usize) -> Mat<f64> {
    let mut a = zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let v: f64 = rng.r#gen();
            a[(i, j)] = v;
            a[(j, i)] = v;
        }
    }
    a
}
