use crate::codec::Partition;
use crate::error::MathError;
use crate::matrix::{neg_vec, Mat};

/// Build the embedding matrix `U(v)`: (n+1)×(n+1), identity on the
/// diagonal, row 0 equal to `[1, v[0], …, v[n−1]]`.
///
/// `U(v)` is invertible by construction, with `U(v)·U(−v) = I`: the only
/// off-diagonal entries sit in row 0 and cancel against their negation.
pub fn embedding_matrix(v: &[i64]) -> Result<Mat<i64>, MathError> {
    if v.is_empty() {
        return Err(MathError::EmptyWeights);
    }
    let mut u = Mat::identity(v.len() + 1);
    for (i, &vi) in v.iter().enumerate() {
        u.set(0, i + 1, vi);
    }
    Ok(u)
}

/// The inverse of `U(v)`, built as `U(−v)`.
pub fn embedding_inverse(v: &[i64]) -> Result<Mat<i64>, MathError> {
    embedding_matrix(&neg_vec(v))
}

/// Build the sign matrix `S1(w)`: (n+1)×(n+1), entry [0][0] = 1 for the
/// constant term, entry [i+1][i+1] = w[i], zero elsewhere.
///
/// The ±1-ness of `w` is the caller's contract; entries are written as-is.
pub fn sign_matrix(w: &Partition) -> Mat<i64> {
    let mut s = Mat::zero(w.len() + 1, w.len() + 1);
    s.set(0, 0, 1);
    for (i, &si) in w.signs().iter().enumerate() {
        s.set(i + 1, i + 1, si);
    }
    s
}
