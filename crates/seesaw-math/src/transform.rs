use crate::codec::Partition;
use crate::embed::{embedding_inverse, embedding_matrix, sign_matrix};
use crate::error::MathError;
use crate::matrix::{mat_vec_mul, Mat};

fn check_len(context: &'static str, v: &[i64], w: &Partition) -> Result<(), MathError> {
    if w.len() != v.len() {
        return Err(MathError::LengthMismatch {
            context,
            expected: v.len(),
            got: w.len(),
        });
    }
    Ok(())
}

/// Evaluate partition `w` of `v` through the embedding.
///
/// The sign vector is extended with a leading 0 (the constant slot) and
/// multiplied by `U(v)`; row 0 of the result is exactly Σ v[i]·w[i], and
/// the remaining rows carry `w` itself.
pub fn partition_evaluator(v: &[i64], w: &Partition) -> Result<Vec<i64>, MathError> {
    check_len("evaluator partition vs weights", v, w)?;
    let u = embedding_matrix(v)?;
    let mut extended = Vec::with_capacity(w.len() + 1);
    extended.push(0);
    extended.extend_from_slice(w.signs());
    Ok(mat_vec_mul(&u, &extended))
}

/// Build `R(w0→w) = U(v)·(S1(w0)·S1(w))·U(−v)`.
///
/// Applying `R` to `partition_evaluator(v, w0)` reproduces
/// `partition_evaluator(v, w)` exactly, every row, for any two partitions
/// of `v`. This is an algebraic identity over the integers, not an
/// approximation.
pub fn transformation_matrix(
    v: &[i64],
    w0: &Partition,
    w: &Partition,
) -> Result<Mat<i64>, MathError> {
    check_len("reference partition vs weights", v, w0)?;
    check_len("candidate partition vs weights", v, w)?;
    let u = embedding_matrix(v)?;
    let u_inverse = embedding_inverse(v)?;
    let signs = sign_matrix(w0).mul(&sign_matrix(w));
    Ok(u.mul(&signs.mul(&u_inverse)))
}

/// True iff the signed weighted sum of `w` is exactly zero.
pub fn is_partition_fair(v: &[i64], w: &Partition) -> Result<bool, MathError> {
    Ok(partition_evaluator(v, w)?[0] == 0)
}
