#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! seesaw-math: exact integer matrix algebra and the invertible embedding
//! that turns partition-balance checking into matrix multiplication.
//!
//! A weight list `v` is folded into an invertible matrix `U(v)` whose action
//! on a sign-extended partition vector places the signed sum Σ v[i]·w[i] in
//! row 0. Because `U(v)·U(−v) = I`, the evaluation of one partition can be
//! carried to any other by a single square matrix, without touching `v`
//! again. All arithmetic is exact `i64`; nothing here does I/O.

/// Error types for embedding and evaluation.
pub mod error;
/// Dense integer matrices and their products.
pub mod matrix;
/// Bit-string and index representations of partitions.
pub mod codec;
/// The embedding matrix U and the sign matrix S1.
pub mod embed;
/// Evaluators and the partition-to-partition transformation.
pub mod transform;

pub use codec::{bits_to_partition, index_to_bits, partition_to_bits, Partition};
pub use embed::{embedding_inverse, embedding_matrix, sign_matrix};
pub use error::MathError;
pub use matrix::{mat_vec_mul, neg_vec, Mat};
pub use transform::{is_partition_fair, partition_evaluator, transformation_matrix};
