//! Property tests for the embedding and transformation identities.
//!
//! Weight entries are kept within ±10_000 and lengths within 1..10 so that
//! every intermediate product stays far inside the `i64` range.

use proptest::prelude::*;
use seesaw_math::{
    bits_to_partition, embedding_inverse, embedding_matrix, index_to_bits, mat_vec_mul,
    partition_evaluator, transformation_matrix, Mat, Partition,
};

fn weights() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-10_000i64..=10_000, 1..10)
}

fn signs(n: usize) -> impl Strategy<Value = Partition> {
    prop::collection::vec(prop::bool::ANY, n)
        .prop_map(|b| Partition::new(b.into_iter().map(|x| if x { 1 } else { -1 }).collect()))
}

proptest! {
    /// U(v)·U(−v) = I for every non-empty integer vector.
    #[test]
    fn prop_inverse_identity(v in weights()) {
        let u = embedding_matrix(&v).unwrap();
        let u_inv = embedding_inverse(&v).unwrap();
        prop_assert_eq!(u.mul(&u_inv), Mat::identity(v.len() + 1));
    }

    /// Decoding an index's bit-string yields the sign pattern of its
    /// binary digits, MSB first.
    #[test]
    fn prop_bit_round_trip(n in 1usize..16, seed in any::<u64>()) {
        let d = seed & ((1u64 << n) - 1);
        let bits = index_to_bits(d, n);
        let w = bits_to_partition(&bits);
        prop_assert_eq!(w.len(), n);
        for (i, &s) in w.signs().iter().enumerate() {
            prop_assert_eq!(s, if (d >> (n - 1 - i)) & 1 == 1 { 1 } else { -1 });
        }
    }

    /// The central claim: R(w0→w)·evaluator(w0) = evaluator(w), all rows.
    #[test]
    fn prop_transformation_correctness(
        (v, w0, w) in weights().prop_flat_map(|v| {
            let n = v.len();
            (Just(v), signs(n), signs(n))
        })
    ) {
        let e0 = partition_evaluator(&v, &w0).unwrap();
        let r = transformation_matrix(&v, &w0, &w).unwrap();
        prop_assert_eq!(mat_vec_mul(&r, &e0), partition_evaluator(&v, &w).unwrap());
    }

    /// Fairness is exactly "the signed sum is zero", computed without the
    /// transformation path.
    #[test]
    fn prop_fairness_definition(
        (v, w) in weights().prop_flat_map(|v| {
            let n = v.len();
            (Just(v), signs(n))
        })
    ) {
        let direct: i64 = v.iter().zip(w.signs()).map(|(a, s)| a * s).sum();
        prop_assert_eq!(
            seesaw_math::is_partition_fair(&v, &w).unwrap(),
            direct == 0
        );
    }
}
