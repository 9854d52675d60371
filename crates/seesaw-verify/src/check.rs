use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use seesaw_math::{
    bits_to_partition, index_to_bits, mat_vec_mul, partition_evaluator, transformation_matrix,
    MathError, Partition,
};

/// Outcome of checking one candidate partition against the reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionCheck {
    /// The candidate's bit-string form.
    pub bits: String,
    /// Signed sum reproduced through the transformation matrix.
    pub transformed: i64,
    /// Signed sum computed directly from the candidate.
    pub direct: i64,
    /// `transformed == direct`.
    pub matched: bool,
    /// `direct == 0`: the two sides balance.
    pub fair: bool,
}

/// Outcome of the exhaustive sweep, in increasing partition-index order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// One record per partition, index order.
    pub checks: Vec<PartitionCheck>,
    /// AND of all `matched` flags.
    pub all_matched: bool,
}

impl SweepReport {
    /// The fair subset of the sweep.
    pub fn fair_bits(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| c.fair)
            .map(|c| c.bits.as_str())
            .collect()
    }
}

/// Check one candidate: decode `bits`, evaluate it directly, reproduce the
/// evaluation from `evaluator_w0` through the transformation matrix, and
/// compare the two signed sums.
///
/// `evaluator_w0` must be the evaluator of `w0` under the same `v`; the
/// caller computes it once per run and shares it across every check.
pub fn check_partition(
    v: &[i64],
    w0: &Partition,
    evaluator_w0: &[i64],
    bits: &str,
) -> Result<PartitionCheck, MathError> {
    let w = bits_to_partition(bits);
    let direct = partition_evaluator(v, &w)?;
    let r = transformation_matrix(v, w0, &w)?;
    let transformed = mat_vec_mul(&r, evaluator_w0);

    let matched = transformed[0] == direct[0];
    if !matched {
        debug!(
            bits,
            transformed = transformed[0],
            direct = direct[0],
            "transformed evaluation diverged from direct evaluation"
        );
    }
    Ok(PartitionCheck {
        bits: bits.to_owned(),
        transformed: transformed[0],
        direct: direct[0],
        matched,
        fair: direct[0] == 0,
    })
}

/// Run [`check_partition`] over every one of the 2^n partitions of `v`,
/// in increasing index order.
///
/// The checks are pure functions of `(v, w0, w)` and run data-parallel;
/// collection preserves index order, so the report is identical to a
/// sequential sweep. The sweep is exponential on purpose: it is the
/// correctness oracle, not a performance surface.
pub fn sweep_all_partitions(v: &[i64], w0: &Partition) -> Result<SweepReport, MathError> {
    assert!(v.len() < 64, "sweep index would overflow a u64");
    let evaluator_w0 = partition_evaluator(v, w0)?;
    let n = v.len();
    let count = 1u64 << n;
    info!(n, count, "sweeping all partitions");

    let checks = (0..count)
        .into_par_iter()
        .map(|index| check_partition(v, w0, &evaluator_w0, &index_to_bits(index, n)))
        .collect::<Result<Vec<_>, _>>()?;

    let all_matched = checks.iter().all(|c| c.matched);
    info!(all_matched, "sweep finished");
    Ok(SweepReport { checks, all_matched })
}
