#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! seesaw-verify: the verification driver over seesaw-math.
//!
//! One reference partition is evaluated once; every other partition's
//! evaluation is then reproduced two ways — directly, and by applying the
//! transformation matrix to the reference evaluation — and the two are
//! compared. The exhaustive sweep runs that comparison over all 2^n
//! partitions and is the correctness oracle for the whole construction.

/// Candidate bit-string assembly for interactively supplied partitions.
pub mod candidate;
/// Single-partition checks and the exhaustive sweep.
pub mod check;
/// Tab-separated results table rendering.
pub mod report;

pub use candidate::CandidateFilter;
pub use check::{check_partition, sweep_all_partitions, PartitionCheck, SweepReport};
pub use report::{render_row, render_table, write_table, TABLE_HEADER};
