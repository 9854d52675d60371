use thiserror::Error;

/// Errors from embedding construction and partition evaluation.
///
/// Shape violations inside raw matrix arithmetic are assertions, not
/// variants here: they can only arise from internal misuse. These variants
/// cover the inputs a caller actually controls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// The weight vector has no entries; the embedding would collapse to a
    /// 1×1 identity and every partition would be trivially "fair".
    #[error("weight vector is empty; nothing to partition")]
    EmptyWeights,

    /// A partition's length does not match the weight vector it is paired
    /// with.
    #[error("length mismatch in {context}: expected {expected}, got {got}")]
    LengthMismatch {
        /// Where the mismatch was detected.
        context: &'static str,
        /// Expected length.
        expected: usize,
        /// Got length.
        got: usize,
    },
}
