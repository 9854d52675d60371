/// A partition: one ±1 sign per weight, +1 and −1 naming the two sides.
///
/// The constructor does not police the ±1 contract; every path in this
/// workspace builds partitions through [`bits_to_partition`], which can
/// only produce ±1 entries.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Partition(Vec<i64>);

impl Partition {
    /// Wrap a sign vector. Entries are expected to be ±1 (caller contract).
    pub fn new(signs: Vec<i64>) -> Self {
        Self(signs)
    }

    /// Number of weights this partition assigns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the partition assigns nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sign entries.
    pub fn signs(&self) -> &[i64] {
        &self.0
    }
}

/// Decode a bit-string into a partition: `'1'` → +1, ANY other character
/// → −1.
///
/// The permissiveness is contractual, not an oversight: this decoder never
/// rejects input, it assigns everything unrecognized to the −1 side. The
/// interactive candidate path uses a stricter filter before reaching this
/// function; the two policies are intentionally different and are pinned
/// separately by tests.
pub fn bits_to_partition(bits: &str) -> Partition {
    Partition(bits.chars().map(|c| if c == '1' { 1 } else { -1 }).collect())
}

/// Encode a ±1 partition as a bit-string (`+1` → `'1'`, everything else
/// → `'0'`). Inverse of [`bits_to_partition`] on its image.
pub fn partition_to_bits(w: &Partition) -> String {
    w.signs().iter().map(|&s| if s > 0 { '1' } else { '0' }).collect()
}

/// Fixed-width, MSB-first bit-string of `index`.
///
/// Derived by shifting `index` right by each position from `width−1` down
/// to 0 and testing the low bit, so indices above `2^width − 1` lose their
/// high bits. Callers stay in range; only in-range behavior is contractual.
pub fn index_to_bits(index: u64, width: usize) -> String {
    let mut bits = String::with_capacity(width);
    for i in (0..width).rev() {
        bits.push(if (index >> i) & 1 == 1 { '1' } else { '0' });
    }
    bits
}
