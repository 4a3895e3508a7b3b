//! Poker-style combo detection over all visible board values.

/// Minimum number of visible values for a straight to count.
const MIN_STRAIGHT_LEN: usize = 5;

/// True if every visible value, sorted, forms one unbroken ascending run
/// with no gaps and no duplicates. All values participate; a subset run
/// is not enough.
pub fn is_straight(values: &[u32]) -> bool {
    if values.len() < MIN_STRAIGHT_LEN {
        return false;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[1] == w[0] + 1)
}

/// True if any value occurs at least `n` times.
pub fn has_of_a_kind(values: &[u32], n: usize) -> bool {
    let mut counts = std::collections::HashMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0usize) += 1;
    }
    counts.values().any(|&count| count >= n)
}

/// The combo effect fires when the board shows a full straight or three
/// of a kind.
pub fn combo_fires(values: &[u32]) -> bool {
    is_straight(values) || has_of_a_kind(values, 3)
}
