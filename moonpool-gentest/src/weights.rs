//! Weighted choice over positional integer weights.
//!
//! Selection is split in two: [`pick_index`] maps an already drawn value in
//! `[0, total)` to an index, and [`choose_weighted`] draws that value from a
//! [`RandomProvider`]. An actor with weight 0 owns an empty slice of the
//! range and can never be picked.

use crate::random::RandomProvider;

/// Sum of the weights, widened so it cannot overflow.
pub fn total_weight(weights: &[u32]) -> u64 {
    weights.iter().map(|&w| u64::from(w)).sum()
}

/// Map a drawn value to the index whose cumulative bucket contains it.
///
/// Returns `None` when `drawn` is outside `[0, total)`, which includes every
/// draw against an empty or all-zero weight list.
pub fn pick_index(weights: &[u32], drawn: u64) -> Option<usize> {
    let mut done = 0u64;
    for (index, &weight) in weights.iter().enumerate() {
        let weight = u64::from(weight);
        if drawn < done + weight {
            return Some(index);
        }
        done += weight;
    }
    None
}

/// Choose an index with probability `weights[i] / total_weight(weights)`.
///
/// Returns `None` without touching the provider when the total is zero.
pub fn choose_weighted<R: RandomProvider>(weights: &[u32], rng: &mut R) -> Option<usize> {
    let total = total_weight(weights);
    if total == 0 {
        return None;
    }
    pick_index(weights, rng.random_range(0..total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::sim::SimRandomProvider;

    #[test]
    fn test_pick_index_bucket_boundaries() {
        let weights = [2, 0, 3];
        assert_eq!(pick_index(&weights, 0), Some(0));
        assert_eq!(pick_index(&weights, 1), Some(0));
        // index 1 has an empty bucket
        assert_eq!(pick_index(&weights, 2), Some(2));
        assert_eq!(pick_index(&weights, 4), Some(2));
        assert_eq!(pick_index(&weights, 5), None);
    }

    #[test]
    fn test_pick_index_degenerate_weights() {
        assert_eq!(pick_index(&[], 0), None);
        assert_eq!(pick_index(&[0, 0], 0), None);
    }

    #[test]
    fn test_total_weight_does_not_overflow() {
        assert_eq!(total_weight(&[u32::MAX, u32::MAX]), 2 * u64::from(u32::MAX));
        assert_eq!(total_weight(&[]), 0);
    }

    #[test]
    fn test_choose_weighted_zero_total() {
        let mut rng = SimRandomProvider::new(42);
        assert_eq!(choose_weighted(&[], &mut rng), None);
        assert_eq!(choose_weighted(&[0, 0, 0], &mut rng), None);
    }

    #[test]
    fn test_choose_weighted_single_positive_weight() {
        let mut rng = SimRandomProvider::new(42);
        for _ in 0..1_000 {
            assert_eq!(choose_weighted(&[0, 5, 0], &mut rng), Some(1));
        }
    }

    #[test]
    fn test_choose_weighted_relative_weights() {
        let mut rng = SimRandomProvider::new(789);
        let weights = [2, 1];
        let mut counts = [0usize; 2];
        for _ in 0..9_000 {
            if let Some(index) = choose_weighted(&weights, &mut rng) {
                counts[index] += 1;
            }
        }

        // Expect A:B ratio of roughly 2:1
        assert!(
            counts[0] > 5_600 && counts[0] < 6_400,
            "Expected ~6000 picks of index 0, got {}",
            counts[0]
        );
        assert_eq!(counts[0] + counts[1], 9_000);
    }
}
