//! Track sequencing logic
//!
//! Pure next/previous index resolution under linear and shuffle traversal,
//! plus shuffle-order generation. No state, no device access.

use rand::seq::SliceRandom;
use rand::Rng;

/// Resolve the track that follows `current`.
///
/// Linear mode steps `(current + 1) mod track_count`, wrapping from the
/// last catalog index back to the first. Shuffle mode steps to the next
/// slot of `shuffle_order`, wrapping from the end of the permutation to
/// its start.
///
/// Callers guarantee `track_count > 0`, `current < track_count`, and (in
/// shuffle mode) that `shuffle_order` is a permutation of the catalog
/// indices containing `current`.
pub fn resolve_next(
    track_count: usize,
    current: usize,
    shuffled: bool,
    shuffle_order: &[usize],
) -> usize {
    debug_assert!(track_count > 0);
    debug_assert!(current < track_count);

    if !shuffled {
        return (current + 1) % track_count;
    }

    debug_assert!(shuffle_order.contains(&current));
    let position = locate(current, shuffle_order);
    shuffle_order[(position + 1) % shuffle_order.len()]
}

/// Resolve the track that precedes `current`.
///
/// Symmetric to [`resolve_next`]: wraps from the first catalog index (or
/// first shuffle slot) back to the last.
pub fn resolve_previous(
    track_count: usize,
    current: usize,
    shuffled: bool,
    shuffle_order: &[usize],
) -> usize {
    debug_assert!(track_count > 0);
    debug_assert!(current < track_count);

    if !shuffled {
        return (current + track_count - 1) % track_count;
    }

    debug_assert!(shuffle_order.contains(&current));
    let position = locate(current, shuffle_order);
    let len = shuffle_order.len();
    shuffle_order[(position + len - 1) % len]
}

/// Generate a uniformly random traversal order over `[0, track_count)`.
///
/// Fisher-Yates via `SliceRandom::shuffle`, so every permutation is
/// equally likely given a uniform `rng`. Deterministic under a seeded
/// generator, which is how the tests pin down traversal sequences.
pub fn generate_shuffle_order(track_count: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..track_count).collect();
    order.shuffle(rng);
    order
}

fn locate(current: usize, shuffle_order: &[usize]) -> usize {
    shuffle_order
        .iter()
        .position(|&index| index == current)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn linear_next_wraps_to_start() {
        assert_eq!(resolve_next(8, 7, false, &[]), 0);
        assert_eq!(resolve_next(8, 3, false, &[]), 4);
        assert_eq!(resolve_next(1, 0, false, &[]), 0);
    }

    #[test]
    fn linear_previous_wraps_to_end() {
        assert_eq!(resolve_previous(8, 0, false, &[]), 7);
        assert_eq!(resolve_previous(8, 4, false, &[]), 3);
        assert_eq!(resolve_previous(1, 0, false, &[]), 0);
    }

    #[test]
    fn linear_round_trip() {
        for n in 1..20 {
            for i in 0..n {
                assert_eq!(resolve_previous(n, resolve_next(n, i, false, &[]), false, &[]), i);
                assert_eq!(resolve_next(n, resolve_previous(n, i, false, &[]), false, &[]), i);
            }
        }
    }

    #[test]
    fn shuffle_follows_permutation_with_wrap() {
        let order = vec![2, 0, 3, 1];

        assert_eq!(resolve_next(4, 2, true, &order), 0);
        assert_eq!(resolve_next(4, 3, true, &order), 1);
        // Last shuffle slot wraps to the first
        assert_eq!(resolve_next(4, 1, true, &order), 2);

        assert_eq!(resolve_previous(4, 0, true, &order), 2);
        // First shuffle slot wraps to the last
        assert_eq!(resolve_previous(4, 2, true, &order), 1);
    }

    #[test]
    fn shuffle_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let order = generate_shuffle_order(12, &mut rng);

        for &i in &order {
            assert_eq!(resolve_previous(12, resolve_next(12, i, true, &order), true, &order), i);
        }
    }

    #[test]
    fn generated_order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);

        for n in [0, 1, 2, 5, 33, 100] {
            let order = generate_shuffle_order(n, &mut rng);
            assert_eq!(order.len(), n);

            let unique: HashSet<usize> = order.iter().copied().collect();
            assert_eq!(unique.len(), n);
            assert!(order.iter().all(|&i| i < n));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = generate_shuffle_order(50, &mut StdRng::seed_from_u64(99));
        let b = generate_shuffle_order(50, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
