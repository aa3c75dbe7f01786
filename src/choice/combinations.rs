//! Multi-target selection.
//!
//! Effects that pick several cards at once ("return up to ○ events",
//! "discard exactly ○ cards") offer every admissible subset of the
//! candidates as one action, so the whole pick is a single decision with a
//! single resolution.

use smallvec::SmallVec;

/// Small list of picked items.
pub type Picks<T> = SmallVec<[T; 4]>;

/// How many items a multi-target selection takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// Any subset of size `0..=min(n, |candidates|)`.
    UpTo(usize),
    /// Subsets of size exactly `min(n, |candidates|)`.
    Exactly(usize),
}

/// Enumerate subsets of `candidates` admissible under `mode`.
///
/// Subsets keep candidate order; they come out by increasing size, then in
/// lexicographic order of candidate positions.
///
/// ```
/// use gods_engine::choice::combinations::{combinations, SelectionMode};
///
/// let picks = combinations(&['a', 'b', 'c'], SelectionMode::UpTo(1));
/// assert_eq!(picks.len(), 4);
/// assert!(picks[0].is_empty());
///
/// let picks = combinations(&['a', 'b', 'c'], SelectionMode::Exactly(2));
/// assert_eq!(picks.len(), 3);
/// assert_eq!(picks[0].as_slice(), &['a', 'b']);
/// ```
#[must_use]
pub fn combinations<T: Copy>(candidates: &[T], mode: SelectionMode) -> Vec<Picks<T>> {
    let mut out = Vec::new();
    match mode {
        SelectionMode::UpTo(n) => {
            for size in 0..=n.min(candidates.len()) {
                of_size(candidates, size, &mut out);
            }
        }
        SelectionMode::Exactly(n) => of_size(candidates, n.min(candidates.len()), &mut out),
    }
    out
}

fn of_size<T: Copy>(candidates: &[T], size: usize, out: &mut Vec<Picks<T>>) {
    let mut positions: Vec<usize> = (0..size).collect();
    loop {
        out.push(positions.iter().map(|&i| candidates[i]).collect());

        // Advance the rightmost position that still has room.
        let Some(slot) = (0..size)
            .rev()
            .find(|&slot| positions[slot] < candidates.len() - size + slot)
        else {
            return;
        };
        positions[slot] += 1;
        for next in slot + 1..size {
            positions[next] = positions[next - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_up_to_zero_is_single_empty_pick() {
        let picks = combinations(&[1, 2, 3], SelectionMode::UpTo(0));
        assert_eq!(picks.len(), 1);
        assert!(picks[0].is_empty());
    }

    #[test]
    fn test_exactly_caps_at_candidates() {
        let picks = combinations(&[1, 2], SelectionMode::Exactly(5));
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].as_slice(), &[1, 2]);
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(combinations::<u8>(&[], SelectionMode::UpTo(3)).len(), 1);
        assert_eq!(combinations::<u8>(&[], SelectionMode::Exactly(3)).len(), 1);
    }

    #[test]
    fn test_order_by_size_then_position() {
        let picks = combinations(&[1, 2, 3], SelectionMode::UpTo(2));
        let flat: Vec<Vec<i32>> = picks.into_iter().map(|p| p.into_vec()).collect();
        assert_eq!(
            flat,
            vec![
                vec![],
                vec![1],
                vec![2],
                vec![3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_up_to_counts(len in 0usize..8, n in 0usize..10) {
            let candidates: Vec<usize> = (0..len).collect();
            let expected: usize = (0..=n.min(len)).map(|k| binomial(len, k)).sum();
            prop_assert_eq!(combinations(&candidates, SelectionMode::UpTo(n)).len(), expected);
        }

        #[test]
        fn prop_exactly_counts(len in 0usize..8, n in 0usize..10) {
            let candidates: Vec<usize> = (0..len).collect();
            let k = n.min(len);
            let picks = combinations(&candidates, SelectionMode::Exactly(n));
            prop_assert_eq!(picks.len(), binomial(len, k));
            prop_assert!(picks.iter().all(|p| p.len() == k));
        }
    }
}
