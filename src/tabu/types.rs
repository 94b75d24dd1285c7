//! Tabu memory and candidate selection.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Bounded FIFO memory of recently visited states.
///
/// Holds at most `tenure` keys; pushing onto a full list evicts the oldest.
/// Membership is an O(1) hash lookup.
///
/// # Examples
///
/// ```
/// use u_metabench::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.push("a");
/// tabu.push("b");
/// tabu.push("c");
/// assert!(!tabu.contains(&"a"));
/// assert!(tabu.contains(&"b") && tabu.contains(&"c"));
/// assert_eq!(tabu.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuList<K> {
    queue: VecDeque<K>,
    counts: HashMap<K, usize>,
    tenure: usize,
}

impl<K: Clone + Eq + Hash> TabuList<K> {
    /// Creates an empty list holding at most `tenure` keys.
    pub fn new(tenure: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(tenure),
            counts: HashMap::with_capacity(tenure),
            tenure,
        }
    }

    /// Records `key`, evicting the oldest entry when full.
    pub fn push(&mut self, key: K) {
        if self.tenure == 0 {
            return;
        }
        if self.queue.len() >= self.tenure {
            if let Some(old) = self.queue.pop_front() {
                if let Entry::Occupied(mut e) = self.counts.entry(old) {
                    *e.get_mut() -= 1;
                    if *e.get() == 0 {
                        e.remove();
                    }
                }
            }
        }
        *self.counts.entry(key.clone()).or_insert(0) += 1;
        self.queue.push_back(key);
    }

    /// Returns `true` if `key` is currently tabu.
    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is tabu.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of entries.
    pub fn tenure(&self) -> usize {
        self.tenure
    }
}

/// Picks the highest-scoring admissible candidate.
///
/// A candidate is admissible if it is not tabu, or if its score beats
/// `best_value` (aspiration). Ties keep the earliest candidate. Returns
/// `None` when no candidate is admissible with a score above
/// `f64::NEG_INFINITY`.
pub(crate) fn select_admissible<K: Clone + Eq + Hash>(
    candidates: &[(K, f64)],
    tabu: &TabuList<K>,
    best_value: f64,
) -> Option<usize> {
    let mut chosen = None;
    let mut chosen_value = f64::NEG_INFINITY;

    for (i, (state, value)) in candidates.iter().enumerate() {
        let admissible = !tabu.contains(state) || *value > best_value;
        if admissible && *value > chosen_value {
            chosen = Some(i);
            chosen_value = *value;
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_list_fifo_eviction() {
        let mut tabu = TabuList::new(3);
        for k in 0..10 {
            tabu.push(k);
            assert!(tabu.len() <= 3);
        }
        assert!(!tabu.contains(&6));
        assert!(tabu.contains(&7) && tabu.contains(&8) && tabu.contains(&9));
    }

    #[test]
    fn test_tabu_list_duplicate_keys() {
        let mut tabu = TabuList::new(2);
        tabu.push('x');
        tabu.push('x');
        tabu.push('y');
        // one 'x' evicted, the other still held
        assert!(tabu.contains(&'x'));
        tabu.push('z');
        assert!(!tabu.contains(&'x'));
        assert_eq!(tabu.len(), 2);
    }

    #[test]
    fn test_tabu_list_zero_tenure() {
        let mut tabu = TabuList::new(0);
        tabu.push(1);
        assert!(tabu.is_empty());
        assert!(!tabu.contains(&1));
    }

    #[test]
    fn test_select_prefers_best_non_tabu() {
        let tabu = TabuList::new(5);
        let candidates = vec![(1, 3.0), (2, 8.0), (3, 5.0)];
        assert_eq!(select_admissible(&candidates, &tabu, 10.0), Some(1));
    }

    #[test]
    fn test_select_aspiration_overrides_tabu() {
        // The only route to a new global best goes through a tabu state.
        let mut tabu = TabuList::new(5);
        tabu.push(2);
        let candidates = vec![(1, 4.0), (2, 12.0), (3, 6.0)];
        assert_eq!(select_admissible(&candidates, &tabu, 10.0), Some(1));
    }

    #[test]
    fn test_select_tabu_without_aspiration_is_skipped() {
        let mut tabu = TabuList::new(5);
        tabu.push(2);
        let candidates = vec![(1, 4.0), (2, 9.0), (3, 6.0)];
        assert_eq!(select_admissible(&candidates, &tabu, 10.0), Some(2));
    }

    #[test]
    fn test_select_none_admissible() {
        let mut tabu = TabuList::new(5);
        tabu.push(1);
        tabu.push(2);
        let candidates = vec![(1, 4.0), (2, 9.0)];
        assert_eq!(select_admissible(&candidates, &tabu, 10.0), None);
    }

    #[test]
    fn test_select_ignores_infeasible() {
        let tabu = TabuList::new(5);
        let candidates = vec![(1, f64::NEG_INFINITY), (2, f64::NEG_INFINITY)];
        assert_eq!(select_admissible(&candidates, &tabu, 0.0), None);
    }

    #[test]
    fn test_select_ties_keep_first() {
        let tabu = TabuList::new(5);
        let candidates = vec![(1, 5.0), (2, 5.0)];
        assert_eq!(select_admissible(&candidates, &tabu, 0.0), Some(0));
    }
}
