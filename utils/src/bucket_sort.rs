/// Stable counting/bucket sort over a known, small integer key range `[0, num_buckets)`.
///
/// Runs in `O(items.len() + num_buckets)`. Because each bucket preserves the relative
/// order items arrived in, chaining two calls to this function (first by a primary key,
/// then by a secondary key) produces the same result as a single stable sort by
/// `(secondary, primary)`. The AM index uses exactly this to get "ascending `left`
/// within equal `right`" out of two single-key bucket passes, and the subgraph
/// builder's quintuple buckets rely on the same trick to stay ordered after being
/// reversed once.
///
/// Panics (via the out-of-bounds index) if `key` returns a value `>= num_buckets` for
/// any item; callers are expected to size `num_buckets` from a known-valid domain (e.g.
/// the ground-set size), not from data that hasn't been validated yet.
pub fn bucket_sort_by_key<T: Clone>(
    items: &[T],
    num_buckets: usize,
    key: impl Fn(&T) -> usize,
) -> Vec<T> {
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); num_buckets];
    for item in items {
        buckets[key(item)].push(item.clone());
    }
    buckets.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_key_in_ascending_bucket_order() {
        let items = vec![(3, 'a'), (1, 'b'), (3, 'c'), (0, 'd'), (1, 'e')];
        let sorted = bucket_sort_by_key(&items, 4, |&(k, _)| k);
        let keys: Vec<_> = sorted.iter().map(|&(k, _)| k).collect();
        assert_eq!(keys, vec![0, 1, 1, 3, 3]);
        // Ties preserve input order (stability).
        let letters: Vec<_> = sorted.iter().map(|&(_, c)| c).collect();
        assert_eq!(letters, vec!['d', 'b', 'e', 'a', 'c']);
    }

    #[test]
    fn chaining_two_passes_sorts_by_composite_key() {
        // (left, right) pairs; sort by left then by right, and check the result is
        // ascending on right with ties broken by ascending left, matching the AM index.
        let items = vec![(2, 5), (0, 5), (1, 3), (0, 3), (2, 3)];
        let by_left = bucket_sort_by_key(&items, 3, |&(l, _)| l);
        let by_right = bucket_sort_by_key(&by_left, 6, |&(_, r)| r);
        assert_eq!(by_right, vec![(0, 3), (1, 3), (2, 3), (0, 5), (2, 5)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let items: Vec<(usize, ())> = vec![];
        assert!(bucket_sort_by_key(&items, 5, |&(k, _)| k).is_empty());
    }
}
