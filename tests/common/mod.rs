use proptest::prelude::*;
use std::collections::BTreeMap;

#[allow(dead_code)]
pub(super) fn assert_eq_iters<I: Iterator, J: Iterator<Item = I::Item>>(
    mut i: I,
    mut j: J,
) where
    I::Item: std::fmt::Debug + Eq, // same inferred for J::Item
{
    loop {
        match (i.next(), j.next()) {
            (None, None) => return,
            (a, b) => assert_eq!(a, b),
        }
    }
}

#[allow(dead_code)]
#[derive(Clone, Debug)]
pub(super) enum Op {
    Insert(u16),
    Remove(u16),
}

// Keys are drawn from a narrow range so that repeats and removals of present
// keys are common.
#[allow(dead_code)]
pub(super) fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            (0u16..64).prop_map(Op::Insert),
            (0u16..64).prop_map(Op::Remove),
        ],
        0..512,
    )
}

#[allow(dead_code)]
pub(super) type U16Seq = Vec<u16>;

#[allow(dead_code)]
pub(super) fn small_int_seq() -> impl Strategy<Value = U16Seq> {
    prop::collection::vec(0u16..1024u16, 0..512)
}

#[allow(dead_code)]
pub(super) fn short_strings() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,2}", 0..512)
}

/// The classic upper bound on the height of an AVL tree with `n` nodes.
#[allow(dead_code)]
pub(super) fn avl_height_bound(n: usize) -> f64 {
    1.4405 * ((n + 2) as f64).log2() - 0.3277
}

/// Reference multiset: each key with its number of occurrences.
#[allow(dead_code)]
#[derive(Clone, Debug, Default)]
pub(super) struct Model<K> {
    counts: BTreeMap<K, usize>,
    len: usize,
}

#[allow(dead_code)]
impl<K: Clone + Ord> Model<K> {
    pub(super) fn insert(&mut self, k: K) {
        *self.counts.entry(k).or_insert(0) += 1;
        self.len += 1;
    }

    pub(super) fn remove(&mut self, k: &K) -> Option<K> {
        let cnt = self.counts.get_mut(k)?;
        *cnt -= 1;
        if *cnt == 0 {
            self.counts.remove(k);
        }
        self.len -= 1;
        Some(k.clone())
    }

    pub(super) fn count(&self, k: &K) -> usize {
        self.counts.get(k).copied().unwrap_or(0)
    }

    pub(super) fn len(&self) -> usize {
        self.len
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &K> {
        self.counts
            .iter()
            .flat_map(|(k, &n)| std::iter::repeat(k).take(n))
    }
}
