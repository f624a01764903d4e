use crate::node::{Link, Node};
use std::iter::FusedIterator;

/// An in-order iterator over the keys of an [`AvlTree`](super::AvlTree).
pub struct Iter<'a, K> {
    // the nodes whose keys and right subtrees are still to be visited
    work: Vec<&'a Node<K>>,
    len: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Iter {
            work: Vec::new(),
            len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<&'a Node<K>>) {
        while let Some(n) = curr {
            self.work.push(n);
            curr = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.work.pop()?;
        self.len -= 1;
        self.push_left_spine(n.right());
        Some(n.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K> FusedIterator for Iter<'a, K> {}

#[cfg(test)]
mod test {
    use crate::AvlTree;

    #[test]
    fn iter_len_test() {
        let t: AvlTree<_> = (0..10).collect();

        let mut iter = t.iter();
        let mut cnt = 10;
        while iter.next().is_some() {
            assert_eq!(iter.len(), cnt - 1);
            cnt -= 1;
        }
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_empty() {
        let t: AvlTree<u8> = AvlTree::new();
        assert_eq!(t.iter().len(), 0);
        assert_eq!(t.iter().next(), None);
    }

    #[test]
    fn iter_order_with_repeats() {
        let t = AvlTree::from([5, 3, 5, 1, 5, 4]);
        let v: Vec<_> = t.iter().copied().collect();
        assert_eq!(v, vec![1, 3, 4, 5, 5, 5]);

        let mut w = Vec::new();
        for &k in &t {
            w.push(k);
        }
        assert_eq!(v, w);
    }
}
