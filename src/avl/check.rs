use crate::key::Key;
use crate::node::Link;
use thiserror::Error;

/// A violated structural invariant, as reported by
/// [`AvlTree::check`](super::AvlTree::check) and [`check_tree`].
///
/// Nodes are identified by their in-order position so that keys need not
/// implement `Debug`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A key orders before the key visited just ahead of it.
    #[error("key at in-order position {position} is less than its predecessor")]
    OutOfOrder {
        /// In-order position of the offending key.
        position: usize,
    },

    /// A stored balance differs from the real difference of subtree heights.
    #[error(
        "node at in-order position {position} stores balance {stored} but its \
         subtree heights differ by {actual}"
    )]
    BalanceMismatch {
        /// In-order position of the node.
        position: usize,
        /// The balance factor stored in the node.
        stored: i8,
        /// `height(right) - height(left)`.
        actual: isize,
    },

    /// A node's balance is outside `-1..=1`.
    #[error("node at in-order position {position} is unbalanced ({balance})")]
    Unbalanced {
        /// In-order position of the node.
        position: usize,
        /// The node's balance factor.
        balance: i8,
    },

    /// The number of nodes does not match the recorded length.
    #[error("tree records {expected} keys but holds {actual}")]
    LenMismatch {
        /// The recorded length.
        expected: usize,
        /// The number of nodes found.
        actual: usize,
    },
}

struct Checker<'a, K> {
    prev: Option<&'a K>,
    position: usize,
}

impl<'a, K: Key> Checker<'a, K> {
    // Returns the subtree's height.
    fn visit(&mut self, link: &'a Link<K>) -> Result<usize, InvariantError> {
        let n = match link.as_deref() {
            None => return Ok(0),
            Some(n) => n,
        };

        let lf_ht = self.visit(&n.link[0])?;

        let position = self.position;
        if self.prev.map_or(false, |p| n.data.less(p)) {
            return Err(InvariantError::OutOfOrder { position });
        }
        self.prev = Some(&n.data);
        self.position += 1;

        let rt_ht = self.visit(&n.link[1])?;

        let actual = rt_ht as isize - lf_ht as isize;
        if actual != n.balance as isize {
            return Err(InvariantError::BalanceMismatch {
                position,
                stored: n.balance,
                actual,
            });
        }

        if !(-1..=1).contains(&n.balance) {
            return Err(InvariantError::Unbalanced {
                position,
                balance: n.balance,
            });
        }

        Ok(1 + lf_ht.max(rt_ht))
    }
}

/// Verifies that the tree rooted at `tree` is ordered and AVL-balanced with
/// correct stored balances, and returns its number of nodes.
pub fn check_tree<K: Key>(tree: &Link<K>) -> Result<usize, InvariantError> {
    let mut checker = Checker {
        prev: None,
        position: 0,
    };
    checker.visit(tree)?;
    Ok(checker.position)
}
