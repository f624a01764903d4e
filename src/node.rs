use std::fmt::{Debug, Formatter};

/// An owned, possibly absent, subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// Selects one of a node's two child slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    /// The slot for keys ordered before the node's key.
    Left = 0,
    /// The slot for keys ordered after the node's key.
    Right = 1,
}

impl Dir {
    /// Picks `Right` when `go_right` holds and `Left` otherwise.
    pub fn toward(go_right: bool) -> Dir {
        if go_right {
            Dir::Right
        } else {
            Dir::Left
        }
    }

    /// The other direction.
    pub fn opp(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Index of the child slot in [`Node`]'s link array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// How a node's balance moves when this side grows: `-1` for `Left` and
    /// `+1` for `Right`.
    pub fn sign(self) -> i8 {
        2 * (self as i8) - 1
    }
}

/// A node of an AVL tree.
///
/// A node exclusively owns its two children.  Between operations its balance
/// is `height(right) - height(left)` and lies in `-1..=1`.  The fields are
/// only writable from inside the crate; visualizers and other read-only
/// collaborators use the accessors.
pub struct Node<K> {
    pub(crate) data: K,
    pub(crate) balance: i8,
    pub(crate) link: [Link<K>; 2],
}

impl<K> Node<K> {
    pub(crate) fn leaf(data: K) -> Box<Self> {
        Box::new(Node {
            data,
            balance: 0,
            link: [None, None],
        })
    }

    /// The stored key.
    pub fn data(&self) -> &K {
        &self.data
    }

    /// The stored balance factor, `height(right) - height(left)`.
    pub fn balance(&self) -> i8 {
        self.balance
    }

    /// The child in the given direction.
    pub fn link(&self, dir: Dir) -> Option<&Node<K>> {
        self.link[dir.index()].as_deref()
    }

    /// The left child.
    pub fn left(&self) -> Option<&Node<K>> {
        self.link(Dir::Left)
    }

    /// The right child.
    pub fn right(&self) -> Option<&Node<K>> {
        self.link(Dir::Right)
    }

    /// Is this node a leaf?
    pub fn is_leaf(&self) -> bool {
        self.link.iter().all(Option::is_none)
    }

    fn for_each<F: FnMut(&K)>(&self, g: &mut F) {
        if let Some(lf) = self.left() {
            lf.for_each(g);
        }

        g(&self.data);

        if let Some(rt) = self.right() {
            rt.for_each(g);
        }
    }
}

// The number of levels in the subtree, zero for an absent one.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| {
        1 + height(&n.link[0]).max(height(&n.link[1]))
    })
}

// Visits every key in order.
pub(crate) fn for_each<K, F: FnMut(&K)>(link: &Link<K>, mut g: F) {
    if let Some(n) = link.as_ref() {
        n.for_each(&mut g);
    }
}

impl<K: Clone> Clone for Node<K> {
    fn clone(&self) -> Self {
        Node {
            data: self.data.clone(),
            balance: self.balance,
            link: self.link.clone(),
        }
    }
}

impl<K: Debug> Debug for Node<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("(bal: {} {:?} ", self.balance, self.data))?;

        match self.left() {
            None => f.write_str(".")?,
            Some(lf) => lf.fmt(f)?,
        }

        f.write_str(" ")?;

        match self.right() {
            None => f.write_str(".")?,
            Some(rt) => rt.fmt(f)?,
        }

        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dir_arith() {
        assert_eq!(Dir::Left.opp(), Dir::Right);
        assert_eq!(Dir::Right.opp(), Dir::Left);
        assert_eq!(Dir::Left.index(), 0);
        assert_eq!(Dir::Right.index(), 1);
        assert_eq!(Dir::Left.sign(), -1);
        assert_eq!(Dir::Right.sign(), 1);
        assert_eq!(Dir::toward(true), Dir::Right);
        assert_eq!(Dir::toward(false), Dir::Left);
    }

    #[test]
    fn leaf_shape() {
        let n = Node::leaf(7);
        assert_eq!(*n.data(), 7);
        assert_eq!(n.balance(), 0);
        assert!(n.is_leaf());
        assert!(n.left().is_none() && n.right().is_none());
    }

    #[test]
    fn debug_fmt() {
        let mut n = Node::leaf(2);
        n.link[1] = Some(Node::leaf(3));
        n.balance = 1;
        assert_eq!(format!("{:?}", n), "(bal: 1 2 . (bal: 0 3 . .))");
    }

    #[test]
    fn height_and_for_each() {
        let mut root = Node::leaf(2);
        root.link[0] = Some(Node::leaf(1));
        let root = Some(root);
        assert_eq!(height(&root), 2);
        assert_eq!(height::<u8>(&None), 0);

        let mut seen = Vec::new();
        for_each(&root, |&k| seen.push(k));
        assert_eq!(seen, vec![1, 2]);
    }
}
