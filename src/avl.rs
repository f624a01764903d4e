use crate::key::Key;
use crate::node::{self, Dir, Link, Node};
use crate::rotate::{insert_balance, remove_balance};
use log::trace;
use std::fmt::{Debug, Formatter};
use std::mem::replace;

mod check;
mod iter;

pub use check::{check_tree, InvariantError};
pub use iter::Iter;

// Continuation flag of the recursive walks: once set, the subtree's height is
// known to be unchanged and no ancestor needs to adjust its balance.
struct Done(bool);

#[cfg(test)]
macro_rules! chk_tree {
    ( $x:expr ) => {{
        let t = $x;
        if let Err(e) = t.check() {
            panic!("broken tree: {}", e);
        }
        t
    }};
}

#[cfg(not(test))]
macro_rules! chk_tree {
    ( $x:expr ) => {{
        $x
    }};
}

// Inserts data below root and returns the new subtree root and whether the
// ancestors are done adjusting balances.
fn insert_r<K: Key>(root: Link<K>, data: K) -> (Box<Node<K>>, Done) {
    let mut root = match root {
        None => return (Node::leaf(data), Done(false)), // *** EARLY RETURN ***
        Some(n) => n,
    };

    // Equal keys go left: only `less` is consulted on the way down.
    let go_right = root.data.less(&data);
    debug_assert!(
        !(go_right && data.less(&root.data)),
        "Key::less is not a strict order"
    );

    let dir = Dir::toward(go_right);
    let (child, done) = insert_r(root.link[dir.index()].take(), data);
    root.link[dir.index()] = Some(child);
    if done.0 {
        return (root, done);
    }

    root.balance += dir.sign();
    match root.balance {
        0 => (root, Done(true)),
        -1 | 1 => (root, Done(false)),
        _ => (insert_balance(root, dir), Done(true)),
    }
}

// Balance bookkeeping for a node whose `dir` subtree just lost a level,
// unless `done` says otherwise.
fn shrunk<K>(mut root: Box<Node<K>>, dir: Dir, done: Done) -> (Box<Node<K>>, Done) {
    if done.0 {
        return (root, done);
    }

    root.balance -= dir.sign();
    match root.balance {
        -1 | 1 => (root, Done(true)),
        0 => (root, Done(false)),
        _ => {
            let (root, done) = remove_balance(root, dir);
            (root, Done(done))
        }
    }
}

// Unlinks the rightmost node of the subtree and returns its key.
fn remove_max<K>(mut root: Box<Node<K>>) -> (Link<K>, Done, K) {
    match root.link[Dir::Right.index()].take() {
        Some(right) => {
            let (right, done, max) = remove_max(right);
            root.link[Dir::Right.index()] = right;
            let (root, done) = shrunk(root, Dir::Right, done);
            (Some(root), done, max)
        }

        None => {
            let Node {
                data,
                link: [left, _],
                ..
            } = *root;
            (left, Done(false), data)
        }
    }
}

// Removes one key equal to data from the subtree.  Returns the new subtree
// root, whether the ancestors are done, and the removed key.
fn remove_r<K: Key>(root: Link<K>, data: &K) -> (Link<K>, Done, Option<K>) {
    let mut root = match root {
        None => return (None, Done(true), None), // *** EARLY RETURN ***
        Some(n) => n,
    };

    if root.data.equals(data) {
        debug_assert!(
            !root.data.less(data) && !data.less(&root.data),
            "Key::equals is inconsistent with Key::less"
        );
        let left = match root.link[Dir::Left.index()].take() {
            Some(left) if root.link[Dir::Right.index()].is_some() => left,

            left => {
                // at most one child: splice the node out
                let Node {
                    data: key,
                    link: [_, right],
                    ..
                } = *root;
                return (left.or(right), Done(false), Some(key));
            }
        };

        // The in-order predecessor's key moves up into this node and the
        // predecessor's node is unlinked instead.
        let (left, done, pred) = remove_max(left);
        root.link[Dir::Left.index()] = left;
        let key = replace(&mut root.data, pred);
        let (root, done) = shrunk(root, Dir::Left, done);
        return (Some(root), done, Some(key));
    }

    let go_right = root.data.less(data);
    debug_assert!(
        go_right || data.less(&root.data),
        "Key::equals is inconsistent with Key::less"
    );

    let dir = Dir::toward(go_right);
    let (child, done, removed) = remove_r(root.link[dir.index()].take(), data);
    root.link[dir.index()] = child;
    let (root, done) = shrunk(root, dir, done);
    (Some(root), done, removed)
}

/// Inserts `data` into the tree rooted at `tree` and stores the new root back
/// into `tree`.
///
/// Insertion never fails.  A key equal to one already present is stored as a
/// separate node; lookups and removals find the occurrences one at a time.
///
/// # Examples
/// ```
/// use strict_avl::{insert, Link};
///
/// let mut tree: Link<i32> = None;
/// for k in [4, 2, 7] {
///     insert(&mut tree, k);
/// }
/// let root = tree.as_deref().unwrap();
/// assert_eq!(*root.data(), 4);
/// assert_eq!(root.balance(), 0);
/// ```
pub fn insert<K: Key>(tree: &mut Link<K>, data: K) {
    let (root, _) = insert_r(tree.take(), data);
    *tree = Some(root);
}

/// Removes one key equal to `data` from the tree rooted at `tree`, stores the
/// new root back into `tree`, and returns the removed key.
///
/// Removing a key that is not present leaves the tree untouched.
///
/// # Examples
/// ```
/// use strict_avl::{insert, remove, Link};
///
/// let mut tree: Link<i32> = None;
/// insert(&mut tree, 1);
/// assert_eq!(remove(&mut tree, &2), None);
/// assert_eq!(remove(&mut tree, &1), Some(1));
/// assert!(tree.is_none());
/// ```
pub fn remove<K: Key>(tree: &mut Link<K>, data: &K) -> Option<K> {
    let (root, _, removed) = remove_r(tree.take(), data);
    *tree = root;
    removed
}

/// Finds a stored key equal to `data`.
pub fn find<'a, K: Key>(tree: &'a Link<K>, data: &K) -> Option<&'a K> {
    let mut curr = tree.as_deref();
    while let Some(n) = curr {
        if n.data.equals(data) {
            return Some(&n.data);
        }

        let go_right = n.data.less(data);
        debug_assert!(
            go_right || data.less(&n.data),
            "Key::equals is inconsistent with Key::less"
        );
        curr = n.link(Dir::toward(go_right));
    }

    None
}

fn count<K: Key>(link: &Link<K>, data: &K) -> usize {
    match link.as_deref() {
        None => 0,
        Some(n) if n.data.less(data) => count(&n.link[1], data),
        Some(n) if data.less(&n.data) => count(&n.link[0], data),
        // rotations may leave equal keys on both sides
        Some(n) => 1 + count(&n.link[0], data) + count(&n.link[1], data),
    }
}

fn extreme<K>(link: &Link<K>, dir: Dir) -> Option<&K> {
    let mut n = link.as_deref()?;
    while let Some(m) = n.link(dir) {
        n = m;
    }
    Some(&n.data)
}

/// An ordered collection of keys kept in a strict AVL tree.
///
/// `AvlTree` owns the root of the tree and its length, and drives the
/// [`insert`] and [`remove`] algorithms on it.  Keys only need to implement
/// [`Key`].  Equal keys may be stored more than once; the tree then behaves
/// as a multiset.
///
/// The tree is single-owner and has no interior mutability.  Sharing it
/// between threads requires the usual external synchronization.
#[derive(Clone)]
pub struct AvlTree<K> {
    len: usize,
    root: Link<K>,
}

impl<K: Debug> Debug for AvlTree<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("AvlTree(EMPTY)"),
            // use Node's Debug formatter
            Some(n) => f.write_fmt(format_args!("AvlTree(#{}, {:?})", self.len, n)),
        }
    }
}

impl<K: Key> PartialEq for AvlTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(x, y)| x.equals(y))
    }
}

impl<K: Key> Eq for AvlTree<K> {}

impl<K> AvlTree<K> {
    /// Creates a new, empty tree.
    /// # Examples
    /// ```
    /// use strict_avl::AvlTree;
    /// let t: AvlTree<u32> = AvlTree::new();
    /// assert!(t.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree { len: 0, root: None }
    }

    /// Drops all keys from the tree.
    pub fn clear(&mut self) {
        self.len = 0;
        self.root = None;
    }

    /// Returns the number of stored keys, counting repeats.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Tests if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of levels in the tree.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Returns the root node for read-only inspection of the tree's shape.
    ///
    /// # Examples
    /// ```
    /// use strict_avl::AvlTree;
    ///
    /// let t = AvlTree::from([1, 2, 3]);
    /// let root = t.root().unwrap();
    /// assert_eq!(*root.data(), 2);
    /// assert_eq!(root.left().map(|n| *n.data()), Some(1));
    /// ```
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns the least key.
    pub fn first(&self) -> Option<&K> {
        extreme(&self.root, Dir::Left)
    }

    /// Returns the greatest key.
    pub fn last(&self) -> Option<&K> {
        extreme(&self.root, Dir::Right)
    }

    /// Creates an iterator over the keys in order.
    ///
    /// # Examples
    /// ```
    /// use strict_avl::AvlTree;
    ///
    /// let t = AvlTree::from([3, 1, 2, 1]);
    /// assert!(t.iter().copied().eq([1, 1, 2, 3]));
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    /// Applies f to each key in order.
    ///
    /// This visits the keys recursively instead of keeping an explicit stack,
    /// and is a little cheaper than [`iter`](#method.iter).
    pub fn for_each<F: FnMut(&K)>(&self, f: F) {
        node::for_each(&self.root, f);
    }
}

impl<K: Key> AvlTree<K> {
    /// Inserts a key into the tree.  Keys equal to ones already present are
    /// kept as additional occurrences.
    ///
    /// # Examples
    /// ```
    /// use strict_avl::AvlTree;
    ///
    /// let mut t = AvlTree::new();
    /// t.insert("b");
    /// t.insert("a");
    /// t.insert("b");
    /// assert_eq!(t.len(), 3);
    /// assert_eq!(t.count(&"b"), 2);
    /// ```
    pub fn insert(&mut self, key: K) {
        insert(&mut self.root, key);
        self.len += 1;
        let _ = chk_tree!(&*self);
    }

    /// Removes one occurrence of a key and returns it.
    ///
    /// # Examples
    /// ```
    /// use strict_avl::AvlTree;
    ///
    /// let mut t = AvlTree::from([1, 2]);
    /// assert_eq!(t.remove(&2), Some(2));
    /// assert_eq!(t.remove(&2), None);
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let removed = remove(&mut self.root, key);
        if removed.is_some() {
            trace!("removed one key, {} left", self.len - 1);
            self.len -= 1;
        }
        let _ = chk_tree!(&*self);
        removed
    }

    /// Returns a reference to a stored key equal to the given one.
    pub fn get(&self, key: &K) -> Option<&K> {
        find(&self.root, key)
    }

    /// Tests if the tree holds a key equal to the given one.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns how many stored keys are equal to the given one.
    pub fn count(&self, key: &K) -> usize {
        count(&self.root, key)
    }

    /// Verifies the ordering and balance invariants and the recorded length.
    ///
    /// A tree built only through this crate's operations always passes; a
    /// failure means a [`Key`] implementation is not a strict total order.
    ///
    /// # Examples
    /// ```
    /// use strict_avl::AvlTree;
    ///
    /// let t: AvlTree<_> = (0..100).collect();
    /// assert!(t.check().is_ok());
    /// ```
    pub fn check(&self) -> Result<(), InvariantError> {
        let actual = check_tree(&self.root)?;
        if actual != self.len {
            return Err(InvariantError::LenMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> Extend<K> for AvlTree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<K: Key, const N: usize> From<[K; N]> for AvlTree<K> {
    fn from(vs: [K; N]) -> Self {
        AvlTree::from_iter(vs)
    }
}

impl<K: Key> FromIterator<K> for AvlTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut t = AvlTree::new();
        t.extend(iter);
        t
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
