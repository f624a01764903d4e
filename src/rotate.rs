//! Rotations and the balance-factor bookkeeping that accompanies them.
//!
//! The primitives here know nothing about insertion or removal.  They take a
//! subtree by value and hand back its new root, so the caller must store the
//! result in the slot the subtree came from.

use crate::node::{Dir, Node};
use log::trace;

// Prerequisite: the child in direction `dir` exists.
fn take_child<K>(root: &mut Node<K>, dir: Dir) -> Box<Node<K>> {
    match root.link[dir.index()].take() {
        Some(n) => n,
        None => panic!("rotation requires a {:?} child", dir),
    }
}

/// Rotates the subtree in direction `dir` and returns its new root.
///
/// We want the following transformation for `dir == Right`:
///    a(b(x, y), z)   =>   b(x, a(y, z))
/// and its mirror image for `dir == Left`.  Balances are left untouched.
pub fn single<K>(mut root: Box<Node<K>>, dir: Dir) -> Box<Node<K>> {
    trace!("single rotation {:?}", dir);

    let mut save = take_child(&mut root, dir.opp());
    root.link[dir.opp().index()] = save.link[dir.index()].take();
    save.link[dir.index()] = Some(root);
    save
}

/// Promotes the grandchild on the inside of the heavy side, e.g. for
/// `dir == Right`:
///    a(b(x, c(y, z)), w)   =>   c(b(x, y), a(z, w))
///
/// Balances are left untouched; call [`adjust_balance`] first.
pub fn double<K>(mut root: Box<Node<K>>, dir: Dir) -> Box<Node<K>> {
    trace!("double rotation {:?}", dir);

    let child = take_child(&mut root, dir.opp());
    root.link[dir.opp().index()] = Some(single(child, dir.opp()));
    single(root, dir)
}

/// Sets the final balances of `root`, its child in direction `dir`, and that
/// child's inner grandchild ahead of a [`double`] rotation.
///
/// `bal` is the lean of the heavy side.  The outcome depends only on the
/// grandchild's balance before the rotation, so this must run before
/// `double` moves the grandchild.
pub fn adjust_balance<K>(root: &mut Node<K>, dir: Dir, bal: i8) {
    trace!("adjust balance {:?} {}", dir, bal);

    let n = match root.link[dir.index()].as_deref_mut() {
        Some(n) => n,
        None => panic!("double rotation requires a {:?} child", dir),
    };
    let nn = match n.link[dir.opp().index()].as_deref_mut() {
        Some(nn) => nn,
        None => panic!("double rotation requires an inner grandchild"),
    };

    let (root_bal, n_bal) = match nn.balance {
        0 => (0, 0),
        b if b == bal => (-bal, 0),
        _ => (0, bal),
    };

    nn.balance = 0;
    n.balance = n_bal;
    root.balance = root_bal;
}

/// Repairs a node whose balance reached `±2` because its `dir` side grew.
/// The returned subtree has the height it had before the insertion.
pub fn insert_balance<K>(mut root: Box<Node<K>>, dir: Dir) -> Box<Node<K>> {
    let bal = dir.sign();
    let n_bal = match root.link[dir.index()].as_deref() {
        Some(n) => n.balance,
        None => panic!("{:?} side grew but is empty", dir),
    };

    if n_bal == bal {
        trace!("insert rebalance {:?}: straight line", dir);
        root.balance = 0;
        if let Some(n) = root.link[dir.index()].as_deref_mut() {
            n.balance = 0;
        }
        single(root, dir.opp())
    } else {
        trace!("insert rebalance {:?}: zig-zag", dir);
        adjust_balance(&mut root, dir, bal);
        double(root, dir.opp())
    }
}

/// Repairs a node whose balance reached `±2` because its `dir` side shrank.
///
/// Returns the new subtree root and whether the ancestors are done: that is
/// the case only when the sibling was balanced, since the rotation then
/// keeps the subtree's height.
pub fn remove_balance<K>(mut root: Box<Node<K>>, dir: Dir) -> (Box<Node<K>>, bool) {
    let bal = dir.sign();
    let sibling = match root.link[dir.opp().index()].as_deref_mut() {
        Some(n) => n,
        None => panic!("{:?} side is too short but its sibling is empty", dir),
    };

    match sibling.balance {
        b if b == -bal => {
            trace!("remove rebalance {:?}: straight line", dir);
            sibling.balance = 0;
            root.balance = 0;
            (single(root, dir), false)
        }

        b if b == bal => {
            trace!("remove rebalance {:?}: zig-zag", dir);
            adjust_balance(&mut root, dir.opp(), -bal);
            (double(root, dir), false)
        }

        _ => {
            trace!("remove rebalance {:?}: balanced sibling", dir);
            sibling.balance = bal;
            root.balance = -bal;
            (single(root, dir), true)
        }
    }
}
