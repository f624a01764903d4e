//! # An owned AVL tree
//!
//! `strict-avl` keeps keys in a height-balanced binary search tree.  Every
//! node records its balance factor, `height(right) - height(left)`, which is
//! always `-1`, `0` or `1` between operations.  Insertion and removal walk
//! down recursively and fix balances on the way back up, applying a single
//! or double rotation where a subtree leans by two.
//!
//! The crate is organized bottom-up:
//!   - [`Key`] is the only thing asked of stored values: a strict `less` and a
//!     consistent `equals`.
//!   - The rotation primitives turn a subtree around a direction and never
//!     look at keys.
//!   - [`insert`], [`remove`] and [`find`] operate on a caller-held
//!     [`Link`], the optional boxed root.  Rotations can change which node is
//!     at the top, so the functions write the new root back into the link.
//!
//! [`AvlTree`] wraps a root and its length behind a collection-style API.
//!
//! ```
//! use strict_avl::AvlTree;
//!
//! let mut t: AvlTree<_> = [4, 2, 7, 6, 6, 9].into_iter().collect();
//! assert_eq!(*t.root().unwrap().data(), 6);
//!
//! t.remove(&4);
//! t.remove(&6);
//! assert!(t.iter().copied().eq([2, 6, 7, 9]));
//! assert!(t.check().is_ok());
//! ```
#![warn(missing_docs)]

mod key;
pub use key::{ByOrd, Key};

mod node;
pub use node::{Dir, Link, Node};

mod rotate;

mod avl;
pub use avl::{check_tree, find, insert, remove, AvlTree, InvariantError, Iter};
