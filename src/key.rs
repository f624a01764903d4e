//! The ordering capability every stored value must provide.

use std::cmp::Ordering;

/// A value that can be stored in an AVL tree.
///
/// The tree only ever compares keys through these two methods; it never uses
/// identity.  Implementations must describe a strict total order: `less` is
/// irreflexive and transitive, and `a.equals(b)` holds exactly when neither
/// `a.less(b)` nor `b.less(a)`.  A key type that breaks this contract does not
/// cause undefined behavior, but the tree's ordering will silently be wrong.
///
/// # Examples
/// ```
/// use strict_avl::Key;
///
/// struct Version(u32, u32);
///
/// impl Key for Version {
///     fn less(&self, other: &Self) -> bool {
///         (self.0, self.1) < (other.0, other.1)
///     }
///
///     fn equals(&self, other: &Self) -> bool {
///         (self.0, self.1) == (other.0, other.1)
///     }
/// }
///
/// assert!(Version(1, 2).less(&Version(1, 10)));
/// ```
pub trait Key {
    /// Returns true if `self` orders strictly before `other`.
    fn less(&self, other: &Self) -> bool;

    /// Returns true if `self` and `other` occupy the same position in the
    /// order.
    fn equals(&self, other: &Self) -> bool;
}

/// Adapts any [`Ord`] type to [`Key`].
///
/// # Examples
/// ```
/// use strict_avl::{AvlTree, ByOrd};
///
/// let mut t = AvlTree::new();
/// t.insert(ByOrd((1, 'b')));
/// t.insert(ByOrd((1, 'a')));
/// assert_eq!(t.first(), Some(&ByOrd((1, 'a'))));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ByOrd<T>(pub T);

impl<T: Ord> Key for ByOrd<T> {
    fn less(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    fn equals(&self, other: &Self) -> bool {
        self.0.cmp(&other.0) == Ordering::Equal
    }
}

impl<T: Key + ?Sized> Key for Box<T> {
    fn less(&self, other: &Self) -> bool {
        (**self).less(other)
    }

    fn equals(&self, other: &Self) -> bool {
        (**self).equals(other)
    }
}

impl<T: Key + ?Sized> Key for &T {
    fn less(&self, other: &Self) -> bool {
        (**self).less(*other)
    }

    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

macro_rules! key_via_partial_ord {
    ( $( $t:ty ),* ) => {
        $(
            impl Key for $t {
                #[inline]
                fn less(&self, other: &Self) -> bool {
                    self < other
                }

                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

key_via_partial_ord!(i8, i16, i32, i64, i128, isize);
key_via_partial_ord!(u8, u16, u32, u64, u128, usize);
key_via_partial_ord!(char, bool, str, String);

// NaN is not ordered against anything, so a tree holding NaN breaks the Key
// contract.
key_via_partial_ord!(f32, f64);
