//! Ordering strategies for [`OrderedSequence`](crate::OrderedSequence).
//!
//! A sequence never inspects its elements directly. Every comparison goes
//! through a [`SortOrder`] strategy, which says how two elements compare and how
//! an element compares against a lookup key (the probe used by `get`, `slice`
//! markers, and `remove_by_key`).
//!
//! Three strategies are provided:
//!
//! | Strategy         | Element bound     | Lookup key       |
//! |------------------|-------------------|------------------|
//! | [`Natural`]      | `T: Ord`          | `T`              |
//! | [`ByKey`]        | `T: PrimaryKey`   | `T::Key`         |
//! | [`ByComparator`] | `T: Compare`      | `T`              |
//!
//! Strategies are zero-sized marker types; they are never instantiated by the
//! sequence.
//!
//! # Contract
//!
//! A strategy must describe a deterministic total order, and an element's
//! position in that order must not change while it is stored in a sequence.
//! Breaking this does not cause memory unsafety, but lookups may miss and
//! [`OrderedSequence::check`](crate::OrderedSequence::check) will report
//! [`CheckError::Unsorted`](crate::CheckError::Unsorted).
//!
//! # Examples
//!
//! ```rust
//! use sorted_bags::order::{ByKey, PrimaryKey};
//! use sorted_bags::OrderedSequence;
//!
//! #[derive(Debug, Clone)]
//! struct Account {
//!     id: u64,
//!     owner: String,
//! }
//!
//! impl PrimaryKey for Account {
//!     type Key = u64;
//!
//!     fn primary_key(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let mut accounts: OrderedSequence<Account, ByKey> = OrderedSequence::new();
//! accounts.insert(Account { id: 7, owner: "bob".to_string() });
//! accounts.insert(Account { id: 3, owner: "alice".to_string() });
//!
//! assert_eq!(accounts.get(&3).map(|account| account.owner.as_str()), Some("alice"));
//! assert_eq!(accounts.get_index(&7), Some(1));
//! ```

use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

/// How elements of type `T` are ordered and looked up.
pub trait SortOrder<T> {
    /// The probe type accepted by lookups, markers and key-based removal.
    type Key: ?Sized;

    /// Compares two stored elements.
    fn compare(left: &T, right: &T) -> Ordering;

    /// Compares a stored element against a lookup key.
    ///
    /// Must agree with [`compare`](Self::compare): if `compare(a, b)` is
    /// `Less`, then `compare_key(a, key_of_b)` is `Less` too.
    fn compare_key(element: &T, key: &Self::Key) -> Ordering;
}

// =============================================================================
// Natural
// =============================================================================

/// Orders elements by their own [`Ord`] implementation.
///
/// Lookups take a value of the element type itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord> SortOrder<T> for Natural {
    type Key = T;

    #[inline]
    fn compare(left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }

    #[inline]
    fn compare_key(element: &T, key: &T) -> Ordering {
        element.cmp(key)
    }
}

// =============================================================================
// ByKey
// =============================================================================

/// An element identified by a totally ordered primary key.
///
/// Two elements are considered equal exactly when their keys are equal,
/// whatever the rest of their fields hold.
pub trait PrimaryKey {
    /// The key type.
    type Key: Ord;

    /// Returns the element's primary key.
    ///
    /// Called on every comparison, so it should be cheap.
    fn primary_key(&self) -> Self::Key;
}

impl<T: PrimaryKey + ?Sized> PrimaryKey for &T {
    type Key = T::Key;

    #[inline]
    fn primary_key(&self) -> Self::Key {
        (**self).primary_key()
    }
}

impl<T: PrimaryKey + ?Sized> PrimaryKey for Box<T> {
    type Key = T::Key;

    #[inline]
    fn primary_key(&self) -> Self::Key {
        (**self).primary_key()
    }
}

impl<T: PrimaryKey + ?Sized> PrimaryKey for Rc<T> {
    type Key = T::Key;

    #[inline]
    fn primary_key(&self) -> Self::Key {
        (**self).primary_key()
    }
}

impl<T: PrimaryKey + ?Sized> PrimaryKey for Arc<T> {
    type Key = T::Key;

    #[inline]
    fn primary_key(&self) -> Self::Key {
        (**self).primary_key()
    }
}

/// Orders elements by their [`PrimaryKey`].
///
/// Lookups take a key rather than a whole element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByKey;

impl<T: PrimaryKey> SortOrder<T> for ByKey {
    type Key = T::Key;

    #[inline]
    fn compare(left: &T, right: &T) -> Ordering {
        left.primary_key().cmp(&right.primary_key())
    }

    #[inline]
    fn compare_key(element: &T, key: &T::Key) -> Ordering {
        element.primary_key().cmp(key)
    }
}

// =============================================================================
// ByComparator
// =============================================================================

/// An element that knows how to compare itself with another of its kind.
///
/// `Ordering::Equal` is treated as identity: a sequence considers two elements
/// comparing `Equal` to be the same entry.
pub trait Compare {
    /// Three-way comparison of `self` against `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

impl<T: Compare + ?Sized> Compare for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

impl<T: Compare + ?Sized> Compare for Box<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

impl<T: Compare + ?Sized> Compare for Rc<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

impl<T: Compare + ?Sized> Compare for Arc<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

/// Orders elements through their [`Compare`] implementation.
///
/// Lookups take a value of the element type itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByComparator;

impl<T: Compare> SortOrder<T> for ByComparator {
    type Key = T;

    #[inline]
    fn compare(left: &T, right: &T) -> Ordering {
        Compare::compare(left, right)
    }

    #[inline]
    fn compare_key(element: &T, key: &T) -> Ordering {
        Compare::compare(element, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Record {
        id: i64,
        label: &'static str,
    }

    impl PrimaryKey for Record {
        type Key = i64;

        fn primary_key(&self) -> i64 {
            self.id
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Reversed(i32);

    impl Compare for Reversed {
        fn compare(&self, other: &Self) -> Ordering {
            other.0.cmp(&self.0)
        }
    }

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_follows_ord(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(<Natural as SortOrder<i32>>::compare(&left, &right), expected);
        assert_eq!(<Natural as SortOrder<i32>>::compare_key(&left, &right), expected);
    }

    #[rstest]
    fn test_by_key_ignores_non_key_fields() {
        let left = Record { id: 4, label: "left" };
        let right = Record { id: 4, label: "right" };
        assert_ne!(left.label, right.label);
        assert_eq!(ByKey::compare(&left, &right), Ordering::Equal);
        assert_eq!(ByKey::compare_key(&left, &5), Ordering::Less);
        assert_eq!(ByKey::compare_key(&left, &3), Ordering::Greater);
    }

    #[rstest]
    fn test_by_key_through_smart_pointers() {
        let boxed = Box::new(Record { id: 1, label: "boxed" });
        let shared = Arc::new(Record { id: 2, label: "shared" });
        let local = Rc::new(Record { id: 3, label: "local" });
        assert_eq!(boxed.primary_key(), 1);
        assert_eq!(shared.primary_key(), 2);
        assert_eq!(local.primary_key(), 3);
        assert_eq!((&*boxed).primary_key(), 1);
    }

    #[rstest]
    fn test_by_comparator_uses_element_comparison() {
        assert_eq!(
            ByComparator::compare(&Reversed(1), &Reversed(2)),
            Ordering::Greater
        );
        assert_eq!(
            ByComparator::compare_key(&Reversed(2), &Reversed(2)),
            Ordering::Equal
        );
    }

    #[rstest]
    fn test_comparator_through_smart_pointers() {
        let left = Box::new(Reversed(1));
        let right = Box::new(Reversed(2));
        assert_eq!(left.compare(&right), Ordering::Greater);
        assert_eq!(
            Arc::new(Reversed(5)).compare(&Arc::new(Reversed(5))),
            Ordering::Equal
        );
    }
}
