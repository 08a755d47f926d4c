//! Equality comparators.
//!
//! An [`EqSet`](crate::EqSet) never asks its elements whether they are equal.
//! Membership is decided by a separate comparator value implementing
//! [`Equivalence`], so the same element type can be stored under different
//! notions of sameness.
//!
//! # Examples
//!
//! ```rust
//! use eqset::{EqSet, Equivalence};
//!
//! #[derive(Default)]
//! struct CaseInsensitive;
//!
//! impl Equivalence<String> for CaseInsensitive {
//!     fn equivalent(&self, left: &String, right: &String) -> bool {
//!         left.eq_ignore_ascii_case(right)
//!     }
//! }
//!
//! let mut words: EqSet<String, CaseInsensitive> = EqSet::new();
//! words.add("Hello".to_string());
//! words.add("HELLO".to_string());
//! assert_eq!(words.len(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A binary equality relation over `T`.
///
/// Implementations must be pure: the answer may depend only on the two
/// arguments, and it must be reflexive and symmetric for the values a set
/// actually stores. A set relies on this to keep its elements pairwise
/// distinct.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `left` and `right` denote the same set member.
    fn equivalent(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, E: Equivalence<T> + ?Sized> Equivalence<T> for &E {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (**self).equivalent(left, right)
    }
}

/// Comparator that delegates to the element's own [`PartialEq`].
///
/// This is the default comparator of [`EqSet`](crate::EqSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdEquality;

impl<T: PartialEq + ?Sized> Equivalence<T> for StdEquality {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Comparator wrapping a closure.
///
/// Useful when the relation is only needed locally and naming a type for it
/// would be noise. Sets using it are built with
/// [`EqSet::with_equivalence`](crate::EqSet::with_equivalence) since closures
/// have no [`Default`].
///
/// # Examples
///
/// ```rust
/// use eqset::{EqSet, FnEquality};
///
/// let same_parity = FnEquality::new(|left: &i32, right: &i32| left % 2 == right % 2);
/// let mut parities = EqSet::with_equivalence(same_parity);
/// parities.add(1);
/// parities.add(3);
/// parities.add(4);
/// assert_eq!(parities.len(), 2);
/// ```
pub struct FnEquality<F, T: ?Sized> {
    function: F,
    marker: PhantomData<fn(&T, &T) -> bool>,
}

impl<F, T: ?Sized> FnEquality<F, T>
where
    F: Fn(&T, &T) -> bool,
{
    /// Wraps `function` as a comparator.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            marker: PhantomData,
        }
    }
}

impl<F, T: ?Sized> Equivalence<T> for FnEquality<F, T>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.function)(left, right)
    }
}

impl<F: Clone, T: ?Sized> Clone for FnEquality<F, T> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            marker: PhantomData,
        }
    }
}

impl<F, T: ?Sized> fmt::Debug for FnEquality<F, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FnEquality").finish_non_exhaustive()
    }
}
