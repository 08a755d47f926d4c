//! Set algorithms built on the public contract of [`EqSet`].
//!
//! Nothing in here touches the storage directly: every result is produced
//! by copying, iterating, testing membership and adding, so each function
//! inherits the container's uniqueness and ordering guarantees.
//!
//! The comparator of a result is cloned from the left operand.
//!
//! # Examples
//!
//! ```rust
//! use eqset::EqSet;
//!
//! let left: EqSet<i32> = [1, 2, 3].into_iter().collect();
//! let right: EqSet<i32> = [2, 3, 4].into_iter().collect();
//!
//! assert_eq!((&left | &right).as_slice(), &[1, 2, 3, 4]);
//! assert_eq!((&left & &right).as_slice(), &[2, 3]);
//! assert_eq!(eqset::filter(&left, |n| n % 2 == 1).as_slice(), &[1, 3]);
//! ```

use std::ops::{BitAnd, BitOr};

use crate::equality::Equivalence;
use crate::error::EqSetError;
use crate::set::EqSet;

/// Returns every element present in `left` or `right`.
///
/// The result starts as a copy of `left`; elements of `right` follow in
/// their own order, skipping any already present.
pub fn union<T, E>(left: &EqSet<T, E>, right: &EqSet<T, E>) -> EqSet<T, E>
where
    T: Clone,
    E: Equivalence<T> + Clone,
{
    let mut result = left.clone();
    result.extend(right.iter().cloned());
    result
}

/// Fallible form of [`union`].
///
/// # Errors
///
/// Returns [`EqSetError::Allocation`] if the result's storage could not grow.
pub fn try_union<T, E>(left: &EqSet<T, E>, right: &EqSet<T, E>) -> Result<EqSet<T, E>, EqSetError>
where
    T: Clone,
    E: Equivalence<T> + Clone,
{
    let mut result = left.try_clone()?;
    for element in right {
        result.try_add(element.clone())?;
    }
    Ok(result)
}

/// Returns the elements of `left` that `right` also contains.
///
/// Elements found only in `right` never appear in the result, and the
/// result keeps `left`'s order.
pub fn intersection<T, E>(left: &EqSet<T, E>, right: &EqSet<T, E>) -> EqSet<T, E>
where
    T: Clone,
    E: Equivalence<T> + Clone,
{
    let mut result = EqSet::with_equivalence(left.equivalence().clone());
    result.extend(
        left.iter()
            .filter(|element| right.contains(*element))
            .cloned(),
    );
    result
}

/// Fallible form of [`intersection`].
///
/// # Errors
///
/// Returns [`EqSetError::Allocation`] if the result's storage could not grow.
pub fn try_intersection<T, E>(
    left: &EqSet<T, E>,
    right: &EqSet<T, E>,
) -> Result<EqSet<T, E>, EqSetError>
where
    T: Clone,
    E: Equivalence<T> + Clone,
{
    let mut result = EqSet::with_equivalence(left.equivalence().clone());
    for element in left.iter().filter(|element| right.contains(*element)) {
        result.try_add(element.clone())?;
    }
    Ok(result)
}

/// Returns the elements of `source` for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use eqset::EqSet;
///
/// let words: EqSet<String> = ["no", "yes", "maybe", "ok"]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// let long = eqset::filter(&words, |word| word.len() > 3);
/// assert_eq!(long.as_slice(), &["maybe".to_string()]);
/// ```
pub fn filter<T, E, P>(source: &EqSet<T, E>, mut predicate: P) -> EqSet<T, E>
where
    T: Clone,
    E: Equivalence<T> + Clone,
    P: FnMut(&T) -> bool,
{
    let mut result = EqSet::with_equivalence(source.equivalence().clone());
    result.extend(source.iter().filter(|element| predicate(*element)).cloned());
    result
}

/// Fallible form of [`filter`].
///
/// # Errors
///
/// Returns [`EqSetError::Allocation`] if the result's storage could not grow.
pub fn try_filter<T, E, P>(source: &EqSet<T, E>, mut predicate: P) -> Result<EqSet<T, E>, EqSetError>
where
    T: Clone,
    E: Equivalence<T> + Clone,
    P: FnMut(&T) -> bool,
{
    let mut result = EqSet::with_equivalence(source.equivalence().clone());
    for element in source.iter().filter(|element| predicate(*element)) {
        result.try_add(element.clone())?;
    }
    Ok(result)
}

impl<T, E> EqSet<T, E>
where
    T: Clone,
    E: Equivalence<T> + Clone,
{
    /// Method form of [`union`].
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        union(self, other)
    }

    /// Method form of [`intersection`].
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        intersection(self, other)
    }

    /// Method form of [`filter`].
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        filter(self, predicate)
    }
}

impl<T, E> BitOr for &EqSet<T, E>
where
    T: Clone,
    E: Equivalence<T> + Clone,
{
    type Output = EqSet<T, E>;

    fn bitor(self, right: Self) -> Self::Output {
        union(self, right)
    }
}

impl<T, E> BitAnd for &EqSet<T, E>
where
    T: Clone,
    E: Equivalence<T> + Clone,
{
    type Output = EqSet<T, E>;

    fn bitand(self, right: Self) -> Self::Output {
        intersection(self, right)
    }
}
