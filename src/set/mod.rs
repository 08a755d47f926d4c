//! The [`EqSet`] container.
//!
//! `EqSet` stores its elements in a boxed slice whose length is always the
//! number of elements. Every successful `add` or `remove` produces a buffer
//! of exactly the new length and commits it in a single assignment, so there
//! is never spare capacity and never a half-updated set.
//!
//! # Time Complexity
//!
//! | Operation   | Cost                          |
//! |-------------|-------------------------------|
//! | `len`       | O(1)                          |
//! | `contains`  | O(n) comparator calls         |
//! | `add`       | O(n) comparisons + O(n) moves |
//! | `remove`    | O(n) comparisons + O(n) moves |
//! | `clone`     | O(n) element clones           |
//! | `==`        | O(n * m) comparator calls     |
//!
//! # Examples
//!
//! ```rust
//! use eqset::EqSet;
//!
//! let mut numbers: EqSet<i32> = EqSet::new();
//! numbers.add(5);
//! numbers.add(10);
//! numbers.add(5);
//! numbers.add(-5);
//!
//! assert_eq!(numbers.len(), 3);
//! assert!(numbers.contains(&-5));
//!
//! numbers.remove(&5);
//! assert_eq!(numbers.as_slice(), &[10, -5]);
//! ```

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;

use std::fmt;
use std::mem;
use std::ops::Index;

use crate::equality::{Equivalence, StdEquality};
use crate::error::EqSetError;

/// An unordered, duplicate-free collection whose notion of "duplicate" is
/// supplied by the comparator `E`.
///
/// Elements keep the order in which they were first added. That order has
/// no meaning for set semantics but is stable, so iteration, indexing and
/// the text format are deterministic.
///
/// # Type Parameters
///
/// * `T` - The element type. No bounds are needed to store it.
/// * `E` - The comparator, an [`Equivalence<T>`]. Defaults to
///   [`StdEquality`], which uses `T`'s `PartialEq`.
///
/// # Examples
///
/// ```rust
/// use eqset::{EqSet, Point, PointEquality};
///
/// let mut points: EqSet<Point, PointEquality> = EqSet::new();
/// points.add(Point::new(0, 0));
/// points.add(Point::new(1, 2));
/// points.add(Point::new(0, 0));
///
/// assert_eq!(points.len(), 2);
/// assert!(points.contains(&Point::new(1, 2)));
/// ```
pub struct EqSet<T, E = StdEquality> {
    elements: Box<[T]>,
    equivalence: E,
}

impl<T, E: Default> EqSet<T, E> {
    /// Creates an empty set using the comparator's default value.
    ///
    /// No storage is allocated until the first element is added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::EqSet;
    ///
    /// let empty: EqSet<i32> = EqSet::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_equivalence(E::default())
    }
}

impl<T, E> EqSet<T, E> {
    /// Creates an empty set that compares elements with `equivalence`.
    #[inline]
    #[must_use]
    pub fn with_equivalence(equivalence: E) -> Self {
        Self {
            elements: Box::default(),
            equivalence,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the comparator used for membership tests.
    #[inline]
    pub const fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Returns the elements as a slice, in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    ///
    /// Use the `[]` operator when an out-of-range index is a bug.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns an iterator over the elements in storage order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::EqSet;
    ///
    /// let numbers: EqSet<i32> = [3, 1, 3, 2].into_iter().collect();
    /// let seen: Vec<&i32> = numbers.iter().collect();
    /// assert_eq!(seen, vec![&3, &1, &2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements)
    }

    /// Removes every element and releases the storage.
    pub fn clear(&mut self) {
        self.elements = Box::default();
    }

    fn commit(&mut self, previous_len: usize, buffer: Vec<T>) {
        tracing::trace!(from = previous_len, to = buffer.len(), "rebuilt set storage");
        self.elements = buffer.into_boxed_slice();
    }

    /// Moves every element except the one at `index` into `buffer`, commits
    /// `buffer` as the new storage and returns the excluded element.
    fn commit_without(&mut self, index: usize, mut buffer: Vec<T>) -> Option<T> {
        let previous = mem::take(&mut self.elements).into_vec();
        let previous_len = previous.len();
        let mut drain = previous.into_iter();
        buffer.extend(drain.by_ref().take(index));
        let removed = drain.next();
        buffer.extend(drain);
        self.commit(previous_len, buffer);
        removed
    }
}

impl<T, E: Equivalence<T>> EqSet<T, E> {
    /// Builds a set from `iterable` with an explicit comparator, keeping the
    /// first of any group of equivalent values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::{EqSet, FnEquality};
    ///
    /// let by_length = FnEquality::new(|left: &&str, right: &&str| left.len() == right.len());
    /// let words = EqSet::from_iter_with(["one", "two", "three"], by_length);
    /// assert_eq!(words.as_slice(), &["one", "three"]);
    /// ```
    pub fn from_iter_with<I>(iterable: I, equivalence: E) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_equivalence(equivalence);
        set.extend(iterable);
        set
    }

    /// Builds a set from `iterable`, stopping at the first allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`EqSetError::Allocation`] if the storage could not grow.
    pub fn try_from_iter<I>(iterable: I) -> Result<Self, EqSetError>
    where
        I: IntoIterator<Item = T>,
        E: Default,
    {
        let mut set = Self::new();
        for element in iterable {
            set.try_add(element)?;
        }
        Ok(set)
    }

    fn position(&self, element: &T) -> Option<usize> {
        self.elements
            .iter()
            .position(|stored| self.equivalence.equivalent(stored, element))
    }

    /// Returns `true` if some stored element is equivalent to `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::EqSet;
    ///
    /// let words: EqSet<String> = ["Hello".to_string()].into_iter().collect();
    /// assert!(words.contains(&"Hello".to_string()));
    /// assert!(!words.contains(&"World".to_string()));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.position(element).is_some()
    }

    /// Adds `element` unless an equivalent element is already present.
    ///
    /// Returns `true` if the set grew. The new element goes after all
    /// existing ones. Allocation failure aborts, as it does for the standard
    /// collections; use [`try_add`](Self::try_add) to observe it instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::EqSet;
    ///
    /// let mut numbers: EqSet<i32> = EqSet::new();
    /// assert!(numbers.add(5));
    /// assert!(!numbers.add(5));
    /// assert_eq!(numbers.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        let mut buffer = mem::take(&mut self.elements).into_vec();
        let previous_len = buffer.len();
        buffer.reserve_exact(1);
        buffer.push(element);
        self.commit(previous_len, buffer);
        true
    }

    /// Fallible form of [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns [`EqSetError::Allocation`] if the grown storage could not be
    /// allocated. The set is unchanged in that case and `element` is dropped.
    pub fn try_add(&mut self, element: T) -> Result<bool, EqSetError> {
        if self.contains(&element) {
            return Ok(false);
        }
        let mut buffer = mem::take(&mut self.elements).into_vec();
        let previous_len = buffer.len();
        if let Err(source) = buffer.try_reserve_exact(1) {
            self.elements = buffer.into_boxed_slice();
            return Err(EqSetError::allocation(previous_len + 1, source));
        }
        buffer.push(element);
        self.commit(previous_len, buffer);
        Ok(true)
    }

    /// Removes the element equivalent to `element`, if any.
    ///
    /// Returns `true` if the set shrank. Removing the last element releases
    /// the storage entirely. Removing an absent element does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::EqSet;
    ///
    /// let mut numbers: EqSet<i32> = [10, 20, 30].into_iter().collect();
    /// assert!(numbers.remove(&20));
    /// assert!(!numbers.remove(&999));
    /// assert_eq!(numbers.as_slice(), &[10, 30]);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        self.take(element).is_some()
    }

    /// Fallible form of [`remove`](Self::remove).
    ///
    /// # Errors
    ///
    /// Returns [`EqSetError::Allocation`] if the shrunk storage could not be
    /// allocated. The set is unchanged in that case.
    pub fn try_remove(&mut self, element: &T) -> Result<bool, EqSetError> {
        self.try_take(element).map(|removed| removed.is_some())
    }

    /// Removes and returns the stored element equivalent to `element`.
    ///
    /// The returned value is the one that was stored, which may differ from
    /// `element` under a comparator coarser than `PartialEq`.
    pub fn take(&mut self, element: &T) -> Option<T> {
        let index = self.position(element)?;
        let buffer = Vec::with_capacity(self.len() - 1);
        self.commit_without(index, buffer)
    }

    /// Fallible form of [`take`](Self::take).
    ///
    /// # Errors
    ///
    /// Returns [`EqSetError::Allocation`] if the shrunk storage could not be
    /// allocated. The set is unchanged in that case.
    pub fn try_take(&mut self, element: &T) -> Result<Option<T>, EqSetError> {
        let Some(index) = self.position(element) else {
            return Ok(None);
        };
        let remaining = self.len() - 1;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(remaining)
            .map_err(|source| EqSetError::allocation(remaining, source))?;
        Ok(self.commit_without(index, buffer))
    }
}

impl<T: Clone, E: Clone> EqSet<T, E> {
    /// Deep-copies the set, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`EqSetError::Allocation`] if the copy's storage could not be
    /// allocated.
    pub fn try_clone(&self) -> Result<Self, EqSetError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(self.len())
            .map_err(|source| EqSetError::allocation(self.len(), source))?;
        buffer.extend(self.elements.iter().cloned());
        Ok(Self {
            elements: buffer.into_boxed_slice(),
            equivalence: self.equivalence.clone(),
        })
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built completely before `self` is touched.
    ///
    /// # Errors
    ///
    /// Returns [`EqSetError::Allocation`] if the copy could not be built, in
    /// which case `self` is unchanged.
    pub fn try_assign_from(&mut self, source: &Self) -> Result<(), EqSetError> {
        *self = source.try_clone()?;
        Ok(())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, E: Default> Default for EqSet<T, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, E: Clone> Clone for EqSet<T, E> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            equivalence: self.equivalence.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Build first; a panicking element clone leaves `self` untouched.
        let replacement = source.clone();
        *self = replacement;
    }
}

impl<T, E: Equivalence<T>> PartialEq for EqSet<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T, E: Equivalence<T>> Eq for EqSet<T, E> {}

impl<T, E> Index<usize> for EqSet<T, E> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.len(),
            "index {index} out of range for set of {} elements",
            self.len()
        );
        &self.elements[index]
    }
}

impl<T, E: Equivalence<T>> Extend<T> for EqSet<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for element in iterable {
            self.add(element);
        }
    }
}

impl<T, E: Equivalence<T> + Default> FromIterator<T> for EqSet<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_iter_with(iterable, E::default())
    }
}

impl<T, E> IntoIterator for EqSet<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements)
    }
}

impl<'a, T, E> IntoIterator for &'a EqSet<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, E> fmt::Debug for EqSet<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, E> fmt::Display for EqSet<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, E> serde::Serialize for EqSet<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct EqSetVisitor<T, E> {
    marker: std::marker::PhantomData<(T, E)>,
}

#[cfg(feature = "serde")]
impl<T, E> EqSetVisitor<T, E> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, E> serde::de::Visitor<'de> for EqSetVisitor<T, E>
where
    T: serde::Deserialize<'de>,
    E: Equivalence<T> + Default,
{
    type Value = EqSet<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = EqSet::new();
        while let Some(element) = seq.next_element()? {
            set.try_add(element).map_err(serde::de::Error::custom)?;
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, E> serde::Deserialize<'de> for EqSet<T, E>
where
    T: serde::Deserialize<'de>,
    E: Equivalence<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(EqSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
