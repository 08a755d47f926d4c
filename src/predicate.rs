//! Ready-made predicates for [`filter`](crate::filter).

/// Returns `true` for even integers.
///
/// # Examples
///
/// ```rust
/// use eqset::{EqSet, predicate::is_even};
///
/// let numbers: EqSet<i32> = (1..=6).collect();
/// assert_eq!(numbers.filter(is_even).as_slice(), &[2, 4, 6]);
/// ```
pub const fn is_even(number: &i32) -> bool {
    *number % 2 == 0
}

/// Returns `true` for strings longer than three bytes.
pub fn is_long_string<S: AsRef<str>>(text: &S) -> bool {
    text.as_ref().len() > 3
}
