//! Error types for set mutation.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the fallible (`try_*`) operations of
/// [`EqSet`](crate::EqSet).
///
/// Whenever one of these is returned the set is exactly as it was before
/// the call.
///
/// # Examples
///
/// ```rust
/// use eqset::{EqSet, EqSetError};
///
/// let mut numbers: EqSet<i32> = EqSet::new();
/// let added: Result<bool, EqSetError> = numbers.try_add(7);
/// assert_eq!(added.ok(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EqSetError {
    /// The storage for the rebuilt element buffer could not be allocated.
    #[error("cannot allocate storage for {requested} elements: {source}")]
    Allocation {
        /// Number of elements the new buffer had to hold.
        requested: usize,
        /// The allocator's report.
        #[source]
        source: TryReserveError,
    },
}

impl EqSetError {
    pub(crate) const fn allocation(requested: usize, source: TryReserveError) -> Self {
        Self::Allocation { requested, source }
    }
}
