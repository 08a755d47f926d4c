//! # eqset
//!
//! An unordered, duplicate-free collection whose notion of "duplicate" comes
//! from a comparator supplied at the type level instead of from hashing or
//! ordering.
//!
//! ## Overview
//!
//! - **[`EqSet`]**: the container. Storage is an exact-length buffer that is
//!   rebuilt on every insertion and removal, so a set never holds more memory
//!   than its elements need.
//! - **[`Equivalence`]**: the comparator trait, with [`StdEquality`]
//!   (delegating to `PartialEq`) and [`FnEquality`] (wrapping a closure).
//! - **Set algorithms**: [`union`], [`intersection`] and [`filter`], built
//!   only on the public `add`/`contains`/iteration contract.
//! - **Persistence**: a line-oriented text format in [`persistence`].
//! - **[`Point`]**: a coordinate-pair element type with its own comparator.
//!
//! ## Feature Flags
//!
//! - `persistence` (default): text-file save and load
//! - `serde`: `Serialize`/`Deserialize` for [`EqSet`] and [`Point`]
//! - `cli`: the `eqset-scenarios` driver binary
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use eqset::prelude::*;
//!
//! let mut points: EqSet<Point, PointEquality> = EqSet::new();
//! points.add(Point::new(0, 0));
//! points.add(Point::new(1, 2));
//! points.add(Point::new(0, 0));
//! assert_eq!(points.len(), 2);
//!
//! let near_origin = points.filter(|point| point.x.abs() + point.y.abs() < 2);
//! assert_eq!(near_origin.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use eqset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{filter, intersection, union};
    pub use crate::equality::{Equivalence, FnEquality, StdEquality};
    pub use crate::error::EqSetError;
    pub use crate::point::{Point, PointEquality};
    pub use crate::set::EqSet;

    #[cfg(feature = "persistence")]
    pub use crate::persistence::{deserialize, serialize};
}

mod algebra;
mod equality;
mod error;
mod point;
mod set;

pub mod predicate;

#[cfg(feature = "persistence")]
pub mod persistence;

pub use algebra::{filter, intersection, try_filter, try_intersection, try_union, union};
pub use equality::{Equivalence, FnEquality, StdEquality};
pub use error::EqSetError;
pub use point::{Point, PointEquality, PointParseError};
pub use set::{EqSet, IntoIter, Iter};
