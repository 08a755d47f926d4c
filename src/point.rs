//! A coordinate-pair element type.
//!
//! [`Point`] has no intrinsic equality on purpose: sets of points compare
//! them through [`PointEquality`], and persist them through the `(x,y)`
//! text form implemented by [`Display`](fmt::Display) and [`FromStr`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::equality::Equivalence;

/// A point on the integer grid.
///
/// # Examples
///
/// ```rust
/// use eqset::Point;
///
/// let point: Point = "(3,-4)".parse().unwrap();
/// assert_eq!(point.x, 3);
/// assert_eq!(point.to_string(), "(3,-4)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Component-wise comparator for [`Point`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PointEquality;

impl Equivalence<Point> for PointEquality {
    #[inline]
    fn equivalent(&self, left: &Point, right: &Point) -> bool {
        left.x == right.x && left.y == right.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({},{})", self.x, self.y)
    }
}

/// Error returned when text is not a valid `(x,y)` point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointParseError {
    /// The text is not a parenthesised, comma-separated pair.
    #[error("expected a point of the form `(x,y)`, found {0:?}")]
    Shape(String),
    /// One of the coordinates is not an `i32`.
    #[error("invalid {axis} coordinate {text:?}: {source}")]
    Coordinate {
        /// `'x'` or `'y'`.
        axis: char,
        /// The offending coordinate text.
        text: String,
        /// The integer parser's report.
        #[source]
        source: ParseIntError,
    },
}

fn parse_coordinate(axis: char, text: &str) -> Result<i32, PointParseError> {
    let text = text.trim();
    text.parse().map_err(|source| PointParseError::Coordinate {
        axis,
        text: text.to_string(),
        source,
    })
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parses `(x,y)`. Whitespace around the coordinates and the whole
    /// pair is ignored; the parentheses and the comma are required.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let shape_error = || PointParseError::Shape(text.to_string());
        let inner = text
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(shape_error)?;
        let (x, y) = inner.split_once(',').ok_or_else(shape_error)?;
        Ok(Self::new(parse_coordinate('x', x)?, parse_coordinate('y', y)?))
    }
}
