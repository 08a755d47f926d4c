//! Line-oriented text persistence.
//!
//! The format is the element count on the first line followed by one
//! element per line, written with [`Display`] and read back with
//! [`FromStr`]:
//!
//! ```text
//! 3
//! (1,1)
//! (2,2)
//! (3,3)
//! ```
//!
//! Elements are inserted through [`EqSet::try_add`] on the way in, so a file
//! that lists equivalent elements more than once loads as a set with the
//! duplicates collapsed. Lines after the declared count are ignored.
//!
//! # Examples
//!
//! ```rust
//! use eqset::{EqSet, persistence};
//!
//! let numbers: EqSet<i32> = [4, 8, 15].into_iter().collect();
//!
//! let mut buffer = Vec::new();
//! persistence::write_to(&numbers, &mut buffer).unwrap();
//! assert_eq!(buffer, b"3\n4\n8\n15\n");
//!
//! let restored: EqSet<i32> = persistence::read_from(buffer.as_slice()).unwrap();
//! assert_eq!(restored, numbers);
//! ```

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::equality::Equivalence;
use crate::error::EqSetError;
use crate::set::EqSet;

/// How a file was being opened when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Opened for [`deserialize`].
    Read,
    /// Created or truncated for [`serialize`].
    Write,
}

impl Display for OpenMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => formatter.write_str("reading"),
            Self::Write => formatter.write_str("writing"),
        }
    }
}

/// Errors raised while saving or loading a set.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file could not be opened in the required mode.
    #[error("cannot open {} for {mode}", .path.display())]
    Open {
        /// The path that was being opened.
        path: PathBuf,
        /// Whether it was opened for reading or writing.
        mode: OpenMode,
        /// The operating system's report.
        #[source]
        source: io::Error,
    },
    /// Reading or writing failed after the file was opened.
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    /// The input was empty.
    #[error("missing element count")]
    MissingCount,
    /// The first line was not a non-negative integer.
    #[error("invalid element count {text:?}")]
    InvalidCount {
        /// The first line as read.
        text: String,
        /// The integer parser's report.
        #[source]
        source: ParseIntError,
    },
    /// The input ended before the declared number of elements.
    #[error("expected {expected} elements but the input ends after {found}")]
    Truncated {
        /// Count declared on the first line.
        expected: usize,
        /// Element lines actually present.
        found: usize,
    },
    /// An element line was rejected by the element type's parser.
    #[error("cannot parse element {index} from {text:?}")]
    Element {
        /// Zero-based position of the element in the file.
        index: usize,
        /// The line as read.
        text: String,
        /// The element parser's report.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// The set could not grow to hold a loaded element.
    #[error(transparent)]
    Storage(#[from] EqSetError),
}

/// Writes `set` to `writer` in the text format and flushes it.
///
/// # Errors
///
/// Returns [`PersistenceError::Io`] if writing fails.
pub fn write_to<T, E, W>(set: &EqSet<T, E>, mut writer: W) -> Result<(), PersistenceError>
where
    T: Display,
    W: Write,
{
    writeln!(writer, "{}", set.len())?;
    for element in set {
        writeln!(writer, "{element}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a set in the text format from `reader`.
///
/// Only the final `\n` of each element line is stripped, so element text
/// ending in `\r` survives. The count line may end in `\r\n`.
///
/// Input holding fewer elements than its count declares is rejected as
/// [`Truncated`] rather than loaded partially.
///
/// # Errors
///
/// Returns [`PersistenceError::MissingCount`], [`InvalidCount`],
/// [`Truncated`] or [`Element`] for malformed input,
/// [`PersistenceError::Io`] if reading fails, and
/// [`PersistenceError::Storage`] if the set could not grow.
///
/// [`InvalidCount`]: PersistenceError::InvalidCount
/// [`Truncated`]: PersistenceError::Truncated
/// [`Element`]: PersistenceError::Element
pub fn read_from<T, E, R>(mut reader: R) -> Result<EqSet<T, E>, PersistenceError>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
    E: Equivalence<T> + Default,
    R: BufRead,
{
    let header = next_line(&mut reader)?.ok_or(PersistenceError::MissingCount)?;
    let expected: usize = header
        .trim()
        .parse()
        .map_err(|source| PersistenceError::InvalidCount {
            text: header.clone(),
            source,
        })?;

    let mut set = EqSet::new();
    for index in 0..expected {
        let text = next_line(&mut reader)?.ok_or(PersistenceError::Truncated {
            expected,
            found: index,
        })?;
        let element = text
            .parse::<T>()
            .map_err(|source| PersistenceError::Element {
                index,
                text: text.clone(),
                source: Box::new(source),
            })?;
        set.try_add(element)?;
    }

    if set.len() < expected {
        tracing::warn!(
            declared = expected,
            kept = set.len(),
            "collapsed equivalent elements while loading"
        );
    }
    Ok(set)
}

/// Reads one line without its trailing `\n`, or `None` at end of input.
fn next_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(Some(line))
}

/// Saves `set` to the file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns [`PersistenceError::Open`] if the file cannot be created and
/// [`PersistenceError::Io`] if writing fails.
///
/// # Examples
///
/// ```rust
/// use eqset::{EqSet, Point, PointEquality, persistence};
///
/// let directory = std::env::temp_dir();
/// let path = directory.join("eqset-doc-points.txt");
///
/// let points: EqSet<Point, PointEquality> =
///     [Point::new(1, 1), Point::new(2, 2)].into_iter().collect();
/// persistence::serialize(&points, &path).unwrap();
///
/// let loaded: EqSet<Point, PointEquality> = persistence::deserialize(&path).unwrap();
/// assert_eq!(loaded, points);
/// # std::fs::remove_file(&path).unwrap();
/// ```
pub fn serialize<T, E>(set: &EqSet<T, E>, path: impl AsRef<Path>) -> Result<(), PersistenceError>
where
    T: Display,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PersistenceError::Open {
        path: path.to_path_buf(),
        mode: OpenMode::Write,
        source,
    })?;
    tracing::debug!(path = %path.display(), count = set.len(), "saving set");
    write_to(set, BufWriter::new(file))
}

/// Loads a set from the file at `path`.
///
/// # Errors
///
/// Returns [`PersistenceError::Open`] if the file cannot be opened, and the
/// errors of [`read_from`] for its contents.
pub fn deserialize<T, E>(path: impl AsRef<Path>) -> Result<EqSet<T, E>, PersistenceError>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
    E: Equivalence<T> + Default,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PersistenceError::Open {
        path: path.to_path_buf(),
        mode: OpenMode::Read,
        source,
    })?;
    let set = read_from(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), count = set.len(), "loaded set");
    Ok(set)
}

/// Replaces the contents of `set` with the set stored at `path`.
///
/// `set` is only overwritten once the whole file has loaded.
///
/// # Errors
///
/// Same as [`deserialize`]; `set` is unchanged on error.
pub fn load_into<T, E>(path: impl AsRef<Path>, set: &mut EqSet<T, E>) -> Result<(), PersistenceError>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
    E: Equivalence<T> + Default,
{
    *set = deserialize(path)?;
    Ok(())
}
