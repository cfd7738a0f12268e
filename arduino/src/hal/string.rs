//! String Vocabulary
//!
//! Arduino firmware manipulates text through `String::substring`,
//! `String::indexOf` and `String::isEmpty`. This module defines those
//! operations as the [`WString`] trait so the same call sites work on
//! whatever text type the platform provides.
//!
//! # Boundary Behavior
//!
//! [`WString::substring`] and [`WString::index_of`] follow the host text
//! type, not the target runtime. Offsets are byte offsets, a start
//! offset past the end (or inside a multi-byte character) panics the way
//! host slicing panics, and a missing needle yields [`NPOS`]. The Arduino
//! core instead returns an empty string for an out-of-range start and
//! `-1` for a missing needle. Code that must behave identically on both
//! should use [`WString::substring_clamped`] or
//! [`WString::try_substring`] and compare against [`NPOS`].
//!
//! The two-argument form diverges too. On the board `substring(from, to)`
//! takes an end index; here the pair is `(start, len)` like the host
//! `substr`, so `substring((2, 3))` on `"HelloWorld"` is `"llo"` where
//! the board would give `"l"`. Sketches that pass a pair must compute
//! `to - from` themselves when built for the host.

use core::fmt;
use core::ops::Range;

/// "No position" value returned by [`WString::index_of`] when the needle
/// does not occur.
pub const NPOS: usize = usize::MAX;

/// Errors reported by [`WString::try_substring`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StringError {
    /// The start offset lies past the end of the string.
    StartOutOfRange {
        /// Requested start offset.
        start: usize,
        /// Length of the string in bytes.
        len: usize,
    },
    /// The offset falls inside a multi-byte character.
    NotCharBoundary(usize),
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringError::StartOutOfRange { start, len } => {
                write!(f, "substring start {} is past the end of a {}-byte string", start, len)
            }
            StringError::NotCharBoundary(offset) => {
                write!(f, "offset {} is not on a character boundary", offset)
            }
        }
    }
}

impl core::error::Error for StringError {}

/// Arguments accepted by [`WString::substring`].
///
/// A bare start offset, or a `(start, len)` pair where `len` is clamped
/// to what remains. The pair follows the host `substr`, not the board's
/// `substring(from, to)`; see the module docs.
pub trait SubstringArgs: Copy {
    /// Split into the start offset and the optional length.
    fn bounds(self) -> (usize, Option<usize>);
}

impl SubstringArgs for usize {
    fn bounds(self) -> (usize, Option<usize>) {
        (self, None)
    }
}

impl SubstringArgs for (usize, usize) {
    fn bounds(self) -> (usize, Option<usize>) {
        (self.0, Some(self.1))
    }
}

/// Something [`WString::index_of`] can search for.
pub trait Needle {
    /// Byte offset of the first occurrence in `haystack`.
    fn find_in(&self, haystack: &str) -> Option<usize>;
}

impl Needle for char {
    fn find_in(&self, haystack: &str) -> Option<usize> {
        haystack.find(*self)
    }
}

impl Needle for &str {
    fn find_in(&self, haystack: &str) -> Option<usize> {
        haystack.find(*self)
    }
}

#[cfg(feature = "host")]
impl Needle for &std::string::String {
    fn find_in(&self, haystack: &str) -> Option<usize> {
        haystack.find(self.as_str())
    }
}

/// Compute the byte range a substring request selects, without panicking.
pub fn substring_range<A: SubstringArgs>(s: &str, args: A) -> Result<Range<usize>, StringError> {
    let (start, count) = args.bounds();
    let len = s.len();

    if start > len {
        return Err(StringError::StartOutOfRange { start, len });
    }
    if !s.is_char_boundary(start) {
        return Err(StringError::NotCharBoundary(start));
    }

    let end = match count {
        Some(n) => start.saturating_add(n).min(len),
        None => len,
    };
    if !s.is_char_boundary(end) {
        return Err(StringError::NotCharBoundary(end));
    }

    Ok(start..end)
}

/// Move `offset` back onto the nearest character boundary at or below it.
fn floor_boundary(s: &str, offset: usize) -> usize {
    let mut offset = offset.min(s.len());
    while !s.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Move `offset` forward onto the nearest character boundary at or above it.
fn ceil_boundary(s: &str, offset: usize) -> usize {
    let mut offset = offset.min(s.len());
    while !s.is_char_boundary(offset) {
        offset += 1;
    }
    offset
}

/// The Arduino `String` method vocabulary.
///
/// Implementors provide [`as_str`](WString::as_str) and
/// [`from_slice`](WString::from_slice); every Arduino-named operation
/// forwards to the matching `str` operation.
pub trait WString {
    /// Borrow the contents as a string slice.
    fn as_str(&self) -> &str;

    /// Build an owned value holding `slice`.
    ///
    /// Only ever called with a slice of `self`, so it never needs more
    /// capacity than the original.
    fn from_slice(slice: &str) -> Self
    where
        Self: Sized;

    /// Extract `len` bytes starting at `start`, or everything from
    /// `start` when no length is given.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than the length, or if either end
    /// falls inside a multi-byte character.
    fn substring<A: SubstringArgs>(&self, args: A) -> Self
    where
        Self: Sized,
    {
        let (start, count) = args.bounds();
        let tail = &self.as_str()[start..];
        let slice = match count {
            Some(n) => &tail[..n.min(tail.len())],
            None => tail,
        };
        Self::from_slice(slice)
    }

    /// Like [`substring`](WString::substring) but reports out-of-range
    /// requests instead of panicking.
    fn try_substring<A: SubstringArgs>(&self, args: A) -> Result<Self, StringError>
    where
        Self: Sized,
    {
        let s = self.as_str();
        let range = substring_range(s, args)?;
        Ok(Self::from_slice(&s[range]))
    }

    /// Like [`substring`](WString::substring) but clamps both ends into
    /// the string, so a start past the end yields an empty string.
    ///
    /// An offset inside a multi-byte character moves inward: the start
    /// rounds up and the end rounds down, so the result never holds
    /// bytes outside the requested range.
    fn substring_clamped<A: SubstringArgs>(&self, args: A) -> Self
    where
        Self: Sized,
    {
        let s = self.as_str();
        let (start, count) = args.bounds();
        let first = ceil_boundary(s, start);
        let end = match count {
            Some(n) => floor_boundary(s, start.saturating_add(n)).max(first),
            None => s.len(),
        };
        Self::from_slice(&s[first..end])
    }

    /// Byte offset of the first occurrence of `needle`, or [`NPOS`].
    fn index_of<N: Needle>(&self, needle: N) -> usize {
        needle.find_in(self.as_str()).unwrap_or(NPOS)
    }

    /// Byte offset of the first occurrence of `needle` at or after
    /// `from`, or [`NPOS`].
    fn index_of_from<N: Needle>(&self, needle: N, from: usize) -> usize {
        self.as_str()
            .get(from..)
            .and_then(|tail| needle.find_in(tail))
            .map_or(NPOS, |offset| offset + from)
    }

    /// True iff the string has length zero.
    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}
