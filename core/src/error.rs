//! The error type shared by all fallible operations in the crate.
//!
//! Failures are always immediate and synchronous: an out-of-range index,
//! a singular matrix, too few points, an unknown type tag in a binary
//! stream, or an underlying I/O error. Numeric degeneracies such as
//! normalizing a zero vector are *not* errors; they propagate as NaN or
//! infinity per IEEE 754.

use thiserror::Error;

/// Result of a fallible geometry operation.
pub type Result<T> = core::result::Result<T, Error>;

/// An error returned by a geometry operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A component or element index was out of range.
    #[error("index {index} out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },

    /// An inverse was requested of a matrix whose determinant is zero.
    #[error("matrix is not invertible: determinant is zero")]
    NotInvertible,

    /// An operation received fewer points than it requires.
    #[error("expected at least {expected} points, got {actual}")]
    TooFewPoints { expected: usize, actual: usize },

    /// A binary stream contained an unknown type tag.
    #[error("unsupported type tag {0}")]
    UnsupportedTag(i32),

    /// Reading or writing a binary stream failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display() {
        let e = Error::IndexOutOfRange { index: 3, dim: 2 };
        assert_eq!(e.to_string(), "index 3 out of range for dimension 2");

        let e = Error::TooFewPoints { expected: 3, actual: 1 };
        assert_eq!(e.to_string(), "expected at least 3 points, got 1");

        assert_eq!(
            Error::UnsupportedTag(-7).to_string(),
            "unsupported type tag -7"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_error_is_preserved_as_source() {
        use std::error::Error as _;
        use std::io;

        let e = Error::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        let src = e.source().and_then(|s| s.downcast_ref::<io::Error>());
        assert_eq!(src.map(io::Error::kind), Some(io::ErrorKind::UnexpectedEof));
    }
}
