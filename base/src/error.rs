//! Error taxonomy shared by every exactfp crate.
//!
//! Unlike the library this workspace grew out of, preconditions here are
//! never enforced with a panic that a caller can't recover from: every
//! fallible public entry point returns a [`Error`] instead.

use core::fmt::{self, Display, Formatter};

/// The single error type returned by every fallible operation in the
/// exactfp crate family.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A result would need more than the word/bit budget a value is allowed
    /// to occupy (see `exactfp_int::MAX_WORDS`).
    Overflow(&'static str),

    /// An argument violated an operation's precondition: a zero divisor, a
    /// non-finite floating point input, a value out of the target integer's
    /// range, or mismatched array lengths.
    Domain(&'static str),

    /// The requested operation has no implementation for this particular
    /// backend (used by the `Accumulator` trait's default methods).
    Unsupported(&'static str),
}

impl Error {
    #[inline]
    pub fn overflow(context: &'static str) -> Self {
        Error::Overflow(context)
    }

    #[inline]
    pub fn domain(context: &'static str) -> Self {
        Error::Domain(context)
    }

    #[inline]
    pub fn unsupported(context: &'static str) -> Self {
        Error::Unsupported(context)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::Overflow(ctx) => write!(f, "value exceeds the representable bound ({ctx})"),
            Error::Domain(ctx) => write!(f, "invalid argument ({ctx})"),
            Error::Unsupported(ctx) => write!(f, "operation not supported by this backend ({ctx})"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Convenience alias used throughout the exactfp crates.
pub type Result<T> = core::result::Result<T, Error>;
