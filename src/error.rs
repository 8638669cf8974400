//! Error type shared by all multi-precision integer operations
//!
//! Every fallible operation in this crate reports one of a small, stable
//! set of error conditions. The variants are deliberately coarse: callers
//! in key-generation or protocol code almost always react to the *class*
//! of failure (bad argument, exhausted buffer, structural rejection), not
//! to the exact operation that produced it.

use std::fmt::{Display, Formatter};

/// Errors reported by multi-precision integer operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An argument was malformed: out-of-range radix, bit count, or an
    /// operand violating an operation's preconditions (e.g. an even
    /// modulus passed to modular exponentiation).
    BadInput,
    /// An ASCII import encountered a character that is not a digit of the
    /// requested radix.
    InvalidCharacter,
    /// An export buffer is too small to hold the value.
    BufferTooSmall,
    /// The operation would require a negative result or modulus where only
    /// a non-negative one is meaningful (unsigned subtraction with swapped
    /// operands, Euclidean reduction by a negative modulus).
    NegativeValue,
    /// Division or reduction by zero.
    DivisionByZero,
    /// The value failed a structural test: a composite number where a
    /// prime is required, or a non-invertible residue.
    NotAcceptable,
    /// A grow request exceeded the maximum supported size.
    AllocFailed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Error::BadInput => "bad input argument",
            Error::InvalidCharacter => "invalid character in input",
            Error::BufferTooSmall => "output buffer too small",
            Error::NegativeValue => "negative value not allowed here",
            Error::DivisionByZero => "division by zero",
            Error::NotAcceptable => "value failed a structural test",
            Error::AllocFailed => "size limit exceeded",
        };

        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
