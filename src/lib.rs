//! Fixed-point decimal arithmetic for monetary calculations
//!
//! This library provides a single decimal type, [`Fixed`], that stores values
//! as an `i64` scaled by 10^7:
//!
//! - **Precision**: 7 decimal places (0.0000001)
//! - **Range**: ±99,999,999,999.9999999 (11 integer digits)
//! - **NaN semantics**: overflow, division by zero, and non-finite float
//!   input all collapse to a `NaN` sentinel that propagates through every
//!   subsequent operation, so long arithmetic chains never need per-step
//!   error checks
//!
//! Unlike binary floating point, `Fixed` represents decimal fractions
//! exactly, and unlike arbitrary-precision decimals its cost is bounded:
//! every value is one machine word and every operation is branch-light
//! integer arithmetic.
//!
//! ## Features
//!
//! - **Exact decimal math**: no floating-point representation error
//! - **no_std compatible**: the core type only needs `core`
//! - **Serde support**: string form for JSON-style formats, raw `i64` for
//!   binary formats
//! - **Codecs**: fixed-width big-endian byte encoding, stream read/write,
//!   and a raw-token JSON encoding that round-trips `NaN`
//!
//! ## Example
//!
//! ```rust
//! use decfix::Fixed;
//!
//! let price = Fixed::must_parse("123.456");
//! let quantity = Fixed::from(100u32);
//! let total = price * quantity;
//! assert_eq!(total.to_string(), "12345.6");
//!
//! // Division by zero is NaN, not a panic or an error.
//! let bad = total / Fixed::ZERO;
//! assert!(bad.is_nan());
//! assert!((bad + price).is_nan());
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod fixed;

pub use fixed::Fixed;

use thiserror::Error;

/// Error returned when a decimal literal is malformed.
///
/// Only syntax problems are reported this way. A well-formed literal whose
/// integer part exceeds 11 digits parses successfully to [`Fixed::NAN`],
/// so range checking stays on the caller's terms via [`Fixed::is_nan`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty, or a sign or decimal point had no digits
    /// attached to it.
    #[error("decimal string has no digits")]
    MissingDigits,

    /// The input contained a character other than decimal digits, one
    /// leading `-`, and one `.`.
    #[error("invalid character in decimal string")]
    InvalidCharacter,
}

pub type Result<T> = core::result::Result<T, ParseError>;
