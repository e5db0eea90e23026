//! Classify, parse, and re-render unsigned 64-bit numeral literals.
//!
//! The crate answers one question: which numeral base does a raw string
//! denote, and what value does it carry? Three spellings are recognized:
//!
//! - Binary: `0`/`1` digits with a trailing `b` (for example `011010110b`)
//! - Decimal: bare `0`–`9` digits with no affix (for example `102245`)
//! - Hexadecimal: a leading `0x` or a trailing `h` (for example `0x12345`
//!   or `12345h`)
//!
//! # Architecture
//!
//! Classification is divided into three phases:
//! 1. **Shape recognition**: nom grammars decide whether the character set
//!    and affix placement match a base, in the fixed order binary →
//!    decimal → hexadecimal (first match wins)
//! 2. **Bound checking**: digit-count caps (64 binary, 20 decimal, 16
//!    hexadecimal digits) prove the value fits in 64 bits; a 20-digit
//!    decimal candidate is additionally compared digit by digit against
//!    `u64::MAX` written out
//! 3. **Decoding**: positional accumulation over the proven-valid digit
//!    span
//!
//! The implementation is organized into focused modules:
//! - `constants`: digit-count caps and the decimal range boundary
//! - `types`: `NumeralBase` and `Numeral`
//! - `error`: the rejection taxonomy
//! - `literal`: shape grammars and base dispatch
//! - `validation`: per-base bound checks
//! - `decode`: per-base decoders
//! - `render`: value-to-string rendering in all three bases
//!
//! # Design
//!
//! The range proof happens *before* decoding, never as overflow detection
//! during it. That keeps the decoders total functions over their inputs:
//! no error path, no panics, no checked arithmetic. The cost is that the
//! bound checker and decoder each inspect the digit span once.
//!
//! # Input Contract
//!
//! [`classify`] and [`parse`] expect normalized input: lowercase ASCII,
//! no surrounding whitespace. [`Numeral`]'s [`FromStr`](std::str::FromStr)
//! implementation performs that normalization and is the right entry point
//! for raw user text.
//!
//! # Limits
//!
//! - Candidate strings longer than 65 characters (64 binary digits plus a
//!   suffix) are rejected by the normalizing entry point
//! - Values are unsigned and at most `u64::MAX`; there is no bignum path
//!
//! # Safety
//!
//! - `#![forbid(unsafe_code)]`: no unsafe code
//! - Decoders run only on bound-checked spans, so release builds carry no
//!   overflow branches and debug builds assert the preconditions
//! - Every call completes in time proportional to the input length, which
//!   the normalizing entry point caps

#![forbid(unsafe_code)]
#![allow(clippy::needless_return)]
#![doc = include_str!("../README.md")]

// ============================================================================
// Module Organization
// ============================================================================

mod constants;
mod decode;
mod error;
mod literal;
mod render;
mod types;
mod validation;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use error::ParseNumeralError;
pub use render::{render_binary, render_decimal, render_hexadecimal};
pub use types::{Numeral, NumeralBase};

// ============================================================================
// Public Entry Points
// ============================================================================

/// Determine which base a normalized candidate string denotes, without
/// decoding it.
///
/// Runs shape recognition and the matched base's bound check only. Expects
/// lowercase, trimmed input.
///
/// # Examples
///
/// ```
/// use numconvert::{classify, NumeralBase, ParseNumeralError};
///
/// assert_eq!(classify("101b"), Ok(NumeralBase::Binary));
/// assert_eq!(classify("102245"), Ok(NumeralBase::Decimal));
/// assert_eq!(classify("0x12345"), Ok(NumeralBase::Hexadecimal));
/// assert_eq!(classify(""), Err(ParseNumeralError::EmptyInput));
/// ```
pub fn classify(input: &str) -> Result<NumeralBase, ParseNumeralError> {
    literal::classify_literal(input).map(|raw| raw.base)
}

/// Classify a normalized candidate string and decode its value.
///
/// Expects lowercase, trimmed input; use [`Numeral`]'s
/// [`FromStr`](std::str::FromStr) implementation for raw user text.
///
/// # Examples
///
/// ```
/// use numconvert::{parse, NumeralBase};
///
/// let numeral = parse("12345h").unwrap();
/// assert_eq!(numeral.base, NumeralBase::Hexadecimal);
/// assert_eq!(numeral.value, 0x12345);
/// ```
pub fn parse(input: &str) -> Result<Numeral, ParseNumeralError> {
    let raw = literal::classify_literal(input)?;

    let value = match raw.base {
        NumeralBase::Binary => decode::decode_binary(raw.digits),
        NumeralBase::Decimal => decode::decode_decimal(raw.digits),
        NumeralBase::Hexadecimal => decode::decode_hexadecimal(raw.digits),
    };

    Ok(Numeral {
        base: raw.base,
        value,
    })
}
