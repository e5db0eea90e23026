//! Core types for numeral classification.
//!
//! This module defines the base tag assigned by classification and the
//! parsed numeral returned to callers.

use std::fmt;
use std::str::FromStr;

use crate::constants::INPUT_LEN_MAX;
use crate::error::ParseNumeralError;

/// The radix a literal string is interpreted in.
///
/// Chosen once per input by classification and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralBase {
    /// Base 2, written as binary digits with a trailing `b`.
    Binary,
    /// Base 10, written as bare decimal digits with no affix.
    Decimal,
    /// Base 16, written with a leading `0x` or a trailing `h`.
    Hexadecimal,
}

impl NumeralBase {
    /// The numeric radix of this base.
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }
}

impl fmt::Display for NumeralBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

/// A classified and decoded numeral literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    /// The base the literal was written in.
    pub base: NumeralBase,
    /// The decoded magnitude. In range by construction: the bound check
    /// proves `value <= u64::MAX` before decoding runs.
    pub value: u64,
}

impl FromStr for Numeral {
    type Err = ParseNumeralError;

    /// Normalizing entry point: trims surrounding whitespace, lowercases,
    /// and gates the input length before handing the candidate to
    /// [`parse`](crate::parse), which expects normalized input.
    ///
    /// ```
    /// use numconvert::{Numeral, NumeralBase};
    ///
    /// let numeral: Numeral = " 0xFF ".parse().unwrap();
    /// assert_eq!(numeral.base, NumeralBase::Hexadecimal);
    /// assert_eq!(numeral.value, 255);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidate = s.trim().to_ascii_lowercase();
        if candidate.len() > INPUT_LEN_MAX {
            return Err(ParseNumeralError::UnrecognizedFormat);
        }

        crate::parse(&candidate)
    }
}
