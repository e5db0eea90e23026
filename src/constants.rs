//! Capacity limits for 64-bit numeral literals.
//!
//! This module centralizes the per-base digit-count caps that prove a
//! literal fits in an unsigned 64-bit value before it is decoded.

// ============================================================================
// Digit-Count Caps (Range Proof Before Decoding)
// ============================================================================

/// Maximum number of binary digits in a literal.
///
/// 64 binary digits is the exact capacity of a `u64`, so the cap alone
/// guarantees the decoded value cannot overflow.
pub const BINARY_DIGITS_MAX: usize = 64;

/// Maximum number of decimal digits in a literal.
///
/// 20 is the digit count of `u64::MAX`. Unlike the binary and hexadecimal
/// caps this one is not exact: a 20-digit literal may still exceed the range
/// and must be compared digit-wise against [`DECIMAL_DIGITS_VALUE_MAX`].
pub const DECIMAL_DIGITS_MAX: usize = 20;

/// Maximum number of hexadecimal digits in a literal, for both the `0x`
/// prefix and the `h` suffix spellings.
///
/// 16 hexadecimal digits is the exact capacity of a `u64`, so the cap alone
/// guarantees the decoded value cannot overflow.
pub const HEXADECIMAL_DIGITS_MAX: usize = 16;

// ============================================================================
// Input Capacity
// ============================================================================

/// Maximum length of a candidate string.
///
/// The longest accepted literal is 64 binary digits plus a one-character
/// suffix. Anything longer cannot denote a 64-bit value in any base and is
/// rejected at the normalization boundary before classification runs.
pub const INPUT_LEN_MAX: usize = BINARY_DIGITS_MAX + 1;

// ============================================================================
// Decimal Range Boundary
// ============================================================================

/// `u64::MAX` written out in decimal.
///
/// Used only for the digit-wise magnitude comparison when a candidate
/// decimal literal has exactly [`DECIMAL_DIGITS_MAX`] digits. Its length is
/// `DECIMAL_DIGITS_MAX` by construction.
pub const DECIMAL_DIGITS_VALUE_MAX: &str = "18446744073709551615";
