//! Per-base bound checks.
//!
//! A bound check proves that a shape-valid digit span denotes a value no
//! larger than `u64::MAX`, so the decoders can run without any overflow
//! detection. Binary and hexadecimal are settled by their digit-count caps
//! alone; decimal additionally needs a digit-wise comparison against the
//! written-out maximum when the candidate has exactly as many digits.

use std::cmp::Ordering;

use crate::constants::{
    BINARY_DIGITS_MAX, DECIMAL_DIGITS_MAX, DECIMAL_DIGITS_VALUE_MAX, HEXADECIMAL_DIGITS_MAX,
};
use crate::error::ParseNumeralError;

/// Check that a binary digit span fits in 64 bits.
///
/// 64 digits is the exact boundary; no magnitude comparison is needed.
pub(crate) fn check_binary(digits: &str) -> Result<(), ParseNumeralError> {
    debug_assert!(!digits.is_empty());

    if digits.len() > BINARY_DIGITS_MAX {
        return Err(ParseNumeralError::MagnitudeOverflow);
    }

    Ok(())
}

/// Check that a decimal digit span fits in 64 bits.
///
/// Fewer than 20 digits is unconditionally in range. Exactly 20 digits is
/// settled by comparing against [`DECIMAL_DIGITS_VALUE_MAX`] position by
/// position. More than 20 digits always overflows.
pub(crate) fn check_decimal(digits: &str) -> Result<(), ParseNumeralError> {
    debug_assert!(!digits.is_empty());

    match digits.len().cmp(&DECIMAL_DIGITS_MAX) {
        Ordering::Less => Ok(()),
        Ordering::Equal => {
            if compare_digitwise(digits, DECIMAL_DIGITS_VALUE_MAX) == Ordering::Greater {
                Err(ParseNumeralError::MagnitudeOverflow)
            } else {
                Ok(())
            }
        }
        Ordering::Greater => Err(ParseNumeralError::MagnitudeOverflow),
    }
}

/// Check that a hexadecimal digit span fits in 64 bits.
///
/// 16 digits is the exact boundary for both the `0x` and `h` spellings; no
/// magnitude comparison is needed.
pub(crate) fn check_hexadecimal(digits: &str) -> Result<(), ParseNumeralError> {
    debug_assert!(!digits.is_empty());

    if digits.len() > HEXADECIMAL_DIGITS_MAX {
        return Err(ParseNumeralError::MagnitudeOverflow);
    }

    Ok(())
}

/// Order two equal-length digit strings by magnitude, scanning left to
/// right and returning at the first position that differs.
///
/// The short-circuit is the point: once a candidate digit is smaller than
/// the bound's digit at the same position, the remaining digits cannot make
/// the candidate larger, and once one is greater they cannot make it
/// smaller. Works for any radix whose digits order lexically and any
/// boundary constant, independent of the target integer width.
pub(crate) fn compare_digitwise(candidate: &str, bound: &str) -> Ordering {
    debug_assert_eq!(candidate.len(), bound.len());

    for (candidate_digit, bound_digit) in candidate.bytes().zip(bound.bytes()) {
        match candidate_digit.cmp(&bound_digit) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }

    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_digitwise_equal() {
        assert_eq!(
            compare_digitwise("18446744073709551615", DECIMAL_DIGITS_VALUE_MAX),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_digitwise_decides_at_first_difference() {
        // First position differs: nothing after it can change the outcome.
        assert_eq!(
            compare_digitwise("28446744073709551615", DECIMAL_DIGITS_VALUE_MAX),
            Ordering::Greater
        );
        assert_eq!(
            compare_digitwise("08446744073709551615", DECIMAL_DIGITS_VALUE_MAX),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_digitwise_decides_at_last_digit() {
        assert_eq!(
            compare_digitwise("18446744073709551616", DECIMAL_DIGITS_VALUE_MAX),
            Ordering::Greater
        );
        assert_eq!(
            compare_digitwise("18446744073709551614", DECIMAL_DIGITS_VALUE_MAX),
            Ordering::Less
        );
    }

    #[test]
    fn test_check_binary_cap() {
        assert!(check_binary(&"1".repeat(64)).is_ok());
        assert_eq!(
            check_binary(&"1".repeat(65)),
            Err(ParseNumeralError::MagnitudeOverflow)
        );
    }

    #[test]
    fn test_check_decimal_below_cap_is_unconditional() {
        // 19 nines exceed nothing: under 20 digits no comparison runs.
        assert!(check_decimal(&"9".repeat(19)).is_ok());
    }

    #[test]
    fn test_check_decimal_at_cap_compares() {
        assert!(check_decimal("18446744073709551615").is_ok());
        assert_eq!(
            check_decimal("18446744073709551616"),
            Err(ParseNumeralError::MagnitudeOverflow)
        );
        // Lexically smaller 20-digit string, in range regardless of the
        // digits after the first difference.
        assert!(check_decimal("09999999999999999999").is_ok());
    }

    #[test]
    fn test_check_decimal_over_cap() {
        assert_eq!(
            check_decimal(&"1".repeat(21)),
            Err(ParseNumeralError::MagnitudeOverflow)
        );
    }

    #[test]
    fn test_check_hexadecimal_cap() {
        assert!(check_hexadecimal(&"f".repeat(16)).is_ok());
        assert_eq!(
            check_hexadecimal(&"f".repeat(17)),
            Err(ParseNumeralError::MagnitudeOverflow)
        );
    }
}
