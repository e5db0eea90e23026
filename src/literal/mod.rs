//! Literal shape recognition and base dispatch.
//!
//! The grammar submodule recognizes the three literal spellings; this
//! module runs them in the fixed order binary → decimal → hexadecimal
//! (first match wins) and applies the matched base's bound check. The
//! grammars are mutually exclusive for well-formed input, so the order only
//! matters for keeping malformed edge cases classified identically.

mod grammar;

use crate::error::ParseNumeralError;
use crate::types::NumeralBase;
use crate::validation;

/// A shape- and bound-checked literal: the detected base and the digit
/// span with affixes stripped, ready for decoding.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RawLiteral<'a> {
    pub(crate) base: NumeralBase,
    pub(crate) digits: &'a str,
}

/// Classify a normalized candidate string.
///
/// Returns the base tag and digit span on success. Empty input is rejected
/// before any grammar runs. A candidate matching a grammar but failing its
/// bound check is rejected as overflow without consulting the remaining
/// bases: a bound-failing string can never satisfy another base's affix
/// rule, so the early exit cannot change the classification.
pub(crate) fn classify_literal(input: &str) -> Result<RawLiteral<'_>, ParseNumeralError> {
    if input.is_empty() {
        return Err(ParseNumeralError::EmptyInput);
    }

    if let Ok((_, digits)) = grammar::binary_literal(input) {
        validation::check_binary(digits)?;
        return Ok(RawLiteral {
            base: NumeralBase::Binary,
            digits,
        });
    }

    if let Ok((_, digits)) = grammar::decimal_literal(input) {
        validation::check_decimal(digits)?;
        return Ok(RawLiteral {
            base: NumeralBase::Decimal,
            digits,
        });
    }

    if let Ok((_, digits)) = grammar::hexadecimal_literal(input) {
        validation::check_hexadecimal(digits)?;
        return Ok(RawLiteral {
            base: NumeralBase::Hexadecimal,
            digits,
        });
    }

    Err(ParseNumeralError::UnrecognizedFormat)
}
