//! Rejection taxonomy for numeral classification.

use thiserror::Error;

/// Why a candidate string was rejected.
///
/// Every rejection is terminal for that call: there is no retry and no
/// partial result. The library never prints; callers decide how a rejection
/// surfaces (the `numconvert` binary turns any of these into usage help and
/// a non-zero exit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseNumeralError {
    /// The input was empty. Reported before any base check runs.
    #[error("empty input")]
    EmptyInput,

    /// The input matches none of the three literal grammars.
    #[error("not a binary, decimal, or hexadecimal literal")]
    UnrecognizedFormat,

    /// The input matches a base's character grammar but denotes a value
    /// larger than `u64::MAX`.
    #[error("value does not fit in 64 unsigned bits")]
    MagnitudeOverflow,
}
