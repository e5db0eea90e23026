use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::all_consuming,
    sequence::{preceded, terminated},
};

pub(super) fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

pub(super) fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub(super) fn is_hexadecimal_digit(c: char) -> bool {
    c.is_ascii_digit() || ('a'..='f').contains(&c)
}

/// Recognizes a binary literal: one or more binary digits and the trailing
/// `b` suffix. Yields the digit span with the suffix stripped.
pub(super) fn binary_literal(input: &str) -> IResult<&str, &str> {
    let mut literal = all_consuming(terminated(take_while1(is_binary_digit), char('b')));
    return literal.parse(input);
}

/// Recognizes a decimal literal: one or more decimal digits, no affix.
pub(super) fn decimal_literal(input: &str) -> IResult<&str, &str> {
    let mut literal = all_consuming(take_while1(is_decimal_digit));
    return literal.parse(input);
}

/// Recognizes a hexadecimal literal in either spelling and yields the digit
/// span with the affix stripped.
///
/// The `h` suffix spelling is tried before the `0x` prefix spelling; the
/// two only overlap on malformed input, where the first grammar to touch
/// the string decides how it fails.
pub(super) fn hexadecimal_literal(input: &str) -> IResult<&str, &str> {
    return alt((hexadecimal_suffix_literal, hexadecimal_prefix_literal)).parse(input);
}

fn hexadecimal_suffix_literal(input: &str) -> IResult<&str, &str> {
    let mut literal = all_consuming(terminated(take_while1(is_hexadecimal_digit), char('h')));
    return literal.parse(input);
}

fn hexadecimal_prefix_literal(input: &str) -> IResult<&str, &str> {
    let mut literal = all_consuming(preceded(tag("0x"), take_while1(is_hexadecimal_digit)));
    return literal.parse(input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_literal_strips_suffix() {
        assert_eq!(binary_literal("101b"), Ok(("", "101")));
        assert_eq!(binary_literal("0b"), Ok(("", "0")));
    }

    #[test]
    fn test_binary_literal_rejects() {
        // No digits before the suffix.
        assert!(binary_literal("b").is_err());
        // Digit outside the binary alphabet.
        assert!(binary_literal("102b").is_err());
        // Missing suffix.
        assert!(binary_literal("101").is_err());
    }

    #[test]
    fn test_decimal_literal() {
        assert_eq!(decimal_literal("102245"), Ok(("", "102245")));
        assert!(decimal_literal("").is_err());
        assert!(decimal_literal("101b").is_err());
        assert!(decimal_literal("12 34").is_err());
    }

    #[test]
    fn test_hexadecimal_literal_both_spellings() {
        assert_eq!(hexadecimal_literal("12345h"), Ok(("", "12345")));
        assert_eq!(hexadecimal_literal("0x12345"), Ok(("", "12345")));
        assert_eq!(hexadecimal_literal("0h"), Ok(("", "0")));
        assert_eq!(hexadecimal_literal("0x0"), Ok(("", "0")));
        // `b` is an ordinary hex digit when the affix says hexadecimal.
        assert_eq!(hexadecimal_literal("1bh"), Ok(("", "1b")));
        assert_eq!(hexadecimal_literal("0xdeadbeef"), Ok(("", "deadbeef")));
    }

    #[test]
    fn test_hexadecimal_literal_rejects() {
        // Affix alone, no digits.
        assert!(hexadecimal_literal("h").is_err());
        assert!(hexadecimal_literal("0x").is_err());
        // Both affixes at once fails both spellings: the suffix form trips
        // on the `x`, the prefix form leaves the `h` unconsumed.
        assert!(hexadecimal_literal("0x123h").is_err());
        // Digit outside the hexadecimal alphabet.
        assert!(hexadecimal_literal("0x12g4").is_err());
        assert!(hexadecimal_literal("deadgh").is_err());
    }
}
