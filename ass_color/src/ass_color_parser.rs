// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsers that split raw BGR input into candidate channels. They only cut the input
//! into pieces, they do not check for hex digits. That is done afterwards by
//! [`HexChannel::try_new`] so that the error can name the offending channel.
//!
//! Supported inputs:
//! - `BBGGRR`, eg: `0000FF` for red.
//! - `BGR` shorthand, eg: `00F` for red. Each char is doubled.
//! - `&HBBGGRR&` override tag, eg: `&H0000FF&` for red. The trailing `&` is optional.
//!
//! [`HexChannel::try_new`]: crate::HexChannel::try_new

use nom::{IResult, Parser,
          bytes::complete::{tag_no_case, take, take_till},
          character::complete::{anychar, char},
          combinator::{all_consuming, map, opt},
          sequence::delimited};

pub mod constants {
    pub const OVERRIDE_TAG_PREFIX: &str = "&H";
    pub const OVERRIDE_TAG_SUFFIX: char = '&';
    pub const SHORTHAND_LEN: usize = 3;
    pub const FULL_HEX_LEN: usize = 6;
    pub const CHANNEL_LEN: usize = 2;
}

use constants::{CHANNEL_LEN, OVERRIDE_TAG_PREFIX, OVERRIDE_TAG_SUFFIX};

/// Candidate channel text in the order it appears on disk: blue, green, red.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgrCandidates<T> {
    pub blue: T,
    pub green: T,
    pub red: T,
}

/// Cuts `BBGGRR` into three 2 char slices. Slicing counts chars, not bytes, so
/// non-ASCII input never splits a code point.
///
/// # Errors
///
/// Returns a nom error if the input is not exactly 6 chars long.
pub fn take_full_hex(input: &str) -> IResult<&str, BgrCandidates<&str>> {
    all_consuming(map(
        (take(CHANNEL_LEN), take(CHANNEL_LEN), take(CHANNEL_LEN)),
        |(blue, green, red)| BgrCandidates { blue, green, red },
    ))
    .parse(input)
}

/// Expands `BGR` into `BBGGRR` candidates by doubling each char.
///
/// # Errors
///
/// Returns a nom error if the input is not exactly 3 chars long.
pub fn take_shorthand(input: &str) -> IResult<&str, BgrCandidates<String>> {
    all_consuming(map((anychar, anychar, anychar), |(blue, green, red)| {
        BgrCandidates {
            blue: double(blue),
            green: double(green),
            red: double(red),
        }
    }))
    .parse(input)
}

/// Strips the `&H` prefix (any case) and the optional `&` suffix from an override tag
/// color, returning the body in between.
///
/// # Errors
///
/// Returns a nom error if the prefix is missing or there is text after the suffix.
pub fn take_override_tag_body(input: &str) -> IResult<&str, &str> {
    all_consuming(delimited(
        tag_no_case(OVERRIDE_TAG_PREFIX),
        take_till(|ch: char| ch == OVERRIDE_TAG_SUFFIX),
        opt(char(OVERRIDE_TAG_SUFFIX)),
    ))
    .parse(input)
}

fn double(ch: char) -> String { [ch, ch].iter().collect() }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn full_hex_is_cut_in_bgr_order() {
        let (rem, it) = take_full_hex("123456").unwrap();
        assert_eq!(rem, "");
        assert_eq!(
            it,
            BgrCandidates {
                blue: "12",
                green: "34",
                red: "56",
            }
        );
    }

    #[test]
    fn full_hex_does_not_validate_digits() {
        let (_, it) = take_full_hex("GG1 zz").unwrap();
        assert_eq!((it.blue, it.green, it.red), ("GG", "1 ", "zz"));
    }

    #[test]
    fn full_hex_counts_chars_not_bytes() {
        let (_, it) = take_full_hex("éé00ff").unwrap();
        assert_eq!(it.blue, "éé");
    }

    #[test_case("12345"; "too short")]
    #[test_case("1234567"; "too long")]
    #[test_case(""; "empty")]
    fn full_hex_wrong_length(input: &str) {
        assert!(take_full_hex(input).is_err());
    }

    #[test]
    fn shorthand_doubles_each_char() {
        let (_, it) = take_shorthand("F0a").unwrap();
        assert_eq!(
            it,
            BgrCandidates {
                blue: "FF".to_string(),
                green: "00".to_string(),
                red: "aa".to_string(),
            }
        );
    }

    #[test_case("ab"; "too short")]
    #[test_case("abcd"; "too long")]
    fn shorthand_wrong_length(input: &str) {
        assert!(take_shorthand(input).is_err());
    }

    #[test_case("&H00FFFF&", "00FFFF"; "with suffix")]
    #[test_case("&H00FFFF", "00FFFF"; "without suffix")]
    #[test_case("&h00ffff&", "00ffff"; "lowercase prefix")]
    #[test_case("&H&", ""; "empty body")]
    #[test_case("&HF00&", "F00"; "short body")]
    fn override_tag_body(input: &str, expected: &str) {
        let (rem, body) = take_override_tag_body(input).unwrap();
        assert_eq!(rem, "");
        assert_eq!(body, expected);
    }

    #[test_case("00FFFF&"; "missing prefix")]
    #[test_case("H00FFFF&"; "missing ampersand")]
    #[test_case("&H00FFFF&&"; "double suffix")]
    #[test_case("&H00FFFF&x"; "text after suffix")]
    fn override_tag_malformed(input: &str) {
        assert!(take_override_tag_body(input).is_err());
    }
}
