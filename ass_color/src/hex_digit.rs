// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Character level checks used to validate a single BGR channel.

/// Returns `true` if `ch` is one of `0-9`, `A-F`, or `a-f`.
///
/// The code point ranges are spelled out instead of using
/// [`char::is_ascii_hexdigit`] so that the accepted set is visible at the call site.
#[must_use]
pub fn is_hex_digit(ch: char) -> bool {
    let code_point = u32::from(ch);
    (0x30..=0x39).contains(&code_point)        // 0-9
        || (0x41..=0x46).contains(&code_point) // A-F
        || (0x61..=0x66).contains(&code_point) // a-f
}

/// Returns `true` if `value` is exactly two characters long and both are hex digits.
///
/// Length is counted in characters, so `"é"` (two bytes, one char) is rejected.
#[must_use]
pub fn is_valid_hex_channel(value: &str) -> bool {
    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None) => is_hex_digit(first) && is_hex_digit(second),
        _ => false,
    }
}
