// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ass_color
//!
//! Parse and emit the color values used by the Advanced SubStation Alpha (ASS) subtitle
//! format. ASS stores colors in blue-green-red order, eg: `0000FF` is red. This crate
//! validates that text into an [`AssColorValue`] and writes it back out in the same
//! order with [`AssColorValue::to_escape_form`].
//!
//! ```
//! use r3bl_ass_color::AssColorValue;
//!
//! let yellow = AssColorValue::from_channels("FF", "FF", "00").unwrap();
//! assert_eq!(yellow.to_escape_form(), "00FFFF");
//! assert_eq!(yellow.to_override_tag(), "&H00FFFF&");
//! assert_eq!(yellow.to_string(), "#FFFF00");
//!
//! let blue = AssColorValue::from_bgr("F00").unwrap();
//! assert_eq!(blue.to_escape_form(), "FF0000");
//! ```
//!
//! Malformed input is never coerced, see [`AssColorError`].
//!
//! More info:
//! - <https://github.com/libass/libass/wiki/ASSv5-Override-Tags#color-and-alpha---c-o>
//! - <http://www.tcax.org/docs/ass-specs.htm>

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enable or disable debug logging for this crate. Logs go to whatever [`tracing`]
/// subscriber the caller has installed, if any.
pub const DEBUG_ASS_COLOR: bool = true;

// Attach.
mod ass_color_error;
mod ass_color_parser;
mod ass_color_value;
mod hex_channel;
mod hex_digit;

// Re-export.
pub use ass_color_error::*;
pub use ass_color_parser::*;
pub use ass_color_value::*;
pub use hex_channel::*;
pub use hex_digit::*;
