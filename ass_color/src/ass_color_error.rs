// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced while constructing an [`AssColorValue`]. See [`AssColorError`] for
//! details.
//!
//! [`AssColorValue`]: crate::AssColorValue

/// Names one of the three color channels. Used to report which channel was rejected.
///
/// Iteration order (via [`strum::IntoEnumIterator`]) is red, green, blue, which is the
/// order in which candidate channels are validated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Errors from the [`AssColorValue`] construction functions.
///
/// Every variant is a validation failure scoped to a single construction attempt:
///
/// | Variant                | Cause                                                      |
/// | :--------------------- | :--------------------------------------------------------- |
/// | [`InvalidArity`]       | Argument count was neither 1 nor 3                         |
/// | [`InvalidLength`]      | A single string argument was neither 3 nor 6 chars long    |
/// | [`InvalidComponent`]   | An extracted channel is not two hex digits                 |
/// | [`InvalidEscapeCode`]  | Override tag is missing its `&H` prefix or has extra text  |
///
/// [`AssColorValue`]: crate::AssColorValue
/// [`InvalidArity`]: Self::InvalidArity
/// [`InvalidLength`]: Self::InvalidLength
/// [`InvalidComponent`]: Self::InvalidComponent
/// [`InvalidEscapeCode`]: Self::InvalidEscapeCode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum AssColorError {
    #[error("Expected 1 or 3 color arguments, got {count}")]
    #[diagnostic(
        code(r3bl_ass_color::invalid_arity),
        help("Pass a single BGR hex string, or three 2-digit channels (r, g, b)")
    )]
    InvalidArity { count: usize },

    #[error("Expected a BGR hex string of 3 or 6 characters, got {length}")]
    #[diagnostic(
        code(r3bl_ass_color::invalid_length),
        help("Use `BBGGRR` (eg: `0000FF` for red) or the shorthand `BGR` (eg: `00F`)")
    )]
    InvalidLength { length: usize },

    #[error("Invalid BGR component for the {channel} channel: {value:?}")]
    #[diagnostic(
        code(r3bl_ass_color::invalid_component),
        help("Each channel must be exactly two hex digits: 0-9, A-F, a-f")
    )]
    InvalidComponent { channel: Channel, value: String },

    #[error("Invalid override tag color: {input:?}")]
    #[diagnostic(
        code(r3bl_ass_color::invalid_escape_code),
        help("Override tag colors look like `&HBBGGRR&`, eg: `&H0000FF&` for red")
    )]
    InvalidEscapeCode { input: String },
}

/// Type alias to make it easy to work with [`Result`]s that return [`AssColorError`].
pub type AssColorResult<T> = Result<T, AssColorError>;
