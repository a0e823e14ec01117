// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`AssColorValue`] holds a subtitle color as three channels of hex text, and renders it
//! back out in the blue-green-red order used by ASS color escape codes.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use strum::IntoEnumIterator;

use crate::{AssColorError, AssColorResult, Channel, DEBUG_ASS_COLOR, HexChannel,
            ass_color_parser::{constants::{FULL_HEX_LEN, OVERRIDE_TAG_PREFIX,
                                           OVERRIDE_TAG_SUFFIX, SHORTHAND_LEN},
                               take_full_hex, take_override_tag_body, take_shorthand}};

/// A color as it appears in an Advanced SubStation Alpha subtitle file.
///
/// Each channel is kept as the exact text it was built from (eg: `"fF"` stays `"fF"`),
/// so equality is textual. There are no mutators: build a new value instead.
///
/// # Construction
///
/// | Input                  | Function                             | Example      |
/// | :--------------------- | :----------------------------------- | :----------- |
/// | three 2 digit channels | [`AssColorValue::from_channels`]     | `FF, FF, 00` |
/// | `BGR` shorthand        | [`AssColorValue::from_shorthand`]    | `F00`        |
/// | `BBGGRR`               | [`AssColorValue::from_full_hex`]     | `0000FF`     |
/// | either of the above    | [`AssColorValue::from_bgr`]          |              |
/// | 1 or 3 arguments       | [`AssColorValue::from_args`]         |              |
/// | `&HBBGGRR&`            | [`AssColorValue::from_override_tag`] | `&H0000FF&`  |
///
/// # Output
///
/// - [`AssColorValue::to_escape_form`] gives `BBGGRR`, the on-disk byte order.
/// - [`Display`] gives `#RRGGBB`, for humans and debug output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssColorValue {
    red: HexChannel,
    green: HexChannel,
    blue: HexChannel,
}

#[derive(Debug, Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
enum InputShape {
    Channels,
    Shorthand,
    FullHex,
}

impl AssColorValue {
    /// Builds a color from three channels, given in red, green, blue order. The text is
    /// used as is, no reordering.
    ///
    /// # Errors
    ///
    /// Returns [`AssColorError::InvalidComponent`] for the first of `r`, `g`, `b` that is
    /// not exactly two hex digits.
    pub fn from_channels(r: &str, g: &str, b: &str) -> AssColorResult<Self> {
        let it = Self::try_from_candidates(r, g, b)?;
        it.log_constructed(InputShape::Channels);
        Ok(it)
    }

    /// Builds a color from the `BGR` shorthand, where each char is doubled: `F00`
    /// becomes blue `FF`, green `00`, red `00`.
    ///
    /// # Errors
    ///
    /// - [`AssColorError::InvalidLength`] if `input` is not 3 chars long.
    /// - [`AssColorError::InvalidComponent`] if any char is not a hex digit.
    pub fn from_shorthand(input: &str) -> AssColorResult<Self> {
        let Ok((_, bgr)) = take_shorthand(input) else {
            return Err(invalid_length(input));
        };
        let it = Self::try_from_candidates(&bgr.red, &bgr.green, &bgr.blue)?;
        it.log_constructed(InputShape::Shorthand);
        Ok(it)
    }

    /// Builds a color from `BBGGRR`: chars 0-1 are blue, 2-3 green, 4-5 red.
    ///
    /// # Errors
    ///
    /// - [`AssColorError::InvalidLength`] if `input` is not 6 chars long.
    /// - [`AssColorError::InvalidComponent`] if any channel has a non hex digit.
    pub fn from_full_hex(input: &str) -> AssColorResult<Self> {
        let Ok((_, bgr)) = take_full_hex(input) else {
            return Err(invalid_length(input));
        };
        let it = Self::try_from_candidates(bgr.red, bgr.green, bgr.blue)?;
        it.log_constructed(InputShape::FullHex);
        Ok(it)
    }

    /// Picks [`Self::from_shorthand`] or [`Self::from_full_hex`] based on the number of
    /// chars in `input`.
    ///
    /// # Errors
    ///
    /// - [`AssColorError::InvalidLength`] if `input` is neither 3 nor 6 chars long.
    /// - [`AssColorError::InvalidComponent`] if any channel has a non hex digit.
    pub fn from_bgr(input: &str) -> AssColorResult<Self> {
        match input.chars().count() {
            SHORTHAND_LEN => Self::from_shorthand(input),
            FULL_HEX_LEN => Self::from_full_hex(input),
            length => Err(AssColorError::InvalidLength { length }),
        }
    }

    /// Dispatches on the number of arguments: one is a BGR string (see
    /// [`Self::from_bgr`]), three are the red, green, blue channels (see
    /// [`Self::from_channels`]).
    ///
    /// # Errors
    ///
    /// - [`AssColorError::InvalidArity`] if `args` has neither 1 nor 3 items.
    /// - Otherwise whatever the selected constructor returns.
    pub fn from_args(args: &[&str]) -> AssColorResult<Self> {
        match args {
            [bgr] => Self::from_bgr(bgr),
            [r, g, b] => Self::from_channels(r, g, b),
            _ => Err(AssColorError::InvalidArity { count: args.len() }),
        }
    }

    /// Parses the color part of an override tag, eg: the `&H0000FF&` in `{\c&H0000FF&}`.
    /// The `&H` prefix is matched in any case and the trailing `&` is optional.
    ///
    /// # Errors
    ///
    /// - [`AssColorError::InvalidEscapeCode`] if the prefix is missing, or there is text
    ///   after the trailing `&`.
    /// - [`AssColorError::InvalidLength`] if the body is not 6 chars long.
    /// - [`AssColorError::InvalidComponent`] if any channel has a non hex digit.
    pub fn from_override_tag(input: &str) -> AssColorResult<Self> {
        let Ok((_, body)) = take_override_tag_body(input) else {
            return Err(AssColorError::InvalidEscapeCode {
                input: input.to_string(),
            });
        };
        Self::from_full_hex(body)
    }

    /// All three channels are checked before anything is built, so there is never a
    /// partially valid value.
    fn try_from_candidates(r: &str, g: &str, b: &str) -> AssColorResult<Self> {
        let [red, green, blue] = [(Channel::Red, r), (Channel::Green, g), (Channel::Blue, b)]
            .map(|(channel, value)| HexChannel::try_new(channel, value));
        Ok(Self {
            red: red?,
            green: green?,
            blue: blue?,
        })
    }

    fn log_constructed(&self, shape: InputShape) {
        DEBUG_ASS_COLOR.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🎨 ass color constructed",
                shape = %shape,
                escape_form = %self.to_escape_form()
            );
        });
    }
}

impl AssColorValue {
    #[must_use]
    pub fn r(&self) -> &str { self.red.as_str() }

    #[must_use]
    pub fn g(&self) -> &str { self.green.as_str() }

    #[must_use]
    pub fn b(&self) -> &str { self.blue.as_str() }

    #[must_use]
    pub fn channel(&self, channel: Channel) -> &HexChannel {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Channels in red, green, blue order.
    pub fn channels(&self) -> impl Iterator<Item = (Channel, &HexChannel)> {
        Channel::iter().map(move |channel| (channel, self.channel(channel)))
    }

    /// `BBGGRR`, the order ASS color escape codes store channels in. No prefix or
    /// separators.
    #[must_use]
    pub fn to_escape_form(&self) -> String {
        let Self { red, green, blue } = self;
        format!("{blue}{green}{red}")
    }

    /// `&HBBGGRR&`, ready to drop into an override tag like `\c` or `\3c`.
    #[must_use]
    pub fn to_override_tag(&self) -> String {
        format!(
            "{OVERRIDE_TAG_PREFIX}{}{OVERRIDE_TAG_SUFFIX}",
            self.to_escape_form()
        )
    }
}

/// `#RRGGBB`, in the usual red-green-blue reading order, casing as given.
impl Display for AssColorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let Self { red, green, blue } = self;
        write!(f, "#{red}{green}{blue}")
    }
}

impl FromStr for AssColorValue {
    type Err = AssColorError;

    fn from_str(input: &str) -> AssColorResult<Self> { Self::from_bgr(input) }
}

impl TryFrom<&str> for AssColorValue {
    type Error = AssColorError;

    fn try_from(input: &str) -> AssColorResult<Self> { Self::from_bgr(input) }
}

impl TryFrom<(&str, &str, &str)> for AssColorValue {
    type Error = AssColorError;

    fn try_from((r, g, b): (&str, &str, &str)) -> AssColorResult<Self> {
        Self::from_channels(r, g, b)
    }
}

fn invalid_length(input: &str) -> AssColorError {
    AssColorError::InvalidLength {
        length: input.chars().count(),
    }
}

/// Serialized as the escape form string, eg: `"0000FF"`. Deserialized with
/// [`AssColorValue::from_bgr`], so malformed text is a deserialization error.
#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::AssColorValue;

    impl Serialize for AssColorValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_escape_form())
        }
    }

    impl<'de> Deserialize<'de> for AssColorValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            AssColorValue::from_bgr(&raw).map_err(de::Error::custom)
        }
    }
}
