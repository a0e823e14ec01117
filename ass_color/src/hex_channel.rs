// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::{AssColorError, AssColorResult, Channel, is_valid_hex_channel};

/// Two ASCII hex digits always fit in two bytes, so the text never spills to the heap.
pub type HexChannelStorage = SmallString<[u8; 2]>;

/// One color channel as two hex digits of text, eg: `"FF"` or `"0a"`.
///
/// The only way to get one is [`HexChannel::try_new`], which checks the value with
/// [`is_valid_hex_channel`]. After that the text is trusted and never re-checked. Casing
/// is kept exactly as given, since the value is not parsed into a number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexChannel(HexChannelStorage);

impl HexChannel {
    /// # Errors
    ///
    /// Returns [`AssColorError::InvalidComponent`] naming `channel` if `value` is not
    /// exactly two hex digits.
    pub fn try_new(channel: Channel, value: &str) -> AssColorResult<Self> {
        if is_valid_hex_channel(value) {
            Ok(Self(HexChannelStorage::from(value)))
        } else {
            Err(AssColorError::InvalidComponent {
                channel,
                value: value.to_string(),
            })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }
}

impl AsRef<str> for HexChannel {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl Display for HexChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(self.as_str()) }
}
