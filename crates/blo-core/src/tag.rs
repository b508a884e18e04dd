//! Packed ASCII identifiers used as pane names.
//!
//! Packing shifts each character into a 32-bit accumulator, so only the last
//! four characters of a longer input survive. Unpacking is not a fixed-width
//! inverse: it picks the character count from the magnitude of the value,
//! which means a tag whose leading bytes are zero decodes shorter than four
//! characters. Both behaviors are part of the file format and kept as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pack text into a 32-bit tag. Characters are truncated to their low byte.
pub fn pack(text: &str) -> u32 {
    text.chars()
        .fold(0u32, |acc, ch| (acc << 8) | (ch as u32 & 0xFF))
}

/// Unpack a tag into a string whose length depends on the tag's magnitude.
pub fn unpack(value: u32) -> String {
    let count = match value {
        0 => 0,
        1..=0xFF => 1,
        0x100..=0xFFFF => 2,
        0x1_0000..=0xFF_FFFF => 3,
        _ => 4,
    };
    (0..count)
        .rev()
        .map(|index| ((value >> (index * 8)) & 0xFF) as u8 as char)
        .collect()
}

/// A pane name. Zero means unnamed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub u32);

impl Tag {
    pub const NONE: Tag = Tag(0);

    pub fn pack(text: &str) -> Self {
        Tag(pack(text))
    }

    pub fn unpack(self) -> String {
        unpack(self.0)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The four raw bytes, most significant first, including leading zeros.
    pub fn raw_chars(self) -> [char; 4] {
        self.0.to_be_bytes().map(|byte| byte as char)
    }
}

impl From<u32> for Tag {
    fn from(value: u32) -> Self {
        Tag(value)
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Tag::pack(text)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unpack())
    }
}
