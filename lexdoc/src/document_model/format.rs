//! Inline text format bitmask
//!
//! Lexical encodes composable inline styles as bit flags on a single
//! integer carried by every text leaf. Only the styles the import
//! pipeline produces are modeled here.

use serde::{Deserialize, Serialize};

/// Bold style flag (bit 0)
const BOLD: u32 = 1 << 0;

/// Italic style flag (bit 1)
const ITALIC: u32 = 1 << 1;

/// Underline style flag (bit 3)
///
/// Bit 2 is strikethrough in the consumer schema; the converter never
/// emits it, but the underline bit position must still match.
const UNDERLINE: u32 = 1 << 3;

/// Composable inline style flags for a text leaf
///
/// Serializes as a plain integer so the stored document matches the
/// Lexical `format` field exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFormat(u32);

impl TextFormat {
    /// No formatting applied
    pub const NONE: TextFormat = TextFormat(0);

    /// Create a format from raw Lexical bits
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit value as stored in the document
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Return this format with the bold bit set
    pub fn with_bold(self) -> Self {
        Self(self.0 | BOLD)
    }

    /// Return this format with the italic bit set
    pub fn with_italic(self) -> Self {
        Self(self.0 | ITALIC)
    }

    /// Return this format with the underline bit set
    pub fn with_underline(self) -> Self {
        Self(self.0 | UNDERLINE)
    }

    /// Check whether the bold bit is set
    pub fn is_bold(self) -> bool {
        self.0 & BOLD != 0
    }

    /// Check whether the italic bit is set
    pub fn is_italic(self) -> bool {
        self.0 & ITALIC != 0
    }

    /// Check whether the underline bit is set
    pub fn is_underline(self) -> bool {
        self.0 & UNDERLINE != 0
    }
}
