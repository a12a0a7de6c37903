//! File decoding with a fixed fallback chain

use crate::error::{EditorError, Result};
use crate::constants::errors;
use std::fmt;

/// Encoding a document was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Latin1,
    Windows1251,
    Iso8859_1,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf-8"),
            Self::Latin1 => write!(f, "latin-1"),
            Self::Windows1251 => write!(f, "windows-1251"),
            Self::Iso8859_1 => write!(f, "iso-8859-1"),
        }
    }
}

/// Tried in order after UTF-8 fails; the first success wins
pub const FALLBACK_ENCODINGS: &[SourceEncoding] = &[
    SourceEncoding::Latin1,
    SourceEncoding::Windows1251,
    SourceEncoding::Iso8859_1,
];

impl SourceEncoding {
    /// Decode `bytes` strictly; `None` if this encoding cannot represent them
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            // Latin-1 maps every byte to the codepoint of the same value
            Self::Latin1 | Self::Iso8859_1 => Some(bytes.iter().map(|&b| b as char).collect()),
            Self::Windows1251 => encoding_rs::WINDOWS_1251
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }
}

/// Decode file content: UTF-8 first, then the fallback chain
pub fn decode_with_fallback(bytes: &[u8]) -> Result<(String, SourceEncoding)> {
    std::iter::once(SourceEncoding::Utf8)
        .chain(FALLBACK_ENCODINGS.iter().copied())
        .find_map(|encoding| encoding.decode(bytes).map(|text| (text, encoding)))
        .ok_or_else(|| EditorError::file_decode(errors::MSG_ALL_ENCODINGS_FAILED))
}
