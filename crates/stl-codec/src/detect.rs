//! Format detection and the target-format selector.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// The leading bytes that mark an ASCII STL file.
const ASCII_MAGIC: &[u8; 5] = b"solid";

/// The two STL representations.
///
/// Doubles as the target-format selector for conversion. Parses from
/// the user-facing mode keywords of the converter, case-insensitively:
/// `STLB`/`binary` and `STLA`/`ascii`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StlFormat {
    /// Compact binary encoding: 80-byte header, u32 count, 50-byte
    /// facet records.
    Binary,
    /// Verbose line-oriented text encoding.
    Ascii,
}

impl StlFormat {
    /// The converter mode keyword for this format (`stlb` / `stla`).
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Binary => "stlb",
            Self::Ascii => "stla",
        }
    }
}

impl fmt::Display for StlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Ascii => write!(f, "ASCII"),
        }
    }
}

impl FromStr for StlFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stlb" | "binary" => Ok(Self::Binary),
            "stla" | "ascii" => Ok(Self::Ascii),
            _ => Err(CodecError::UnsupportedTargetFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Classify an input buffer as ASCII or binary STL.
///
/// ASCII if and only if the first 5 bytes are exactly `solid`
/// (case-sensitive); anything else, including buffers shorter than 5
/// bytes, is binary.
///
/// This is the format's own heuristic, kept verbatim for compatibility:
/// a binary file whose header happens to begin with `solid` is
/// misclassified as ASCII. That is a documented limitation of STL
/// itself, and this function deliberately does not attempt smarter
/// sniffing (null-byte scans, count plausibility checks) to work around
/// it.
#[must_use]
pub fn detect_format(input: &[u8]) -> StlFormat {
    if input.len() >= ASCII_MAGIC.len() && &input[..ASCII_MAGIC.len()] == ASCII_MAGIC {
        StlFormat::Ascii
    } else {
        StlFormat::Binary
    }
}
