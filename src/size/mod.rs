pub mod format;
pub mod parse;
pub mod unit;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

pub use format::format_size;
pub use parse::{MAX_BYTE_SIZE, ParseSizeError, ParseSizeErrorKind, parse_size};
pub use unit::SizeUnit;

/// A byte count that reads from and displays as a byte-size string.
///
/// Used where sizes come from users: CLI arguments and config files. Config
/// values may also be given as a plain integer number of bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "ByteSizeRepr")]
pub struct ByteSize(pub u64);

impl ByteSize {
    pub fn bytes(self) -> u64 {
        self.0
    }
}

impl FromStr for ByteSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_size(s).map(ByteSize)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_size(self.0))
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        ByteSize(bytes)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ByteSizeRepr {
    Bytes(u64),
    Text(String),
}

impl TryFrom<ByteSizeRepr> for ByteSize {
    type Error = ParseSizeError;

    fn try_from(repr: ByteSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            ByteSizeRepr::Bytes(bytes) => Ok(ByteSize(bytes)),
            ByteSizeRepr::Text(text) => text.parse(),
        }
    }
}
