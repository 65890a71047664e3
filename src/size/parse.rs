use thiserror::Error;

use super::unit::SizeUnit;

/// Largest byte count `parse_size` accepts, so results always fit an `i64`.
pub const MAX_BYTE_SIZE: u64 = i64::MAX as u64;

/// Why a byte-size string was rejected. The `Display` output is the reason
/// phrase shown to users after the quoted input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseSizeErrorKind {
    #[error("\"{token}\" is not a number")]
    NotANumber { token: String },
    #[error("no numerical prefix")]
    NoNumericPrefix,
    #[error("need a number with a unit as input")]
    MissingUnit,
    #[error("try 'kB' or 'MB'")]
    UnrecognizedUnit,
    #[error("size cannot be negative")]
    NegativeSize,
    #[error("value out of range")]
    OutOfRange,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot parse \"{input}\": {kind}")]
pub struct ParseSizeError {
    input: String,
    kind: ParseSizeErrorKind,
}

impl ParseSizeError {
    fn new(input: &str, kind: ParseSizeErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// The unmodified text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> &ParseSizeErrorKind {
        &self.kind
    }
}

/// Parses a byte-size string such as "20MB" or "1KB" into an exact byte
/// count. Only ASCII digits are accepted as the numeric prefix.
pub fn parse_size(text: &str) -> Result<u64, ParseSizeError> {
    #[cfg(feature = "trace")]
    let _parse_span = tracing::debug_span!("size.parse", input = text).entered();

    let fail = |kind: ParseSizeErrorKind| ParseSizeError::new(text, kind);

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    // ASCII digits are single bytes, so this index is always a char boundary.
    let digits_end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (digits, suffix) = unsigned.split_at(digits_end);

    if digits.is_empty() {
        if negative || text.is_empty() {
            let token = if negative { "-" } else { "" };
            return Err(fail(ParseSizeErrorKind::NotANumber {
                token: token.to_string(),
            }));
        }
        return Err(fail(ParseSizeErrorKind::NoNumericPrefix));
    }
    if negative {
        return Err(fail(ParseSizeErrorKind::NegativeSize));
    }
    if suffix.is_empty() {
        return Err(fail(ParseSizeErrorKind::MissingUnit));
    }

    let unit =
        SizeUnit::from_suffix(suffix).ok_or_else(|| fail(ParseSizeErrorKind::UnrecognizedUnit))?;
    let value: u64 = digits
        .parse()
        .map_err(|_| fail(ParseSizeErrorKind::OutOfRange))?;
    value
        .checked_mul(unit.multiplier())
        .filter(|bytes| *bytes <= MAX_BYTE_SIZE)
        .ok_or_else(|| fail(ParseSizeErrorKind::OutOfRange))
}
