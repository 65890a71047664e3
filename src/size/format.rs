use super::unit::SizeUnit;

/// Formats a byte count with the largest decimal unit that fits, truncating
/// any remainder: 1001 → "1kB", 999_999 → "999kB".
pub fn format_size(bytes: u64) -> String {
    #[cfg(feature = "trace")]
    let _format_span = tracing::debug_span!("size.format", bytes = bytes).entered();

    let unit = SizeUnit::for_bytes(bytes);
    format!("{}{}", bytes / unit.multiplier(), unit.suffix())
}
