/// Returns the longest suffix of `data` holding at most `max_lines` trailing
/// lines and at most `max_bytes` bytes.
///
/// The line budget is applied first and keeps whole lines; the byte budget
/// then cuts from the front of what is left, mid-line if it has to. A final
/// newline terminates the last line rather than opening an empty one.
pub fn truncate_output(data: &[u8], max_lines: usize, max_bytes: usize) -> &[u8] {
    #[cfg(feature = "trace")]
    let _truncate_span = tracing::debug_span!(
        "text.truncate_output",
        len = data.len(),
        max_lines = max_lines,
        max_bytes = max_bytes
    )
    .entered();

    let line_start = last_lines_start(data, max_lines);
    let byte_start = data.len().saturating_sub(max_bytes);
    &data[line_start.max(byte_start)..]
}

/// Offset where the last `max_lines` lines of `data` begin.
fn last_lines_start(data: &[u8], max_lines: usize) -> usize {
    if max_lines == 0 {
        return data.len();
    }

    let body = data.strip_suffix(b"\n").unwrap_or(data);
    let mut seen = 0usize;
    for (idx, &byte) in body.iter().enumerate().rev() {
        if byte == b'\n' {
            seen += 1;
            if seen == max_lines {
                return idx + 1;
            }
        }
    }
    0
}
