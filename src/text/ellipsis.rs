pub const ELLIPSIS: char = '\u{2026}';

/// Keeps the first `n - 1` codepoints of `text` and appends an ellipsis.
/// Text of at most `n` codepoints comes back unchanged; a budget below 2
/// collapses to the ellipsis alone.
pub fn ellipt_right(text: &str, n: usize) -> String {
    #[cfg(feature = "trace")]
    let _ellipt_span = tracing::debug_span!("text.ellipt", side = "right", n = n).entered();

    if fits(text, n) {
        return text.to_string();
    }
    if n <= 1 {
        return ELLIPSIS.to_string();
    }

    let end = byte_offset_of_char(text, n - 1);
    let mut result = String::with_capacity(end + ELLIPSIS.len_utf8());
    result.push_str(&text[..end]);
    result.push(ELLIPSIS);
    result
}

/// Keeps the last `n - 1` codepoints of `text` behind a leading ellipsis.
pub fn ellipt_left(text: &str, n: usize) -> String {
    #[cfg(feature = "trace")]
    let _ellipt_span = tracing::debug_span!("text.ellipt", side = "left", n = n).entered();

    if fits(text, n) {
        return text.to_string();
    }
    if n <= 1 {
        return ELLIPSIS.to_string();
    }

    let skip = text.chars().count() - (n - 1);
    let start = byte_offset_of_char(text, skip);
    let mut result = String::with_capacity(text.len() - start + ELLIPSIS.len_utf8());
    result.push(ELLIPSIS);
    result.push_str(&text[start..]);
    result
}

fn fits(text: &str, n: usize) -> bool {
    // Every codepoint is at least one byte.
    text.len() <= n || text.chars().count() <= n
}

fn byte_offset_of_char(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}
