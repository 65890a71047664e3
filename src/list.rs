//! Small helpers over lists of strings.

pub fn list_contains<S: AsRef<str>>(list: &[S], item: &str) -> bool {
    list.iter().any(|s| s.as_ref() == item)
}

/// Like [`list_contains`], but `list` must already be sorted.
pub fn sorted_list_contains<S: AsRef<str>>(list: &[S], item: &str) -> bool {
    list.binary_search_by(|s| s.as_ref().cmp(item)).is_ok()
}

/// Renders each item as an escaped, double-quoted string, joined with ", ".
pub fn quoted<S: AsRef<str>>(list: &[S]) -> String {
    list.iter()
        .map(|s| format!("{:?}", s.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Splits on commas, trimming tokens and dropping empty or repeated ones.
pub fn comma_separated_list(text: &str) -> Vec<String> {
    multi_comma_separated_list(&[text])
}

/// [`comma_separated_list`] over several inputs, flattened in order.
pub fn multi_comma_separated_list<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in texts
        .iter()
        .flat_map(|text| text.as_ref().split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
    {
        if !list_contains(&out, token) {
            out.push(token.to_string());
        }
    }
    out
}
