use proptest::prelude::*;
use strutil::text::{ELLIPSIS, ellipt_left, ellipt_right, truncate_output};

fn output_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'\n'), Just(b'x'), Just(b'y')], 0..200)
}

fn line_count(data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }
    let body = data.strip_suffix(b"\n").unwrap_or(data);
    body.iter().filter(|&&b| b == b'\n').count() + 1
}

proptest! {
    #[test]
    fn truncation_is_a_suffix_within_both_budgets(
        data in output_bytes(),
        max_lines in 0usize..40,
        max_bytes in 0usize..250,
    ) {
        let out = truncate_output(&data, max_lines, max_bytes);
        prop_assert!(data.ends_with(out));
        prop_assert!(out.len() <= max_bytes);
        prop_assert!(line_count(out) <= max_lines);
    }

    #[test]
    fn truncation_keeps_the_largest_such_suffix(
        data in output_bytes(),
        max_lines in 1usize..40,
        max_bytes in 0usize..250,
    ) {
        let out = truncate_output(&data, max_lines, max_bytes);
        if out.len() < data.len() && out.len() < max_bytes {
            // one more byte would have broken the line budget
            let longer = &data[data.len() - out.len() - 1..];
            prop_assert!(line_count(longer) > max_lines);
        }
    }

    #[test]
    fn generous_budgets_return_input_unchanged(data in output_bytes()) {
        let out = truncate_output(&data, data.len() + 1, data.len());
        prop_assert_eq!(out, data.as_slice());
    }

    #[test]
    fn ellipt_respects_the_budget(text in "\\PC{0,30}", n in 1usize..40) {
        let right = ellipt_right(&text, n);
        let left = ellipt_left(&text, n);
        prop_assert!(right.chars().count() <= n);
        prop_assert!(left.chars().count() <= n);
    }

    #[test]
    fn ellipt_keeps_an_edge_of_the_input(text in "\\PC{0,30}", n in 0usize..40) {
        let right = ellipt_right(&text, n);
        let left = ellipt_left(&text, n);
        if text.chars().count() <= n {
            prop_assert_eq!(&right, &text);
            prop_assert_eq!(&left, &text);
        } else {
            let kept = right.strip_suffix(ELLIPSIS).unwrap();
            prop_assert!(text.starts_with(kept));
            let kept = left.strip_prefix(ELLIPSIS).unwrap();
            prop_assert!(text.ends_with(kept));
        }
    }
}
