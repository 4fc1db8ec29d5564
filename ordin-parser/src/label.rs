//! Navigation-label field extraction
//!
//! Clause entries in the navigation pane carry labels like
//! `제3조 (목적)`: the ordinal sits between the glyphs `제` and `조`, the
//! display title between the parentheses. Superseded clauses append a
//! `<`-prefixed strike-through marker to the label. All cuts here are
//! delimiter searches; an absent delimiter falls back or yields `None`,
//! never an out-of-range fault.

/// The display title of a clause label.
///
/// Takes the text after the first `(` up to the closing `)`; a `<` marker
/// appearing before the close truncates the title there (superseded
/// clauses). Without an opening parenthesis the whole label is used;
/// without a close, the rest of the label.
pub fn clause_title(label: &str) -> String {
    let after_open = match label.find('(') {
        Some(idx) => &label[idx + '('.len_utf8()..],
        None => label,
    };
    let segment = match after_open.find(')') {
        Some(idx) => &after_open[..idx],
        None => after_open,
    };
    let segment = match segment.find('<') {
        Some(idx) => &segment[..idx],
        None => segment,
    };
    segment.trim().to_string()
}

/// The clause ordinal: the integer between `제` and `조`.
///
/// `None` when either glyph is missing or the text between them is not a
/// number; the caller keeps the entry either way.
pub fn clause_ordinal(label: &str) -> Option<u32> {
    let start = label.find('제')? + '제'.len_utf8();
    let rest = &label[start..];
    let end = rest.find('조')?;
    rest[..end].trim().parse().ok()
}

/// Strip a single leading separator from a navigation target reference.
pub fn strip_ref_separator(target: &str) -> &str {
    target
        .strip_prefix('#')
        .or_else(|| target.strip_prefix('/'))
        .unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("제3조 (목적)", "목적")]
    #[case("제3조 (목적) ", "목적")]
    #[case("제2조 (정의)\u{a0}", "정의")]
    #[case("제12조 (정의<개정>)", "정의")]
    #[case("제12조 (정의<개정 2024.1.1>", "정의")]
    #[case("제12조<개정>(정의)", "정의")]
    #[case("부칙", "부칙")]
    #[case("제4조 (시행일", "시행일")]
    fn titles(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(clause_title(label), expected);
    }

    #[rstest]
    #[case("제3조 (목적)", Some(3))]
    #[case("제12조 (정의)", Some(12))]
    #[case("제 7 조 (위원회)", Some(7))]
    #[case("부칙", None)]
    #[case("제일조 (목적)", None)]
    #[case("제조 (목적)", None)]
    fn ordinals(#[case] label: &str, #[case] expected: Option<u32>) {
        assert_eq!(clause_ordinal(label), expected);
    }

    #[rstest]
    #[case("#cl3", "cl3")]
    #[case("/path/to/clause", "path/to/clause")]
    #[case("plain", "plain")]
    fn ref_separators(#[case] target: &str, #[case] expected: &str) {
        assert_eq!(strip_ref_separator(target), expected);
    }
}
