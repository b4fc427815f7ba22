//! Line and token splitting for plain-text documents.

/// Line terminator used when reassembling documents.
pub const LINE_SEPARATOR: &str = "\n";

/// Token separator. Only a single space splits tokens.
pub const TOKEN_SEPARATOR: char = ' ';

/// Whether `c` ends a line.
///
/// Besides `\n` and `\r` this covers the vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators.
#[must_use]
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines on every [`is_line_break`] character.
///
/// `\r\n` counts as one terminator. Terminators are dropped. A trailing
/// terminator does not produce an empty final line, so `"a\nb\n"` and
/// `"a\nb"` both yield two lines.
///
/// # Examples
/// ```
/// use syllabify_txt::text::split_lines;
///
/// assert_eq!(split_lines("one\r\ntwo\rthree\n"), vec!["one", "two", "three"]);
/// assert_eq!(split_lines("page\u{0c}next"), vec!["page", "next"]);
/// assert!(split_lines("").is_empty());
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Whether `text` ends with a line terminator.
#[must_use]
pub fn ends_with_line_break(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_line_break)
}

/// Split a line into tokens on single spaces.
///
/// Runs of spaces produce empty tokens so that rejoining with one space
/// restores the original spacing. Tabs are ordinary token content.
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(TOKEN_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_lines_unix() {
        assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_lines_blank_lines_kept() {
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_split_lines_windows_and_mac() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_multibyte() {
        assert_eq!(split_lines("café\nnaïve"), vec!["café", "naïve"]);
    }

    #[test]
    fn test_split_lines_form_feed() {
        assert_eq!(split_lines("page one\x0cpage two"), vec!["page one", "page two"]);
        assert_eq!(split_lines("a\x0c\x0cb\x0c"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_unicode_separators() {
        assert_eq!(split_lines("a\u{2028}b\u{2029}c"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\u{85}b\x0bc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\x1cb\x1dc\x1ed"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("naïve\u{2028}"), vec!["naïve"]);
    }

    #[test]
    fn test_split_lines_cr_before_other_break() {
        assert_eq!(split_lines("a\r\x0cb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_ends_with_line_break() {
        assert!(ends_with_line_break("a\n"));
        assert!(ends_with_line_break("a\r\n"));
        assert!(ends_with_line_break("a\r"));
        assert!(ends_with_line_break("a\x0c"));
        assert!(ends_with_line_break("a\u{2028}"));
        assert!(!ends_with_line_break("a"));
        assert!(!ends_with_line_break(""));
    }

    #[test]
    fn test_split_tokens_single_space() {
        let tokens: Vec<&str> = split_tokens("hello world").collect();
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_split_tokens_keeps_extra_spaces() {
        let tokens: Vec<&str> = split_tokens("one   two").collect();
        assert_eq!(tokens, vec!["one", "", "", "two"]);
        assert_eq!(tokens.join(" "), "one   two");
    }

    #[test]
    fn test_split_tokens_tab_is_content() {
        let tokens: Vec<&str> = split_tokens("one\ttwo three").collect();
        assert_eq!(tokens, vec!["one\ttwo", "three"]);
    }

    #[test]
    fn test_split_tokens_empty_line() {
        let tokens: Vec<&str> = split_tokens("").collect();
        assert_eq!(tokens, vec![""]);
    }
}
