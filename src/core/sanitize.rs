// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

/// Collapse runs of whitespace (incl. `&nbsp;`) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove any `[ ... ]` footnote markers (e.g. `[a]`, `[12]`, `[note 3]`).
/// Greedy within each bracket pair, no nesting.
pub fn strip_brackets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_bracket = false;
    for ch in s.chars() {
        match ch {
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            _ if !in_bracket => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Cell text as the extractor wants it: footnotes gone, whitespace collapsed.
pub fn clean_cell(s: &str) -> String {
    normalize_ws(&strip_brackets(s))
}

/// First four-digit run: `"2004–05"` → `"2004"`.
pub fn first_year(s: &str) -> Option<&str> {
    YEAR.find(s).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_ws("  Total \n\u{a0} Goals "), "Total Goals");
    }

    #[test]
    fn strips_footnotes() {
        assert_eq!(strip_brackets("28[a]"), "28");
        assert_eq!(strip_brackets("Season[note 1] "), "Season");
        assert_eq!(clean_cell(" 1[12] 0 "), "1 0");
    }

    #[test]
    fn finds_first_year() {
        assert_eq!(first_year("2004–05"), Some("2004"));
        assert_eq!(first_year("Career total"), None);
        assert_eq!(first_year("2022 FIFA World Cup 2026"), Some("2022"));
    }
}
