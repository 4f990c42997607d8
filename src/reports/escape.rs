//! Escaping utilities for safe report generation.
//!
//! Weight tables and response sheets are edited by hand or exported from
//! spreadsheets, so names may contain characters that break Markdown tables
//! (pipes, newlines) or trigger formatting.

/// Escape a string for safe inclusion in a Markdown table cell.
///
/// # Examples
///
/// ```
/// use soc_maturity::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("Détection | Réponse"), "Détection \\| Réponse");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in Markdown inline content.
///
/// # Examples
///
/// ```
/// use soc_maturity::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**RSSI**"), "\\*\\*RSSI\\*\\*");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}
