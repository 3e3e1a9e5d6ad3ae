//! Synthetic article model and its markdown serialization

use std::fmt::Write;

/// One generated content file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// File name, e.g. `learning-0.md`
    pub name: String,
    /// Tags in catalog order
    pub tags: Vec<String>,
    /// RFC 3339 timestamp, emitted verbatim
    pub date: String,
    pub content: String,
}

impl Article {
    pub fn new(name: String, date: String, content: String) -> Self {
        Article {
            name,
            tags: Vec::new(),
            date,
            content,
        }
    }

    /// Two-word title derived from the file name.
    ///
    /// `learning-0.md` becomes `learning 0`. The stem is split at its last `-`
    /// so page names containing dashes keep them.
    pub fn title(&self) -> String {
        let stem = self.name.split('.').next().unwrap_or_default();
        match stem.rsplit_once('-') {
            Some((page, index)) => format!("{} {}", page, index),
            None => stem.to_string(),
        }
    }

    /// Full file text: front matter followed by the body
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: {}\ndate: {}\ntags: [{}]\n---\n{}",
            quote(&self.title(), false),
            self.date,
            render_tags(&self.tags),
            self.content
        )
    }
}

/// Comma-joined quoted tags with no surrounding brackets; empty for no tags
pub fn render_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| quote(tag, true))
        .collect::<Vec<_>>()
        .join(",")
}

/// Double-quote `s` with backslash escapes.
///
/// With `ascii_only`, every non-ASCII character is written as `\u`/`\U`.
/// Every escape produced is also a valid YAML double-quoted escape.
pub fn quote(s: &str, ascii_only: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ if c.is_ascii() && is_printable(c) => out.push(c),
            _ if !ascii_only && is_printable(c) => out.push(c),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            _ if c < ' ' || c == '\u{7F}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            _ if (c as u32) < 0x10000 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            _ => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
    out.push('"');
    out
}

// Format (Cf) and private-use (Co) characters, inclusive ranges
const NON_PRINTABLE: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xE000, 0xF8FF),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
    (0xF0000, 0xFFFFD),
    (0x100000, 0x10FFFD),
];

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
///
/// Control, separator, format and private-use characters are escaped.
/// Unassigned code points are not detected and pass through unescaped.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let code = c as u32;
    !NON_PRINTABLE
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}
