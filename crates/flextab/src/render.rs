//! Fixed-width cell rendering and border lines.
//!
//! Widths here count Unicode code points, not display columns; wide-glyph
//! measurement is explicitly out of scope for this engine.

use std::borrow::Cow;

/// Marker appended when a cell is truncated. One code point, one visual unit.
pub const ELLIPSIS: char = '…';

/// Fit `text` into exactly `width` code points.
///
/// Leading/trailing whitespace is trimmed and embedded line breaks collapse
/// to single spaces before measuring. Text longer than `width` is cut to
/// `width - 1` code points plus an ellipsis; shorter text is right-padded
/// with spaces. The output length always equals `width`.
///
/// ```rust
/// use flextab::fit;
///
/// assert_eq!(fit("hello", 10), "hello     ");
/// assert_eq!(fit("helloworld!!", 5), "hell…");
/// ```
pub fn fit(text: &str, width: usize) -> String {
    let cleaned = collapse_line_breaks(text.trim());
    let len = cleaned.chars().count();
    if len > width {
        if width == 0 {
            return String::new();
        }
        let mut out: String = cleaned.chars().take(width - 1).collect();
        out.push(ELLIPSIS);
        return out;
    }
    if len == width {
        return cleaned.into_owned();
    }
    format!("{cleaned:<width$}")
}

/// Replace embedded line breaks with single spaces.
///
/// A `\r\n` pair is one line break, so it becomes one space, not two.
fn collapse_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Generate a table border line from the final column widths.
///
/// Each column contributes a run of hyphens followed by two spaces; the
/// trailing two spaces are part of the border's literal output.
pub fn border(widths: &[usize]) -> String {
    let mut line = String::with_capacity(widths.iter().sum::<usize>() + 2 * widths.len());
    for &width in widths {
        line.push_str(&"-".repeat(width));
        line.push_str("  ");
    }
    line
}
