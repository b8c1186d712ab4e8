//! Column wrapping for formatted responses, list-marker aware.

use textwrap::Options;

/// Wrap formatted text to `width` columns, preserving its newlines and blank
/// lines. Continuations of a list line (`• item`, `3. step`) are indented to
/// line up under the item text rather than the marker. Width 0 leaves lines
/// unwrapped.
pub fn wrap_formatted(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        if line.is_empty() || width == 0 {
            out.push(line.to_string());
            continue;
        }
        let indent = " ".repeat(hanging_indent(line));
        let options = Options::new(width).subsequent_indent(&indent);
        out.extend(textwrap::wrap(line, options).into_iter().map(|c| c.into_owned()));
    }
    out
}

/// Columns occupied by a leading list marker (`• ` or `N. `), zero otherwise.
fn hanging_indent(line: &str) -> usize {
    if line.starts_with("• ") {
        return 2;
    }
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && line[digits..].starts_with(". ") {
        return digits + 2;
    }
    0
}
