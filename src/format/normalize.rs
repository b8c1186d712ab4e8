//! Markdown-to-plain-text normalization: headers, emphasis, links, code, tables.

use std::sync::LazyLock;

use regex::Regex;

use super::citations;

/// Normalize markdown-ish model output into plain display text.
///
/// The passes run in a fixed order: a global bold-marker strip, a line scan
/// (table reflow, header stripping, the body rule chain), a blank-run
/// collapse, and a final bold-marker strip. Running the normalizer on its own
/// output is a no-op.
pub fn normalize_markdown(text: &str) -> String {
    let text = drop_horizontal_rules(text);
    let text = strip_bold_markers(&text);
    let lines = scan_lines(&text);
    let joined = lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    let collapsed = collapse_blank_runs(&joined);
    strip_bold_markers(&collapsed).trim().to_string()
}

/// Remove every `**` marker. Run once up front and once at the end so no
/// residue survives interleaved processing.
fn strip_bold_markers(s: &str) -> String {
    s.replace("**", "")
}

/// Blank out horizontal-rule lines before the bold strip runs, which would
/// otherwise eat star pairs out of `***`-style rules and leave a stray `*`.
fn drop_horizontal_rules(s: &str) -> String {
    s.lines()
        .map(|l| if RE_HORIZONTAL_RULE.is_match(l) { "" } else { l })
        .collect::<Vec<_>>()
        .join("\n")
}

static RE_BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Collapse runs of 3+ newlines to a single blank line.
fn collapse_blank_runs(s: &str) -> String {
    RE_BLANK_RUN.replace_all(s, "\n\n").into_owned()
}

/// Line scan: table rows accumulate and reflow to bullets, separator lines
/// vanish, fenced code blocks vanish, headers lose their markers, and every
/// other line goes through the body rule chain.
fn scan_lines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut in_table = false;
    let mut in_fence = false;
    let mut table_rows: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        if is_table_separator(line) {
            continue;
        }
        if let Some(cells) = parse_table_row(line) {
            in_table = true;
            table_rows.push(cells);
            continue;
        }
        if in_table {
            flush_table(&mut table_rows, &mut out);
            in_table = false;
        }
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(text) = parse_header(line) {
            // Inline markdown inside a header must not survive the first
            // pass, or a second pass would still change the output.
            out.push(rewrite_body_line(&text));
            continue;
        }
        out.push(rewrite_body_line(line));
    }
    if in_table {
        flush_table(&mut table_rows, &mut out);
    }
    out
}

/// A pipe-delimited run of only dashes, colons, and whitespace. Dropped
/// entirely; does not end the surrounding table.
fn is_table_separator(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty()
        && t.contains('|')
        && t.contains('-')
        && t.chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// A table row contains a pipe and splits on `|` into at least 3 segments.
/// Cells are trimmed with empties discarded; the list may come back empty.
fn parse_table_row(line: &str) -> Option<Vec<String>> {
    if !line.contains('|') {
        return None;
    }
    let segments: Vec<&str> = line.split('|').collect();
    if segments.len() < 3 {
        return None;
    }
    Some(
        segments
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect(),
    )
}

/// Reflow accumulated table rows as a bullet list, blank-line delimited:
/// `• a: b` for two cells, `• a - b - c` for more, `• a` for one.
/// Reflowed lines go through the body rule chain like any other line.
fn flush_table(rows: &mut Vec<Vec<String>>, out: &mut Vec<String>) {
    out.push(String::new());
    for cells in rows.drain(..) {
        let line = match cells.len() {
            0 => continue,
            1 => format!("• {}", cells[0]),
            2 => format!("• {}: {}", cells[0], cells[1]),
            _ => format!("• {}", cells.join(" - ")),
        };
        out.push(rewrite_body_line(&line));
    }
    out.push(String::new());
}

static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#{1,6}\s+(.*)$").expect("valid regex"));

/// Header lines lose their `#` run; trailing citation superscripts belong in
/// body text, not headers, and are stripped.
fn parse_header(line: &str) -> Option<String> {
    let caps = RE_HEADER.captures(line)?;
    let text = caps[1]
        .trim_end_matches(|c: char| citations::is_superscript_digit(c) || c.is_whitespace());
    Some(text.to_string())
}

static RE_DASH_CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-\s+(Citations?)\b").expect("valid regex"));
static RE_ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("valid regex"));
static RE_ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_]+)_").expect("valid regex"));
static RE_STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^~]+)~~").expect("valid regex"));
static RE_INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]*)`").expect("valid regex"));
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]*)\)").expect("valid regex"));
// Em/en dash runs count too: dash normalization runs later in the chain and
// must not mint a fresh horizontal rule out of its own output.
static RE_HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*—–]{3,}\s*$").expect("valid regex"));
static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));
static RE_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+").expect("valid regex"));
static RE_BULLET_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^•\s*(\d+)\s*-\s*(.*)$").expect("valid regex"));
static RE_TRAILING_SPACE_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\.$").expect("valid regex"));

/// The ordered body-line rules. Later rules assume earlier ones already ran;
/// unmatched syntax is left alone. Ordinal lines (`1. step`) pass through
/// untouched.
fn rewrite_body_line(line: &str) -> String {
    let s = RE_DASH_CITATION.replace_all(line, "—$1");
    let s = RE_ITALIC_STAR.replace_all(&s, "$1");
    let s = RE_ITALIC_UNDERSCORE.replace_all(&s, "$1");
    let s = RE_STRIKETHROUGH.replace_all(&s, "$1");
    let s = RE_INLINE_CODE.replace_all(&s, "$1");
    let s = RE_LINK.replace_all(&s, "$1");
    if RE_HORIZONTAL_RULE.is_match(&s) {
        return String::new();
    }
    let s = s.replace(['—', '–'], "-");
    let s = s.replace('|', " ");
    let s = RE_MULTI_SPACE.replace_all(&s, " ");
    let s = RE_BULLET.replace_all(&s, "• ");
    let s = RE_BULLET_ORDINAL.replace_all(&s, "$1. $2");
    let s = RE_TRAILING_SPACE_PERIOD.replace_all(&s, ".");
    s.into_owned()
}
