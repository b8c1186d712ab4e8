//! Citation-marker rewriting: bracketed citation annotations become superscript digit runs.

use std::sync::LazyLock;

use regex::Regex;

/// Unicode superscript forms of the ASCII digits 0-9.
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// True for the superscript digit glyphs produced by the rewriter.
pub(crate) fn is_superscript_digit(c: char) -> bool {
    SUPERSCRIPT_DIGITS.contains(&c)
}

/// Render a run of ASCII digits as superscript glyphs, digit by digit (e.g. "16" -> "¹⁶").
/// Non-digit characters are passed through unchanged.
pub fn superscript_number(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => SUPERSCRIPT_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

static RE_INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Concatenated superscript forms of every integer in `s`, no separator.
fn superscripts_in(s: &str) -> String {
    RE_INTEGER
        .find_iter(s)
        .map(|m| superscript_number(m.as_str()))
        .collect()
}

// Recognized marker forms, one rule each, applied in priority order. Each rule
// is global and left-to-right; all are no-ops on already-rewritten text.

/// `[Citation: 16, Citation: 20]`
static RE_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*Citation:\s*\d+(?:\s*,\s*Citation:\s*\d+)+\s*\]").expect("valid regex")
});

/// `[Citation: 7]`
static RE_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*Citation:\s*(\d+)\s*\]").expect("valid regex"));

/// `[Citation: 1, 2]`
static RE_BARE_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*Citation:\s*\d+(?:\s*,\s*\d+)+\s*\]").expect("valid regex")
});

/// `【Citation: 9】`
static RE_FULLWIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【\s*Citation:\s*(\d+)\s*】").expect("valid regex"));

/// `【42†L1-L5】` — footnote style; only the leading integer survives.
static RE_FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【\s*(\d+)\s*†[^】]*】").expect("valid regex"));

/// Replace every recognized citation marker with its compact superscript form.
/// Surrounding text is preserved byte-for-byte; marker text without an
/// extractable integer is left unchanged.
pub fn rewrite_citations(text: &str) -> String {
    let out = RE_GROUP.replace_all(text, |caps: &regex::Captures<'_>| superscripts_in(&caps[0]));
    let out = RE_SINGLE.replace_all(&out, |caps: &regex::Captures<'_>| {
        superscript_number(&caps[1])
    });
    let out =
        RE_BARE_LIST.replace_all(&out, |caps: &regex::Captures<'_>| superscripts_in(&caps[0]));
    let out = RE_FULLWIDTH.replace_all(&out, |caps: &regex::Captures<'_>| {
        superscript_number(&caps[1])
    });
    let out = RE_FOOTNOTE.replace_all(&out, |caps: &regex::Captures<'_>| {
        superscript_number(&caps[1])
    });
    out.into_owned()
}
