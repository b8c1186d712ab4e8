//! Display-block classification: group formatted lines into header, prose, and list blocks.

use serde::{Deserialize, Serialize};

/// A classified unit of formatted text, ready for rendering.
/// Serializes as `{"type": "header" | "text" | "list", "content": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum DisplayBlock {
    Header(String),
    Text(String),
    List(String),
}

/// Split formatted text into an ordered sequence of display blocks.
///
/// Blank lines end the current paragraph. Consecutive list items merge into a
/// single `List` block (newline-joined); prose lines sharing a paragraph merge
/// into a single `Text` block (space-joined).
pub fn classify_blocks(text: &str) -> Vec<DisplayBlock> {
    let mut blocks = Vec::new();
    let mut prose: Vec<&str> = Vec::new();
    let mut list: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_prose(&mut prose, &mut blocks);
            flush_list(&mut list, &mut blocks);
            continue;
        }
        if is_list_item(trimmed) {
            flush_prose(&mut prose, &mut blocks);
            list.push(trimmed);
            continue;
        }
        flush_list(&mut list, &mut blocks);
        if is_header_line(trimmed) {
            flush_prose(&mut prose, &mut blocks);
            blocks.push(DisplayBlock::Header(trimmed.to_string()));
            continue;
        }
        prose.push(trimmed);
    }
    flush_prose(&mut prose, &mut blocks);
    flush_list(&mut list, &mut blocks);
    blocks
}

fn flush_prose(prose: &mut Vec<&str>, blocks: &mut Vec<DisplayBlock>) {
    if !prose.is_empty() {
        blocks.push(DisplayBlock::Text(prose.join(" ")));
        prose.clear();
    }
}

fn flush_list(list: &mut Vec<&str>, blocks: &mut Vec<DisplayBlock>) {
    if !list.is_empty() {
        blocks.push(DisplayBlock::List(list.join("\n")));
        list.clear();
    }
}

/// Short capitalized line with no bullet, no ordinal, and no terminal
/// sentence punctuation (a trailing colon is allowed).
fn is_header_line(line: &str) -> bool {
    if line.chars().count() >= 100 {
        return false;
    }
    let starts_upper = line.chars().next().is_some_and(|c| c.is_uppercase());
    if !starts_upper || line.contains('•') || is_ordinal_start(line) {
        return false;
    }
    line.ends_with(':') || !line.ends_with(['.', '!', '?'])
}

fn is_list_item(line: &str) -> bool {
    line.starts_with('•') || is_ordinal_start(line)
}

/// "N. " or "N) " at line start.
fn is_ordinal_start(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    let rest = &line[digits..];
    rest.starts_with(". ") || rest.starts_with(") ")
}
