//! Response formatting: citation rewriting, markdown normalization, block classification.
//!
//! The pipeline is pure (text in, text out) and deterministic: citation
//! markers become superscript digit runs, then markdown syntax is stripped or
//! reflowed into plain display text. A secondary pass classifies the result
//! into renderable blocks.

mod blocks;
mod citations;
mod normalize;
mod wrap;

pub use blocks::{DisplayBlock, classify_blocks};
pub use citations::{rewrite_citations, superscript_number};
pub use normalize::normalize_markdown;
pub use wrap::wrap_formatted;

/// Format a raw model response for display: rewrite citation markers, then
/// normalize markdown to plain text. Idempotent on its own output.
pub fn format_response(raw: &str) -> String {
    normalize_markdown(&rewrite_citations(raw))
}

/// Format a raw model response and classify it into display blocks.
pub fn format_response_blocks(raw: &str) -> Vec<DisplayBlock> {
    classify_blocks(&format_response(raw))
}

#[cfg(test)]
mod tests;
