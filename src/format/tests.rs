use super::{
    DisplayBlock, classify_blocks, format_response, format_response_blocks, normalize_markdown,
    rewrite_citations, superscript_number, wrap_formatted,
};

// ── citation rewriting ──────────────────────────────────────────────────────

#[test]
fn superscript_number_all_digits() {
    assert_eq!(superscript_number("0123456789"), "⁰¹²³⁴⁵⁶⁷⁸⁹");
}

#[test]
fn superscript_number_multi_digit_in_order() {
    assert_eq!(superscript_number("16"), "¹⁶");
}

#[test]
fn rewrite_citations_single() {
    assert_eq!(rewrite_citations("See [Citation: 7]."), "See ⁷.");
}

#[test]
fn rewrite_citations_group() {
    assert_eq!(rewrite_citations("[Citation: 16, Citation: 20]"), "¹⁶²⁰");
}

#[test]
fn rewrite_citations_group_pair() {
    assert_eq!(rewrite_citations("[Citation: 1, Citation: 23]"), "¹²³");
}

#[test]
fn rewrite_citations_bare_integer_list() {
    assert_eq!(rewrite_citations("[Citation: 1, 2]"), "¹²");
}

#[test]
fn rewrite_citations_fullwidth() {
    assert_eq!(rewrite_citations("【Citation: 9】"), "⁹");
}

#[test]
fn rewrite_citations_footnote_discards_label() {
    assert_eq!(rewrite_citations("【42†L1-L5】"), "⁴²");
}

#[test]
fn rewrite_citations_no_integer_left_unchanged() {
    assert_eq!(rewrite_citations("[Citation: none]"), "[Citation: none]");
}

#[test]
fn rewrite_citations_multiple_markers_left_to_right() {
    assert_eq!(
        rewrite_citations("a [Citation: 1] b [Citation: 2] c"),
        "a ¹ b ² c"
    );
}

#[test]
fn rewrite_citations_preserves_surrounding_text() {
    let raw = "  spacing [Citation: 3] and\npunctuation! ";
    assert_eq!(rewrite_citations(raw), "  spacing ³ and\npunctuation! ");
}

#[test]
fn rewrite_citations_idempotent() {
    let raw = "x [Citation: 5] y 【7†note】 z";
    let once = rewrite_citations(raw);
    assert_eq!(rewrite_citations(&once), once);
}

// ── markdown normalization ──────────────────────────────────────────────────

#[test]
fn normalize_strips_emphasis() {
    assert_eq!(
        normalize_markdown("**bold** and *italic* and _also italic_"),
        "bold and italic and also italic"
    );
}

#[test]
fn normalize_strips_header_markers() {
    assert_eq!(normalize_markdown("### Summary"), "Summary");
}

#[test]
fn normalize_strips_trailing_superscripts_from_headers() {
    assert_eq!(normalize_markdown("## Findings ¹²"), "Findings");
}

#[test]
fn normalize_keeps_superscripts_in_body() {
    assert_eq!(normalize_markdown("As shown ¹² above."), "As shown ¹² above.");
}

#[test]
fn normalize_bullet_markers() {
    assert_eq!(normalize_markdown("* first item"), "• first item");
    assert_eq!(normalize_markdown("- second item"), "• second item");
}

#[test]
fn normalize_preserves_ordinal_lines() {
    assert_eq!(normalize_markdown("1. first step"), "1. first step");
}

#[test]
fn normalize_numbered_bullet_becomes_ordinal() {
    assert_eq!(normalize_markdown("* 2 - Second phase"), "2. Second phase");
}

#[test]
fn normalize_table_reflow() {
    let input = "| Name | Age |\n|------|-----|\n| Alice | 30 |";
    assert_eq!(normalize_markdown(input), "• Name: Age\n• Alice: 30");
}

#[test]
fn normalize_table_blank_line_delimited() {
    let input = "Intro\n| A | B |\n| 1 | 2 |\nOutro";
    assert_eq!(normalize_markdown(input), "Intro\n\n• A: B\n• 1: 2\n\nOutro");
}

#[test]
fn normalize_table_single_cell_row() {
    assert_eq!(normalize_markdown("| only |"), "• only");
}

#[test]
fn normalize_table_wide_row_dash_joined() {
    assert_eq!(normalize_markdown("| a | b | c |"), "• a - b - c");
}

#[test]
fn normalize_table_numeric_first_cell_becomes_ordinal() {
    // Reflowed rows go back through the body rules, so a leading integer
    // cell is rewritten on the first pass, not the second.
    assert_eq!(normalize_markdown("| 1 | a | b |"), "1. a - b");
}

#[test]
fn normalize_separator_never_emitted() {
    let input = "| H |\n|---|\n| v |";
    assert_eq!(normalize_markdown(input), "• H\n• v");
}

#[test]
fn normalize_removes_code_fences_entirely() {
    let input = "before\n```rust\nlet x = 1;\n```\nafter";
    assert_eq!(normalize_markdown(input), "before\nafter");
}

#[test]
fn normalize_unwraps_inline_code() {
    assert_eq!(normalize_markdown("Use `println!` here"), "Use println! here");
}

#[test]
fn normalize_rewrites_links_to_text() {
    assert_eq!(
        normalize_markdown("See [docs](https://example.com) now"),
        "See docs now"
    );
}

#[test]
fn normalize_drops_horizontal_rules() {
    assert_eq!(normalize_markdown("para\n---\nmore"), "para\n\nmore");
    assert_eq!(normalize_markdown("para\n***\nmore"), "para\n\nmore");
}

#[test]
fn normalize_drops_star_rules_of_any_length() {
    // Rule lines must vanish as rules, not by losing star pairs to the bold
    // strip, so odd and even counts behave alike.
    assert_eq!(normalize_markdown("para\n****\nmore"), "para\n\nmore");
    assert_eq!(normalize_markdown("para\n*****\nmore"), "para\n\nmore");
    assert_eq!(normalize_markdown("para\n  ***  \nmore"), "para\n\nmore");
}

#[test]
fn normalize_dashes_to_hyphens() {
    assert_eq!(normalize_markdown("a — b – c"), "a - b - c");
}

#[test]
fn normalize_citation_dash_padding_collapsed() {
    assert_eq!(
        normalize_markdown("text - Citation 5 follows"),
        "text-Citation 5 follows"
    );
}

#[test]
fn normalize_stray_pipes_become_spaces() {
    assert_eq!(normalize_markdown("a | b"), "a b");
}

#[test]
fn normalize_collapses_space_runs() {
    assert_eq!(normalize_markdown("too    many   spaces"), "too many spaces");
}

#[test]
fn normalize_strikethrough() {
    assert_eq!(normalize_markdown("~~gone~~ kept"), "gone kept");
}

#[test]
fn normalize_trims_space_before_trailing_period() {
    assert_eq!(normalize_markdown("end of thought ."), "end of thought.");
}

#[test]
fn normalize_collapses_blank_runs() {
    assert_eq!(normalize_markdown("a\n\n\n\n\nb"), "a\n\nb");
}

#[test]
fn normalize_empty_input() {
    assert_eq!(normalize_markdown(""), "");
    assert_eq!(normalize_markdown("   \n  \n"), "");
}

#[test]
fn normalize_unmatched_syntax_left_alone() {
    assert_eq!(normalize_markdown("a single * star"), "a single * star");
    assert_eq!(normalize_markdown("lone ` backtick"), "lone ` backtick");
    assert_eq!(normalize_markdown("[not a link]"), "[not a link]");
}

#[test]
fn normalize_idempotent_on_rich_document() {
    let input = "# Title [ignored](url)\n\nIntro with **bold**, *italic*, `code`.\n\n| Name | Role |\n|------|------|\n| Ada | Lead |\n| 1 | a | b |\n\n* first\n- second\n* 3 - third\n\n```py\nx = 1 | 2\n```\n\n———\n\nDone — mostly .";
    let once = normalize_markdown(input);
    assert_eq!(normalize_markdown(&once), once);
}

#[test]
fn format_response_full_pipeline() {
    let raw = "## Results [Citation: 1]\n\nThe value **rose** [Citation: 2].";
    assert_eq!(format_response(raw), "Results\n\nThe value rose ².");
}

#[test]
fn format_response_idempotent() {
    let raw = "# H\n\n[Citation: 4] and | a | b | c |\n\n* item";
    let once = format_response(raw);
    assert_eq!(format_response(&once), once);
}

// ── display block classification ────────────────────────────────────────────

#[test]
fn classify_header_with_colon() {
    let blocks = classify_blocks("Overview:\nSome prose here.\nMore prose.");
    assert_eq!(
        blocks,
        vec![
            DisplayBlock::Header("Overview:".to_string()),
            DisplayBlock::Text("Some prose here. More prose.".to_string()),
        ]
    );
}

#[test]
fn classify_short_capitalized_line_is_header() {
    let blocks = classify_blocks("Key Findings");
    assert_eq!(blocks, vec![DisplayBlock::Header("Key Findings".to_string())]);
}

#[test]
fn classify_sentence_is_text() {
    let blocks = classify_blocks("This is a sentence.");
    assert_eq!(blocks, vec![DisplayBlock::Text("This is a sentence.".to_string())]);
}

#[test]
fn classify_long_line_is_not_header() {
    let line = format!("Word {}", "x".repeat(120));
    let blocks = classify_blocks(&line);
    assert_eq!(blocks, vec![DisplayBlock::Text(line.clone())]);
}

#[test]
fn classify_consecutive_bullets_merge() {
    let blocks = classify_blocks("• item one\n• item two");
    assert_eq!(
        blocks,
        vec![DisplayBlock::List("• item one\n• item two".to_string())]
    );
}

#[test]
fn classify_ordinals_are_list_items() {
    let blocks = classify_blocks("1. a\n2. b");
    assert_eq!(blocks, vec![DisplayBlock::List("1. a\n2. b".to_string())]);
}

#[test]
fn classify_blank_line_splits_paragraphs() {
    let blocks = classify_blocks("first part.\n\nsecond part.");
    assert_eq!(
        blocks,
        vec![
            DisplayBlock::Text("first part.".to_string()),
            DisplayBlock::Text("second part.".to_string()),
        ]
    );
}

#[test]
fn classify_list_interrupts_prose() {
    let blocks = classify_blocks("intro text\n• item\nafter text");
    assert_eq!(
        blocks,
        vec![
            DisplayBlock::Text("intro text".to_string()),
            DisplayBlock::List("• item".to_string()),
            DisplayBlock::Text("after text".to_string()),
        ]
    );
}

#[test]
fn classify_empty_input() {
    assert!(classify_blocks("").is_empty());
}

#[test]
fn format_response_blocks_end_to_end() {
    let raw = "## Summary\n\n| Name | Age |\n|---|---|\n| Alice | 30 |";
    let blocks = format_response_blocks(raw);
    assert_eq!(
        blocks,
        vec![
            DisplayBlock::Header("Summary".to_string()),
            DisplayBlock::List("• Name: Age\n• Alice: 30".to_string()),
        ]
    );
}

#[test]
fn display_block_serializes_with_type_tag() {
    let json = serde_json::to_value(DisplayBlock::Header("T".to_string())).unwrap();
    assert_eq!(json["type"], "header");
    assert_eq!(json["content"], "T");
}

// ── wrapping ────────────────────────────────────────────────────────────────

#[test]
fn wrap_formatted_preserves_newlines() {
    let lines = wrap_formatted("line1\nline2", 100);
    assert_eq!(lines, ["line1", "line2"]);
}

#[test]
fn wrap_formatted_wraps_long_line() {
    let lines = wrap_formatted("hello world test", 8);
    assert_eq!(lines, ["hello", "world", "test"]);
}

#[test]
fn wrap_formatted_keeps_empty_lines() {
    let lines = wrap_formatted("a\n\nb", 100);
    assert_eq!(lines, ["a", "", "b"]);
}

#[test]
fn wrap_formatted_zero_width_no_wrap() {
    let lines = wrap_formatted("a very long line that stays", 0);
    assert_eq!(lines, ["a very long line that stays"]);
}

#[test]
fn wrap_formatted_bullet_continuation_hangs() {
    let lines = wrap_formatted("• one two", 5);
    assert_eq!(lines, ["• one", "  two"]);
}

#[test]
fn wrap_formatted_ordinal_continuation_hangs() {
    let lines = wrap_formatted("1. first second", 10);
    assert_eq!(lines, ["1. first", "   second"]);
}

#[test]
fn wrap_formatted_prose_has_no_hanging_indent() {
    let lines = wrap_formatted("plain prose here", 6);
    assert_eq!(lines, ["plain", "prose", "here"]);
}
