//! Unit tests for the comment normalizer: markup collapsing, escape
//! rules, wrapping and block rendering.

use phpdoc_stubgen::comment::{cleanup_comment, render_comment, word_wrap};

// ─── cleanup ────────────────────────────────────────────────────────

#[test]
fn function_tag_pair_becomes_link_marker() {
    let text = "Alias of <function>strlen</function> with extras";
    assert_eq!(cleanup_comment(text), "Alias of {@link strlen} with extras");
}

#[test]
fn parameter_tag_pair_becomes_link_marker() {
    let text = "See <parameter>haystack</parameter> below";
    assert_eq!(cleanup_comment(text), "See {@link haystack} below");
}

#[test]
fn remaining_tags_are_stripped_and_entities_decoded() {
    let text = "<para>a &lt; b &amp;&amp; b &gt; c</para>";
    assert_eq!(cleanup_comment(text), "a < b && b > c");
}

#[test]
fn numeric_entities_are_decoded() {
    assert_eq!(cleanup_comment("caf&#233; &#x41;"), "café A");
}

#[test]
fn comment_terminator_is_escaped() {
    let text = "evaluates */ inside";
    assert_eq!(cleanup_comment(text), "evaluates * / inside");
}

#[test]
fn single_newlines_collapse_to_spaces() {
    let text = "first line\nsecond line";
    assert_eq!(cleanup_comment(text), "first line second line");
}

#[test]
fn paragraph_breaks_survive() {
    let text = "first paragraph\n\nsecond paragraph";
    assert_eq!(cleanup_comment(text), "first paragraph\n\nsecond paragraph");
}

#[test]
fn three_or_more_blank_lines_collapse_to_one() {
    let text = "first\n\n\n\n\nsecond";
    assert_eq!(cleanup_comment(text), "first\n\nsecond");
}

#[test]
fn runs_of_spaces_collapse() {
    assert_eq!(cleanup_comment("too    many   spaces"), "too many spaces");
}

#[test]
fn empty_input_cleans_to_empty() {
    assert_eq!(cleanup_comment("  <para>\n</para> "), "");
}

// ─── wrapping ───────────────────────────────────────────────────────

#[test]
fn wrap_is_greedy_without_hyphenation() {
    let wrapped = word_wrap("aaa bbb ccc ddd", 7);
    assert_eq!(wrapped, "aaa bbb\nccc ddd");
}

#[test]
fn wrap_keeps_overlong_words_whole() {
    let wrapped = word_wrap("x abcdefghijklmnop y", 5);
    assert_eq!(wrapped, "x\nabcdefghijklmnop\ny");
}

#[test]
fn wrap_respects_existing_newlines() {
    let wrapped = word_wrap("aa bb\ncc dd", 20);
    assert_eq!(wrapped, "aa bb\ncc dd");
}

// ─── block rendering ────────────────────────────────────────────────

#[test]
fn empty_text_and_annotations_render_nothing() {
    assert_eq!(render_comment("", &[], ""), "");
    assert_eq!(render_comment("<para></para>", &[], "    "), "");
}

#[test]
fn annotations_alone_render_a_block() {
    let block = render_comment("", &["@deprecated".to_string()], "");
    assert_eq!(block, "/**\n * @deprecated\n **/\n");
}

#[test]
fn text_and_annotations_are_separated_by_a_blank_line() {
    let block = render_comment(
        "Does a thing.",
        &["@return int".to_string()],
        "    ",
    );
    let expected = "    /**\n     * Does a thing.\n     * \n     * @return int\n     **/\n";
    assert_eq!(block, expected);
}

#[test]
fn long_text_wraps_at_seventy_columns() {
    let text = "word ".repeat(30);
    let block = render_comment(&text, &[], "");
    for line in block.lines() {
        assert!(line.len() <= 73, "line too long: {line:?}");
    }
}

#[test]
fn terminator_inside_description_keeps_block_well_formed() {
    let block = render_comment("contains */ in text", &[], "");
    // Exactly one comment close, at the end.
    assert_eq!(block.matches("*/").count(), 1);
    assert!(block.ends_with(" **/\n"));
    assert!(block.contains("* /"));
}
