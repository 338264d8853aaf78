//! Documentation comment normalization and rendering.
//!
//! Descriptions arrive as fragments of DocBook markup.  [`cleanup_comment`]
//! turns a fragment into comment-ready plain text and [`render_comment`]
//! wraps it (together with `@param`/`@return`/... annotation lines) into a
//! `/** ... **/` block.  Both are pure functions.

use std::sync::LazyLock;

use regex::Regex;

/// Wrap column for the primary description text.
pub const PRIMARY_WRAP: usize = 70;
/// Wrap column for annotation lines, which get two extra indent columns
/// on continuation lines.
pub const ANNOTATION_WRAP: usize = 68;

static LINK_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<function>(.+?)</function>").unwrap());
static LINK_PARAMETER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<parameter>(.+?)</parameter>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#x[0-9A-Fa-f]+|#[0-9]+|amp|lt|gt|quot|apos|nbsp);").unwrap());
static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new("  +").unwrap());
static EDGE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^ | $").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapse a markup fragment into comment-ready plain text.
///
/// - `<function>x</function>` / `<parameter>x</parameter>` pairs become
///   `{@link x}` inline link markers.
/// - All remaining tags are stripped and entities decoded.
/// - A literal `*/` is escaped so it cannot terminate the generated
///   comment block.
/// - Single interior newlines collapse to spaces, runs of spaces to one
///   space, and three or more consecutive newlines to one blank line.
pub fn cleanup_comment(text: &str) -> String {
    let text = LINK_FUNCTION.replace_all(text, "{@link $1}");
    let text = LINK_PARAMETER.replace_all(&text, "{@link $1}");
    let text = TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = text.replace("*/", "* /");
    let text = collapse_single_newlines(&text);
    let text = MULTI_SPACE.replace_all(&text, " ");
    let text = EDGE_SPACE.replace_all(&text, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Greedy word wrap at `width` columns.  Words longer than the width are
/// kept whole on their own line; existing newlines are preserved and
/// reset the column count.
pub fn word_wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let mut current = String::new();
        for word in line.split(' ') {
            if current.is_empty() {
                current.push_str(word);
            } else if current.len() + 1 + word.len() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }
    lines.join("\n")
}

/// Render a documentation block for `text` plus annotation lines (`more`).
///
/// Returns an empty string when the cleaned text and the annotations are
/// both empty, so callers emit no comment at all in that case.
pub fn render_comment(text: &str, more: &[String], indent: &str) -> String {
    let mut comment = cleanup_comment(text);
    if comment.is_empty() && more.is_empty() {
        return String::new();
    }
    comment = word_wrap(&comment, PRIMARY_WRAP);
    if !more.is_empty() {
        if !comment.is_empty() {
            comment.push_str("\n\n");
        }
        for line in more {
            let wrapped = word_wrap(&cleanup_comment(line), ANNOTATION_WRAP);
            comment.push_str(&wrapped.replace('\n', "\n  "));
            comment.push('\n');
        }
    }
    let body = comment.trim_end();

    let mut out = String::new();
    out.push_str(indent);
    out.push_str("/**\n");
    for line in body.split('\n') {
        out.push_str(indent);
        out.push_str(" * ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(indent);
    out.push_str(" **/\n");
    out
}

/// Decode the entity references that can survive the pre-parse stripping
/// pass (`&amp;` `&lt;` `&gt;` plus quote and numeric forms).
fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &regex::Captures| match &caps[1] {
            "amp" => "&".to_string(),
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            "nbsp" => " ".to_string(),
            code => decode_numeric(code).unwrap_or_else(|| caps[0].to_string()),
        })
        .into_owned()
}

fn decode_numeric(code: &str) -> Option<String> {
    let value = if let Some(hex) = code.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        code.strip_prefix('#')?.parse::<u32>().ok()?
    };
    char::from_u32(value).map(String::from)
}

/// Collapse interior single newlines (those with a non-newline character
/// on both sides) into spaces, leaving blank-line paragraph breaks alone.
fn collapse_single_newlines(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch == '\n'
            && i > 0
            && bytes[i - 1] != b'\n'
            && bytes.get(i + 1).is_some_and(|&b| b != b'\n')
        {
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}
