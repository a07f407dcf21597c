use std::sync::LazyLock;

use regex::Regex;

/// Marker that starts every normalized list item.
pub const BULLET: &str = "• ";

/// A hyphen with whitespace on both sides separates list items.
static DASH_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-\s+").expect("delimiter pattern is valid"));

static LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*•\s*").expect("leading bullet pattern is valid"));

/// Lines that already start a list item, bulleted or numbered.
static LIST_ITEM_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(•|\d+\.\s)").expect("list item pattern is valid"));

/// Rewrites dash-separated clauses into one bulleted line each.
///
/// `"take ibuprofen - rest"` becomes `"• take ibuprofen\n• rest"`. A dash that
/// already opens a line (`"Meds:\n- ibuprofen"`) becomes a bullet without
/// touching the line before it. A leading bullet is normalized to exactly
/// [`BULLET`] and the result is trimmed.
pub fn normalize_bullets(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + BULLET.len());
    let mut last = 0;

    for delimiter in DASH_DELIMITER.find_iter(text) {
        out.push_str(&text[last..delimiter.start()]);
        if !delimiter.as_str().contains('\n') {
            mark_current_line_as_item(&mut out);
        }
        out.push('\n');
        out.push_str(BULLET);
        last = delimiter.end();
    }
    out.push_str(&text[last..]);

    LEADING_BULLET.replace(&out, BULLET).trim().to_string()
}

/// Turns the last line of `out` into a bullet item unless it already is one.
fn mark_current_line_as_item(out: &mut String) {
    let line_start = out.rfind('\n').map_or(0, |i| i + 1);
    let line = &out[line_start..];
    if line.trim().is_empty() || LIST_ITEM_START.is_match(line) {
        return;
    }
    let indent = line.len() - line.trim_start().len();
    out.replace_range(line_start..line_start + indent, BULLET);
}
