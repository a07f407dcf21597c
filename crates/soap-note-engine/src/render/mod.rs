//! Renderers for formatted sections.
//!
//! Every renderer follows the same rule: one fragment per line, a line break
//! between consecutive fragments and none after the last. Sections with no
//! content are skipped entirely.

pub mod html;

pub use html::{html_note, html_section};

use crate::formatting::{FormattedContent, Fragment};

/// Calls `write` for each fragment, inserting `\n` between fragments.
pub(crate) fn join_fragments(
    content: &FormattedContent,
    out: &mut String,
    mut write: impl FnMut(Fragment<'_>, &mut String),
) {
    for (i, fragment) in content.fragments().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write(fragment, out);
    }
}

/// Renders a section as plain text without any emphasis.
pub fn plain_text(content: &FormattedContent) -> String {
    let mut out = String::with_capacity(content.as_str().len());
    join_fragments(content, &mut out, |fragment, out| match fragment {
        Fragment::Plain(text) => out.push_str(text),
        Fragment::Heading {
            prefix,
            label,
            rest,
        } => {
            out.push_str(prefix);
            out.push_str(label);
            out.push_str(rest);
        }
    });
    out
}
