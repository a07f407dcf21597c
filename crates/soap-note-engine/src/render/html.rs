use html_escape::encode_text;

use crate::formatting::Fragment;
use crate::models::{FormattedSection, StructuredNote};

use super::join_fragments;

/// Renders one section: badge, title and its fragments, with heading labels
/// in `<strong>`. Content is meant for a `white-space: pre-wrap` container.
pub fn html_section(section: &FormattedSection) -> String {
    let kind = section.kind;
    let mut body = String::new();
    join_fragments(&section.content, &mut body, |fragment, out| match fragment {
        Fragment::Plain(text) => out.push_str(&encode_text(text)),
        Fragment::Heading {
            prefix,
            label,
            rest,
        } => {
            out.push_str(&encode_text(prefix));
            out.push_str("<strong>");
            out.push_str(&encode_text(label));
            out.push_str("</strong>");
            out.push_str(&encode_text(rest));
        }
    });

    format!(
        "<section class=\"soap-section soap-{badge}\">\n<header><span class=\"badge\">{badge}</span><h4>{title}</h4></header>\n<div class=\"content\">{body}</div>\n</section>\n",
        badge = kind.badge(),
        title = encode_text(kind.title()),
    )
}

/// Renders the transcription followed by every section that has content.
pub fn html_note(note: &StructuredNote) -> String {
    let mut out = format!(
        "<section class=\"transcription\">\n<h3>Transcription</h3>\n<div class=\"content\">{}</div>\n</section>\n",
        encode_text(&note.transcription)
    );
    for section in &note.sections {
        out.push_str(&html_section(section));
    }
    out
}
