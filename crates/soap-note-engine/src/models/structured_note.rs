use crate::formatting::{FormattedContent, format_content};
use crate::parsing::parse_note;

use super::sections::{SectionKind, SoapSegments};

/// One displayable SOAP section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSection {
    pub kind: SectionKind,
    pub content: FormattedContent,
}

/// Everything a rendering layer needs for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredNote {
    /// Passed through untouched.
    pub transcription: String,
    pub segments: SoapSegments,
    /// Sections with something to render, in canonical order.
    pub sections: Vec<FormattedSection>,
}

impl StructuredNote {
    pub fn section(&self, kind: SectionKind) -> Option<&FormattedSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}

/// Parses `soap_note` into segments and formats each non-empty one.
pub fn structure_note(soap_note: &str, transcription: &str) -> StructuredNote {
    let segments = parse_note(soap_note);
    let sections = segments
        .non_empty()
        .map(|(kind, text)| FormattedSection {
            kind,
            content: format_content(text),
        })
        .filter(|section| !section.content.is_empty())
        .collect();

    StructuredNote {
        transcription: transcription.to_string(),
        segments,
        sections,
    }
}
