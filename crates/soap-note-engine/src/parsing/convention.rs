use crate::models::{SectionKind, SoapSegments};

use super::headers::{ABBREVIATED, ABBREVIATED_OPENING, FULL_WORD};

/// The header style a note was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderConvention {
    /// `SUBJECTIVE:` ... `PLAN:`
    FullWord,
    /// `S:` ... `P:`
    Abbreviated,
    /// No recognizable headers.
    Unstructured,
}

impl HeaderConvention {
    /// Detection order. The first convention whose [`matches`](Self::matches)
    /// holds is used; `Unstructured` matches everything and comes last.
    pub const PRIORITY: [HeaderConvention; 3] = [
        HeaderConvention::FullWord,
        HeaderConvention::Abbreviated,
        HeaderConvention::Unstructured,
    ];

    pub fn matches(self, note: &str) -> bool {
        match self {
            HeaderConvention::FullWord => {
                FULL_WORD.marker(SectionKind::Subjective).is_match(note)
            }
            HeaderConvention::Abbreviated => ABBREVIATED_OPENING.is_match(note),
            HeaderConvention::Unstructured => true,
        }
    }

    pub fn extract(self, note: &str) -> SoapSegments {
        match self {
            HeaderConvention::FullWord => FULL_WORD.split(note),
            HeaderConvention::Abbreviated => ABBREVIATED.split(note),
            HeaderConvention::Unstructured => SoapSegments::unstructured(note),
        }
    }

    pub fn detect(note: &str) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|convention| convention.matches(note))
            .unwrap_or(HeaderConvention::Unstructured)
    }
}
