use std::sync::LazyLock;

use regex::Regex;

use crate::models::{SectionKind, SoapSegments};

/// Compiled header markers for one header convention, one per section.
pub struct HeaderSet {
    markers: [Regex; 4],
}

/// `SUBJECTIVE:` / `OBJECTIVE:` / `ASSESSMENT:` / `PLAN:`, anywhere, any case.
pub static FULL_WORD: LazyLock<HeaderSet> = LazyLock::new(|| {
    HeaderSet::compile(|kind| format!("(?i){}", regex::escape(kind.full_header())))
});

/// `S:` / `O:` / `A:` / `P:`, anywhere, any case. Matching is literal, so a
/// letter and colon inside a word (`Temp:`) counts as a header too.
pub static ABBREVIATED: LazyLock<HeaderSet> = LazyLock::new(|| {
    HeaderSet::compile(|kind| format!("(?i){}", regex::escape(kind.short_header())))
});

/// A note in the abbreviated convention opens with `S:`.
pub static ABBREVIATED_OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*S:").expect("opening pattern is valid"));

impl HeaderSet {
    fn compile(pattern: impl Fn(SectionKind) -> String) -> Self {
        let markers = SectionKind::ALL
            .map(|kind| Regex::new(&pattern(kind)).expect("header patterns are valid"));
        Self { markers }
    }

    pub fn marker(&self, kind: SectionKind) -> &Regex {
        &self.markers[kind as usize]
    }

    /// Returns the text after `kind`'s first header, up to the nearest
    /// following header of any other section (or the end of the note).
    ///
    /// `None` when the note has no header for `kind`.
    pub fn section_text<'a>(&self, note: &'a str, kind: SectionKind) -> Option<&'a str> {
        let header = self.marker(kind).find(note)?;
        let start = header.end();
        let end = SectionKind::ALL
            .into_iter()
            .filter(|other| *other != kind)
            .filter_map(|other| self.marker(other).find_at(note, start))
            .map(|m| m.start())
            .min()
            .unwrap_or(note.len());
        Some(&note[start..end])
    }

    /// Splits `note` into trimmed segments. Each section is located by its own
    /// header, so missing or reordered headers only affect their own field.
    pub fn split(&self, note: &str) -> SoapSegments {
        let mut segments = SoapSegments::default();
        for kind in SectionKind::ALL {
            if let Some(text) = self.section_text(note, kind) {
                segments.set(kind, text.trim().to_string());
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_text_stops_at_nearest_other_header() {
        let note = "PLAN: b\nSUBJECTIVE: a\nASSESSMENT: c";

        assert_eq!(
            FULL_WORD.section_text(note, SectionKind::Subjective),
            Some(" a\n")
        );
        assert_eq!(FULL_WORD.section_text(note, SectionKind::Plan), Some(" b\n"));
        assert_eq!(FULL_WORD.section_text(note, SectionKind::Objective), None);
    }

    #[test]
    fn abbreviated_markers_match_inside_words() {
        let note = "S: BP: 120/80\nP: fluids";

        assert_eq!(
            ABBREVIATED.section_text(note, SectionKind::Subjective),
            Some(" B")
        );
        assert_eq!(
            ABBREVIATED.section_text(note, SectionKind::Plan),
            Some(" 120/80\nP: fluids")
        );
    }

    #[test]
    fn opening_allows_leading_whitespace() {
        assert!(ABBREVIATED_OPENING.is_match("\n  s: cough"));
        assert!(!ABBREVIATED_OPENING.is_match("notes: S: cough"));
    }
}
