use serde::{Deserialize, Serialize};

/// One of the four SOAP sections, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Subjective,
        SectionKind::Objective,
        SectionKind::Assessment,
        SectionKind::Plan,
    ];

    /// Full-word header marker, e.g. `SUBJECTIVE:`
    pub fn full_header(self) -> &'static str {
        match self {
            SectionKind::Subjective => "SUBJECTIVE:",
            SectionKind::Objective => "OBJECTIVE:",
            SectionKind::Assessment => "ASSESSMENT:",
            SectionKind::Plan => "PLAN:",
        }
    }

    /// Abbreviated header marker, e.g. `S:`
    pub fn short_header(self) -> &'static str {
        match self {
            SectionKind::Subjective => "S:",
            SectionKind::Objective => "O:",
            SectionKind::Assessment => "A:",
            SectionKind::Plan => "P:",
        }
    }

    /// Single-letter badge shown next to the section title.
    pub fn badge(self) -> char {
        match self {
            SectionKind::Subjective => 'S',
            SectionKind::Objective => 'O',
            SectionKind::Assessment => 'A',
            SectionKind::Plan => 'P',
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Subjective => "Subjective - Patient History",
            SectionKind::Objective => "Objective - Clinical Findings",
            SectionKind::Assessment => "Assessment - Diagnosis & Analysis",
            SectionKind::Plan => "Plan - Treatment & Management",
        }
    }
}

/// The raw text of a note split into its four SOAP sections.
///
/// Any field may be empty. When the note carries no recognizable headers the
/// whole note lands in `subjective` and the other fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapSegments {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

impl SoapSegments {
    /// Segments for a note without headers: everything is subjective.
    pub fn unstructured(note: &str) -> Self {
        Self {
            subjective: note.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Subjective => &self.subjective,
            SectionKind::Objective => &self.objective,
            SectionKind::Assessment => &self.assessment,
            SectionKind::Plan => &self.plan,
        }
    }

    pub fn set(&mut self, kind: SectionKind, text: String) {
        match kind {
            SectionKind::Subjective => self.subjective = text,
            SectionKind::Objective => self.objective = text,
            SectionKind::Assessment => self.assessment = text,
            SectionKind::Plan => self.plan = text,
        }
    }

    /// Iterate over all four sections in canonical order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &str)> + '_ {
        SectionKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Iterate over the sections a renderer should display.
    pub fn non_empty(&self) -> impl Iterator<Item = (SectionKind, &str)> + '_ {
        self.iter().filter(|(_, text)| !text.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().next().is_none()
    }
}
