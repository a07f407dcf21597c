pub mod export;
pub mod formatting;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use formatting::{FormattedContent, Fragment, Fragments, format_content};
pub use models::{
    ClinicalNote, FormattedSection, NoteError, SectionKind, SoapSegments, StructuredNote,
    structure_note,
};
pub use parsing::{HeaderConvention, detect_convention, parse_note};
