pub mod clinical_note;
pub mod sections;
pub mod structured_note;

pub use clinical_note::{ClinicalNote, NoteError, parse_timestamp};
pub use sections::{SectionKind, SoapSegments};
pub use structured_note::{FormattedSection, StructuredNote, structure_note};
