//! # Section Parsing
//!
//! Splits a raw clinical note into its four SOAP sections.
//!
//! ## Conventions
//!
//! Upstream note generation does not stick to one header style, so the
//! parser tries each [`HeaderConvention`] in priority order:
//!
//! 1. **Full-word** headers (`SUBJECTIVE:`) anywhere in the note
//! 2. **Abbreviated** headers, when the note opens with `S:`
//! 3. **Unstructured**: the whole note becomes the subjective section
//!
//! Each section is located by its own header and runs until the nearest
//! header of another section, so headers may be missing or out of order.
//!
//! ## Modules
//!
//! - **`convention`**: `HeaderConvention` detection and extraction
//! - **`headers`**: compiled header markers and boundary search

pub mod convention;
pub mod headers;

#[cfg(test)]
mod tests;

pub use convention::HeaderConvention;

use crate::models::SoapSegments;

/// Parses a raw note into SOAP segments. Never fails.
pub fn parse_note(note: &str) -> SoapSegments {
    let convention = HeaderConvention::detect(note);
    let segments = convention.extract(note);
    log::debug!(
        "Parsed note ({} bytes) as {convention:?}: {} non-empty sections",
        note.len(),
        segments.non_empty().count()
    );
    segments
}

/// Reports which header convention [`parse_note`] would use for `note`.
pub fn detect_convention(note: &str) -> HeaderConvention {
    HeaderConvention::detect(note)
}
