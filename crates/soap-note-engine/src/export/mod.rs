//! Plain-text exports of a clinical note.
//!
//! Exports work on the raw transcription and SOAP note, never on the parsed
//! sections, so nothing the parser drops can be lost from an export.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::ClinicalNote;

pub const BANNER: &str = "CLINICAL NOTE - SOAP FORMAT";
pub const RULE_WIDTH: usize = 60;

/// Text placed on the clipboard by the copy action.
pub fn clipboard_text(note: &ClinicalNote) -> String {
    format!(
        "TRANSCRIPTION:\n{}\n\nSOAP NOTE:\n{}",
        note.transcription, note.soap_note
    )
}

/// Contents of the downloadable text file.
pub fn download_text(note: &ClinicalNote) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{BANNER}\nGenerated: {}\n\n{rule}\n\nTRANSCRIPTION:\n{}\n\n{rule}\n\nSOAP NOTE:\n{}",
        generated_label(note),
        note.transcription,
        note.soap_note
    )
}

/// Human readable generation time; the raw timestamp when it can't be read.
pub fn generated_label(note: &ClinicalNote) -> String {
    note.generated_at()
        .map(|at| format_generated(&at))
        .unwrap_or_else(|| note.timestamp.clone())
}

/// Formats a time as `3/5/2024, 2:30:00 PM`.
pub fn format_generated<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// `clinical-note-<unix-ms>.txt`, stamped with the export time.
pub fn download_file_name(exported_at: DateTime<Utc>) -> String {
    format!("clinical-note-{}.txt", exported_at.timestamp_millis())
}
