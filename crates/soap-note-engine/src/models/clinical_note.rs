use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::structured_note::{StructuredNote, structure_note};

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Malformed clinical note payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// The payload returned by the note generation service for one recording.
///
/// All three fields are required; any extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalNote {
    /// Verbatim transcription, never processed.
    pub transcription: String,
    /// Raw SOAP note body fed to the section parser.
    pub soap_note: String,
    /// ISO-8601 generation time.
    pub timestamp: String,
}

impl ClinicalNote {
    /// Parses a JSON response body.
    pub fn from_json(body: &str) -> Result<Self, NoteError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The generation time in local time, if `timestamp` could be read.
    pub fn generated_at(&self) -> Option<DateTime<Local>> {
        parse_timestamp(&self.timestamp)
    }

    pub fn structure(&self) -> StructuredNote {
        structure_note(&self.soap_note, &self.transcription)
    }
}

/// Reads an RFC 3339 timestamp, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]` one
/// taken as local time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
}
