use crate::export;
use crate::models::{ClinicalNote, NoteError};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Payload(#[from] NoteError),
    #[error("Invalid export directory: {0}")]
    InvalidExportDir(String),
}

/// Read a saved service response and parse it as a clinical note
pub fn read_payload(path: &Path) -> Result<ClinicalNote, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let body = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(ClinicalNote::from_json(&body)?)
}

/// Write the download export of `note` into `export_dir`, returning the file path
pub fn write_export(
    export_dir: &Path,
    note: &ClinicalNote,
    exported_at: DateTime<Utc>,
) -> Result<PathBuf, IoError> {
    validate_export_dir(export_dir)?;

    let path = export_dir.join(export::download_file_name(exported_at));
    fs::write(&path, export::download_text(note)).map_err(IoError::Io)?;
    log::info!("Wrote clinical note export to {}", path.display());
    Ok(path)
}

pub fn validate_export_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidExportDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
