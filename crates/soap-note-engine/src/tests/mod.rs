use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A service response in the full-word header convention.
pub const SAMPLE_PAYLOAD: &str = r#"{
    "transcription": "Doctor: What brings you in today?\nPatient: I've had a headache for three days.",
    "soap_note": "SUBJECTIVE:\nChief Complaint: headache for 3 days - worse in the morning - no nausea\n\nOBJECTIVE:\nBP: 120/80\nTemperature: 37.1C\n\nASSESSMENT:\n1. Diagnosis: tension-type headache\n\nPLAN:\nibuprofen 400mg - hydration - follow up in 2 weeks",
    "timestamp": "2024-03-05T14:30:00Z"
}"#;

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}
