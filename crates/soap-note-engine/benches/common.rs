// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_full_word_note(items_per_section: usize) -> String {
    let mut note = String::new();
    for header in ["SUBJECTIVE", "OBJECTIVE", "ASSESSMENT", "PLAN"] {
        note.push_str(&format!("{header}:\n"));
        note.push_str(&generate_section_body(items_per_section));
        note.push_str("\n\n");
    }
    note
}

#[allow(dead_code)]
pub fn generate_abbreviated_note(items_per_section: usize) -> String {
    let mut note = String::new();
    for header in ["S", "O", "A", "P"] {
        note.push_str(&format!("{header}: "));
        note.push_str(&generate_section_body(items_per_section));
        note.push('\n');
    }
    note
}

#[allow(dead_code)]
fn generate_section_body(items: usize) -> String {
    let mut body = String::from("Chief Complaint: headache for 3 days");
    for item in 0..items {
        body.push_str(&format!(" - finding number {item} with some detail"));
    }
    body.push_str("\n1. Diagnosis: tension-type headache\nFollow up in two weeks.");
    body
}
