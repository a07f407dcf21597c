//! Behavioural tests for section parsing across the three header conventions.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::SoapSegments;
use crate::parsing::{HeaderConvention, detect_convention, parse_note};

fn segments(subjective: &str, objective: &str, assessment: &str, plan: &str) -> SoapSegments {
    SoapSegments {
        subjective: subjective.to_string(),
        objective: objective.to_string(),
        assessment: assessment.to_string(),
        plan: plan.to_string(),
    }
}

// Full-word convention

#[test]
fn full_word_headers_split_into_four_sections() {
    let note = "SUBJECTIVE: headache for 3 days\nOBJECTIVE: BP 120/80\nASSESSMENT: tension headache\nPLAN: ibuprofen";

    assert_eq!(
        parse_note(note),
        segments(
            "headache for 3 days",
            "BP 120/80",
            "tension headache",
            "ibuprofen"
        )
    );
}

#[test]
fn missing_headers_leave_only_their_own_field_empty() {
    assert_eq!(
        parse_note("SUBJECTIVE: foo\nPLAN: bar"),
        segments("foo", "", "", "bar")
    );
}

#[test]
fn headers_are_case_insensitive() {
    let note = "Subjective: a\nobjective: b\nAssessment: c\nplan: d";

    assert_eq!(parse_note(note), segments("a", "b", "c", "d"));
}

#[test]
fn headers_may_appear_in_any_order() {
    let note = "PLAN: p\nASSESSMENT: a\nSUBJECTIVE: s";

    assert_eq!(parse_note(note), segments("s", "", "a", "p"));
}

#[test]
fn section_bodies_are_trimmed() {
    let note = "SUBJECTIVE:\n\n   cough   \n\nOBJECTIVE:\n\n";

    assert_eq!(parse_note(note), segments("cough", "", "", ""));
}

#[rstest]
#[case("SUBJECTIVE: fever\nOBJECTIVE: temp 38.5", "temp 38.5")]
#[case("subjective: fever ASSESSMENT: viral", "viral")]
#[case("Intro line\nSUBJECTIVE: fever\nPLAN: fluids\nmore plan", "fluids")]
fn subjective_excludes_marker_and_following_sections(#[case] note: &str, #[case] later: &str) {
    let subjective = parse_note(note).subjective;

    assert_eq!(subjective, "fever");
    assert!(!subjective.to_lowercase().contains("subjective:"));
    assert!(!subjective.contains(later));
}

#[test]
fn full_word_takes_priority_over_leading_abbreviation() {
    let note = "S: short form\nSUBJECTIVE: long form\nOBJECTIVE: exam normal";

    assert_eq!(detect_convention(note), HeaderConvention::FullWord);
    assert_eq!(
        parse_note(note),
        segments("long form", "exam normal", "", "")
    );
}

// Abbreviated convention

#[test]
fn abbreviated_headers_split_into_four_sections() {
    let note = "S: patient reports fatigue\nO: BP 120/80\nA: likely viral\nP: rest and fluids";

    assert_eq!(detect_convention(note), HeaderConvention::Abbreviated);
    assert_eq!(
        parse_note(note),
        segments(
            "patient reports fatigue",
            "BP 120/80",
            "likely viral",
            "rest and fluids"
        )
    );
}

#[test]
fn abbreviated_headers_on_one_line() {
    assert_eq!(
        parse_note("s: a o: b a: c p: d"),
        segments("a", "b", "c", "d")
    );
}

#[test]
fn abbreviated_may_follow_leading_whitespace() {
    assert_eq!(
        parse_note("\n\n  S: cough\nP: rest"),
        segments("cough", "", "", "rest")
    );
}

#[test]
fn abbreviated_letter_inside_a_word_is_taken_literally() {
    // "p:" ending "Temp:" is the first plan marker
    let note = "S: cough\nO: Temp: 38.2\nA: flu\nP: rest";

    assert_eq!(
        parse_note(note),
        segments("cough", "Tem", "flu", "38.2")
    );
}

#[test]
fn abbreviated_first_occurrence_wins_even_mid_sentence() {
    // "A:" inside prose is taken as the assessment header
    let note = "S: seen in A: and E last week\nO: afebrile";

    assert_eq!(
        parse_note(note),
        segments("seen in", "afebrile", "and E last week", "")
    );
}

// Unstructured fallback

#[rstest]
#[case("")]
#[case("Patient seen today for follow up.")]
#[case("  leading and trailing whitespace kept  \n")]
#[case("Vitals stable. O: not a header because the note does not open with S:")]
#[case("SUBJECTIVE without a colon")]
fn notes_without_headers_go_to_subjective_untouched(#[case] note: &str) {
    assert_eq!(detect_convention(note), HeaderConvention::Unstructured);
    assert_eq!(parse_note(note), segments(note, "", "", ""));
}

#[test]
fn conventions_are_tried_in_priority_order() {
    assert_eq!(
        HeaderConvention::PRIORITY,
        [
            HeaderConvention::FullWord,
            HeaderConvention::Abbreviated,
            HeaderConvention::Unstructured,
        ]
    );
    assert!(HeaderConvention::Unstructured.matches(""));
}
