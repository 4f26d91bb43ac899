//! End-to-end analysis of realistic campus queries.
//!
//! Each case runs the full preprocess -> classify -> extract pipeline
//! with a fixed reference day so day resolution stays deterministic.

use chrono::Weekday;

use campus_nlp::{IntentKind, QueryAnalyzer};

fn analyzer() -> QueryAnalyzer {
    QueryAnalyzer::with_defaults()
}

#[test]
fn timetable_query_with_department_and_relative_day() {
    let analysis = analyzer().analyze_on("What are tomorrow's classes for CSE?", Weekday::Mon);

    assert_eq!(analysis.intent, IntentKind::Timetable);
    assert_eq!(analysis.entities.department.as_deref(), Some("CSE"));
    assert_eq!(analysis.entities.day.as_deref(), Some("tuesday"));
}

#[test]
fn timetable_query_with_explicit_day() {
    let analysis = analyzer().analyze_on("show me the class schedule for friday", Weekday::Mon);

    assert_eq!(analysis.intent, IntentKind::Timetable);
    assert_eq!(analysis.entities.day.as_deref(), Some("friday"));
}

#[test]
fn exam_query_beats_timetable_on_shared_words() {
    // "when" is a timetable keyword, but the exam patterns dominate.
    let analysis = analyzer().analyze_on("When is the next exam?", Weekday::Wed);

    assert_eq!(analysis.intent, IntentKind::Exam);
    assert!(analysis.confidence > 0.0);
}

#[test]
fn department_query_extracts_the_department() {
    let analysis = analyzer().analyze_on("Who is the HOD of ECE?", Weekday::Tue);

    assert_eq!(analysis.intent, IntentKind::Department);
    assert_eq!(analysis.entities.department.as_deref(), Some("ECE"));
}

#[test]
fn department_aliases_resolve_to_codes() {
    let analysis = analyzer().analyze_on(
        "Tell me about the computer science department",
        Weekday::Tue,
    );

    assert_eq!(analysis.intent, IntentKind::Department);
    assert_eq!(analysis.entities.department.as_deref(), Some("CSE"));
}

#[test]
fn facility_query_extracts_the_facility() {
    let analysis = analyzer().analyze_on("Where is the library?", Weekday::Thu);

    assert_eq!(analysis.intent, IntentKind::Facility);
    assert_eq!(analysis.entities.facility.as_deref(), Some("library"));
}

#[test]
fn event_query_is_classified() {
    let analysis = analyzer().analyze_on("What are the upcoming events?", Weekday::Fri);

    assert_eq!(analysis.intent, IntentKind::Event);
}

#[test]
fn faq_query_is_classified() {
    let analysis = analyzer().analyze_on("How to apply for a bonafide certificate?", Weekday::Fri);

    assert_eq!(analysis.intent, IntentKind::Faq);
}

#[test]
fn greeting_and_farewell_are_recognized() {
    assert_eq!(
        analyzer().analyze_on("Hello, can you help me?", Weekday::Mon).intent,
        IntentKind::Greeting
    );
    assert_eq!(
        analyzer().analyze_on("thanks, bye!", Weekday::Mon).intent,
        IntentKind::Farewell
    );
}

#[test]
fn gibberish_is_unknown_with_zero_confidence() {
    let analysis = analyzer().analyze_on("quantum flux capacitor", Weekday::Mon);

    assert_eq!(analysis.intent, IntentKind::Unknown);
    assert!(analysis.confidence < f32::EPSILON);
    assert!(analysis.entities.department.is_none());
}

#[test]
fn cleaned_text_is_preserved_in_the_analysis() {
    let analysis = analyzer().analyze_on("  What are TODAY'S classes?!  ", Weekday::Mon);

    assert_eq!(analysis.raw, "  What are TODAY'S classes?!  ");
    assert_eq!(analysis.cleaned, "what are today's classes");
}
