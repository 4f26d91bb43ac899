#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Turns a classified query plus data records into a textual answer.
//!
//! Every intent has a formatting path; missing records come back as a
//! "no information" sentence rather than an error, and unknown intents
//! fall back to the FAQ bank before the generic responses.

use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{NaiveDate, Weekday};
use tracing::debug;

use campus_core::calendar::{parse_weekday, weekday_name};
use campus_data::{DataStore, FacilityRef};
use campus_nlp::{IntentKind, QueryAnalysis};

mod format;

use format::capitalize;

const GREETINGS: [&str; 3] = [
    "Hello! I'm your campus assistant. How can I help you today?",
    "Hi there! What would you like to know about the campus?",
    "Good day! Ask me about classes, exams, departments or facilities.",
];

const FAREWELLS: [&str; 3] = [
    "Goodbye! Have a great day!",
    "Thanks for stopping by. Bye!",
    "Take care! Ask me again anytime.",
];

const FALLBACKS: [&str; 3] = [
    "I'm sorry, I didn't quite understand that. Could you rephrase?",
    "I'm not sure what you're asking. Try classes, exams, departments or facilities.",
    "Could you be more specific? I can help with timetables, exams, department info and campus facilities.",
];

/// Generates answers for classified queries.
///
/// The greeting, farewell and fallback phrases rotate so repeated queries
/// don't sound canned; the counter is the only state this type carries.
pub struct ResponseGenerator {
    data: Arc<DataStore>,
    rotation: AtomicUsize,
}

impl ResponseGenerator {
    #[must_use]
    pub const fn new(data: Arc<DataStore>) -> Self {
        Self {
            data,
            rotation: AtomicUsize::new(0),
        }
    }

    /// Generate an answer, resolving calendar defaults from the local clock.
    #[must_use]
    pub fn generate(&self, analysis: &QueryAnalysis) -> String {
        self.generate_on(
            analysis,
            campus_core::calendar::today(),
            campus_core::calendar::tomorrow_date(),
        )
    }

    /// Generate an answer with explicit calendar references, for
    /// deterministic tests.
    #[must_use]
    pub fn generate_on(
        &self,
        analysis: &QueryAnalysis,
        today: Weekday,
        tomorrow: NaiveDate,
    ) -> String {
        debug!("Generating response for intent: {}", analysis.intent.as_str());

        match analysis.intent {
            IntentKind::Greeting => self.rotate(&GREETINGS),
            IntentKind::Farewell => self.rotate(&FAREWELLS),
            IntentKind::Timetable => self.timetable_answer(analysis, today),
            IntentKind::Exam => self.exam_answer(analysis, tomorrow),
            IntentKind::Department => self.department_answer(analysis),
            IntentKind::Facility => self.facility_answer(analysis),
            IntentKind::Event => self.event_answer(),
            IntentKind::Faq => self.faq_answer(&analysis.cleaned),
            IntentKind::Unknown => self.fallback_answer(&analysis.cleaned),
        }
    }

    /// Help text listing the kinds of questions the assistant understands.
    #[must_use]
    pub const fn help_message() -> &'static str {
        "You can ask me about:\n\
         \n\
         Timetable: \"What are today's classes?\", \"CSE schedule for Monday\"\n\
         Exams: \"What is the exam schedule?\", \"Tomorrow's exams for ECE\"\n\
         Departments: \"Tell me about the CSE department\", \"Who is the HOD of ECE?\"\n\
         Facilities: \"Library timings\", \"Hostel information\", \"Bus routes\"\n\
         Events: \"Upcoming events\", \"When is the next fest?\"\n\
         General: \"How to apply for leave?\", \"Attendance requirements\"\n\
         \n\
         Say 'quit' or 'exit' to stop."
    }

    fn rotate(&self, phrases: &[&'static str]) -> String {
        let n = self.rotation.fetch_add(1, Ordering::Relaxed);
        phrases[n % phrases.len()].to_string()
    }

    fn timetable_answer(&self, analysis: &QueryAnalysis, today: Weekday) -> String {
        let day = analysis
            .entities
            .day
            .as_deref()
            .and_then(parse_weekday)
            .unwrap_or(today);

        let Some(schedules) = self.data.timetable_for(day) else {
            if day == Weekday::Sun {
                return "Sunday is a holiday. No classes scheduled.".to_string();
            }
            return format!("No timetable available for {}.", capitalize(weekday_name(day)));
        };

        if let Some(dept) = analysis.entities.department.as_deref() {
            return self.data.classes_for(day, dept).map_or_else(
                || {
                    format!(
                        "No schedule found for {dept} department on {}.",
                        capitalize(weekday_name(day))
                    )
                },
                |classes| {
                    let mut out = format!("{dept} schedule for {}:\n", capitalize(weekday_name(day)));
                    for class in classes {
                        let _ = writeln!(
                            out,
                            "  {}  {} (room {}, {})",
                            class.time, class.subject, class.room, class.faculty
                        );
                    }
                    out.trim_end().to_string()
                },
            );
        }

        let mut out = format!("Timetable for {}:\n", capitalize(weekday_name(day)));
        for (dept, classes) in schedules {
            let _ = writeln!(out, "{dept}:");
            for class in classes {
                let _ = writeln!(out, "  {}  {} ({})", class.time, class.subject, class.room);
            }
        }
        out.trim_end().to_string()
    }

    fn exam_answer(&self, analysis: &QueryAnalysis, tomorrow: NaiveDate) -> String {
        let dept = analysis.entities.department.as_deref();

        if analysis.cleaned.contains("tomorrow") {
            return self.tomorrow_exam_answer(dept, tomorrow);
        }

        if let Some(dept) = dept {
            return self.data.exams_for(dept).map_or_else(
                || format!("No exam schedule found for {dept} department."),
                |exams| {
                    let mut out = format!("Upcoming exams for {dept}:\n");
                    for exam in exams {
                        let _ = writeln!(
                            out,
                            "  {}: {} ({}) at {}, room {} [{}]",
                            exam.date, exam.subject, exam.day, exam.time, exam.room, exam.kind
                        );
                    }
                    out.trim_end().to_string()
                },
            );
        }

        let all = self.data.all_exams();
        if all.is_empty() {
            return "Sorry, the exam schedule is not available.".to_string();
        }

        let mut out = String::from("Upcoming examination schedule:\n");
        for (dept, exams) in all {
            let _ = writeln!(out, "{dept}:");
            for exam in exams.iter().take(3) {
                let _ = writeln!(out, "  {}  {} ({})", exam.date, exam.subject, exam.time);
            }
        }
        let rules = self.data.exam_rules();
        if !rules.is_empty() {
            let _ = writeln!(out, "Important rules:");
            for rule in rules.iter().take(3) {
                let _ = writeln!(out, "  - {rule}");
            }
        }
        out.trim_end().to_string()
    }

    fn tomorrow_exam_answer(&self, dept: Option<&str>, tomorrow: NaiveDate) -> String {
        let hits: Vec<_> = self
            .data
            .exams_on(tomorrow)
            .into_iter()
            .filter(|(d, _)| dept.is_none_or(|want| d.eq_ignore_ascii_case(want)))
            .collect();

        if hits.is_empty() {
            return "No exams scheduled for tomorrow.".to_string();
        }

        let mut out = String::from("Tomorrow's exams:\n");
        for (dept, exam) in hits {
            let _ = writeln!(
                out,
                "  {dept}: {} at {}, room {}",
                exam.subject, exam.time, exam.room
            );
        }
        out.trim_end().to_string()
    }

    fn department_answer(&self, analysis: &QueryAnalysis) -> String {
        if let Some(code) = analysis.entities.department.as_deref() {
            return self.data.department(code).map_or_else(
                || {
                    let known: Vec<_> = self.data.departments().keys().cloned().collect();
                    if known.is_empty() {
                        "Sorry, department information is not available.".to_string()
                    } else {
                        format!("Department '{code}' not found. Available: {}", known.join(", "))
                    }
                },
                |record| format::department_profile(code, record),
            );
        }

        // Contact questions without a department go to the campus contacts.
        if analysis.cleaned.contains("contact") || analysis.cleaned.contains("phone") {
            let contacts = self.data.important_contacts();
            if !contacts.is_empty() {
                let mut out = String::from("Important contacts:\n");
                for (name, number) in contacts {
                    let _ = writeln!(out, "  {}: {number}", format::title_case(name));
                }
                return out.trim_end().to_string();
            }
        }

        let departments = self.data.departments();
        if departments.is_empty() {
            return "Sorry, department information is not available.".to_string();
        }

        let mut out = String::from("Departments:\n");
        for (code, record) in departments {
            let _ = writeln!(
                out,
                "  {code}: {} (HOD: {}, office: {})",
                record.full_name, record.hod, record.office
            );
        }
        out.trim_end().to_string()
    }

    fn facility_answer(&self, analysis: &QueryAnalysis) -> String {
        let Some(name) = analysis.entities.facility.as_deref() else {
            return "Campus facilities: library, canteen, hostel, sports, medical center \
                    and transport. Ask about one of them for details."
                .to_string();
        };

        self.data.facility(name).map_or_else(
            || format!("Information about '{name}' is not available."),
            |facility| match facility {
                FacilityRef::Library(lib) => format::library(lib),
                FacilityRef::Canteens(canteens) => format::canteens(canteens),
                FacilityRef::Hostel(hostel) => format::hostel(hostel),
                FacilityRef::Sports(sports) => format::sports(sports),
                FacilityRef::Medical(medical) => format::medical(medical),
                FacilityRef::Transport(transport) => format::transport(transport),
            },
        )
    }

    fn event_answer(&self) -> String {
        let events = self.data.events();
        if events.is_empty() {
            return "No upcoming events scheduled.".to_string();
        }

        let mut out = String::from("Upcoming events:\n");
        for event in events {
            let _ = writeln!(
                out,
                "  {} on {} at {}: {}",
                event.name, event.date, event.venue, event.description
            );
        }
        out.trim_end().to_string()
    }

    fn faq_answer(&self, cleaned: &str) -> String {
        self.data.best_faq(cleaned).map_or_else(
            || {
                "I couldn't find specific information about that. \
                 Please contact the respective office for details."
                    .to_string()
            },
            |faq| format!("{}\n{}", faq.question, faq.answer),
        )
    }

    fn fallback_answer(&self, cleaned: &str) -> String {
        // An unmatched query may still be answerable from the FAQ bank.
        if let Some(faq) = self.data.best_faq(cleaned) {
            return format!("{}\n{}", faq.question, faq.answer);
        }
        self.rotate(&FALLBACKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_nlp::QueryAnalyzer;

    fn analysis(text: &str) -> QueryAnalysis {
        QueryAnalyzer::with_defaults().analyze_on(text, Weekday::Fri)
    }

    fn generator() -> ResponseGenerator {
        ResponseGenerator::new(Arc::new(DataStore::empty()))
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_input_gets_a_fallback_not_an_error() {
        let generator = generator();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 24).expect("valid date");
        let answer = generator.generate_on(&analysis(""), Weekday::Fri, tomorrow);
        assert!(FALLBACKS.contains(&answer.as_str()));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn greetings_rotate() {
        let generator = generator();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 24).expect("valid date");
        let first = generator.generate_on(&analysis("hello"), Weekday::Fri, tomorrow);
        let second = generator.generate_on(&analysis("hello"), Weekday::Fri, tomorrow);
        assert_ne!(first, second);
        assert!(GREETINGS.contains(&first.as_str()));
        assert!(GREETINGS.contains(&second.as_str()));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn sunday_reports_the_holiday() {
        let generator = generator();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 24).expect("valid date");
        let answer = generator.generate_on(&analysis("sunday classes"), Weekday::Fri, tomorrow);
        assert!(answer.contains("holiday"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_data_is_no_information_not_a_failure() {
        let generator = generator();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 24).expect("valid date");
        let answer =
            generator.generate_on(&analysis("where is the library"), Weekday::Fri, tomorrow);
        assert!(answer.contains("not available"));
    }
}
