//! Keyword and pattern based intent classification.
//!
//! Every intent is a rule with a keyword list and a set of regex patterns.
//! Keywords score 1, pattern hits score 2; the best-scoring rule wins and
//! confidence is the score normalized against the rule's maximum.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The category of user request a query was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum IntentKind {
    /// Class timetable questions: "what are today's classes"
    Timetable = 0,
    /// Examination schedule questions: "when is the next exam"
    Exam = 1,
    /// Department questions: "who is the hod of cse"
    Department = 2,
    /// Campus facility questions: "where is the library"
    Facility = 3,
    /// Event questions: "upcoming events"
    Event = 4,
    /// Procedural questions answered from the FAQ bank
    Faq = 5,
    /// Salutations and requests for help
    Greeting = 6,
    /// Goodbyes and session-ending phrases
    Farewell = 7,
    /// Nothing matched
    #[default]
    Unknown = 255,
}

impl IntentKind {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Timetable => "timetable",
            Self::Exam => "exam",
            Self::Department => "department",
            Self::Facility => "facility",
            Self::Event => "event",
            Self::Faq => "faq",
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Unknown => "unknown",
        }
    }

    /// Parse from string (alternate method to avoid conflict with `FromStr`).
    #[must_use]
    pub fn from_str_lowercase(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "timetable" => Self::Timetable,
            "exam" => Self::Exam,
            "department" => Self::Department,
            "facility" => Self::Facility,
            "event" => Self::Event,
            "faq" => Self::Faq,
            "greeting" => Self::Greeting,
            "farewell" => Self::Farewell,
            _ => Self::Unknown,
        }
    }
}

impl std::str::FromStr for IntentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_lowercase(s))
    }
}

/// Rule definition for one intent: keywords plus regex patterns.
///
/// Rules can be loaded from configuration; the built-in table covers the
/// campus domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRule {
    pub kind: IntentKind,
    /// Substrings matched against the cleaned query, 1 point each.
    pub keywords: Vec<String>,
    /// Regex patterns matched against the cleaned query, 2 points each.
    pub patterns: Vec<String>,
}

impl IntentRule {
    /// Create a rule from string slices.
    #[must_use]
    pub fn new(kind: IntentKind, keywords: &[&str], patterns: &[&str]) -> Self {
        Self {
            kind,
            keywords: keywords.iter().map(ToString::to_string).collect(),
            patterns: patterns.iter().map(ToString::to_string).collect(),
        }
    }

    /// Compile the regex patterns, rejecting the rule if any is invalid.
    pub(crate) fn compile(&self) -> Result<CompiledRule, regex::Error> {
        let regexes = self
            .patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledRule {
            kind: self.kind,
            keywords: self.keywords.clone(),
            regexes,
        })
    }
}

#[derive(Debug)]
pub(crate) struct CompiledRule {
    kind: IntentKind,
    keywords: Vec<String>,
    regexes: Vec<Regex>,
}

impl CompiledRule {
    /// Keyword hits score 1, pattern hits score 2.
    fn score(&self, cleaned: &str) -> u32 {
        let keyword_hits = self
            .keywords
            .iter()
            .filter(|kw| cleaned.contains(kw.as_str()))
            .count();
        let pattern_hits = self.regexes.iter().filter(|re| re.is_match(cleaned)).count();

        u32::try_from(keyword_hits + pattern_hits * 2).unwrap_or(u32::MAX)
    }

    /// The score a query matching every keyword and pattern would get.
    fn max_score(&self) -> u32 {
        u32::try_from(self.keywords.len() + self.regexes.len() * 2).unwrap_or(u32::MAX)
    }
}

/// Result of classifying one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub kind: IntentKind,
    pub score: u32,
    /// Score normalized to the winning rule's maximum, in `0.0..=1.0`.
    pub confidence: f32,
}

impl Classification {
    const fn unknown() -> Self {
        Self {
            kind: IntentKind::Unknown,
            score: 0,
            confidence: 0.0,
        }
    }
}

/// Intent classifier holding the compiled rule table.
///
/// Rules are scanned in declaration order and a later rule only replaces
/// the current best on a strictly greater score, so the earliest-declared
/// intent wins ties.
pub struct IntentClassifier {
    rules: Vec<CompiledRule>,
}

impl IntentClassifier {
    /// Build a classifier from rule definitions.
    ///
    /// # Errors
    /// Returns an error if any rule carries an invalid regex pattern.
    pub fn new(rules: Vec<IntentRule>) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(IntentRule::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Classifier with the built-in campus rule table.
    #[must_use]
    pub fn with_defaults() -> Self {
        // The built-in table is covered by tests, so compilation cannot fail.
        Self::new(default_rules()).unwrap_or(Self { rules: Vec::new() })
    }

    /// Classify preprocessed query text.
    ///
    /// Empty input and zero-score queries come back as [`IntentKind::Unknown`]
    /// with confidence 0.
    #[must_use]
    pub fn classify(&self, cleaned: &str) -> Classification {
        if cleaned.trim().is_empty() {
            return Classification::unknown();
        }

        let mut best: Option<(&CompiledRule, u32)> = None;
        for rule in &self.rules {
            let score = rule.score(cleaned);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((rule, score));
            }
        }

        best.map_or_else(Classification::unknown, |(rule, score)| {
            #[allow(clippy::cast_precision_loss)]
            let confidence = (score as f32 / rule.max_score() as f32).min(1.0);
            Classification {
                kind: rule.kind,
                score,
                confidence,
            }
        })
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// The built-in rule table for the campus domain.
///
/// Declaration order doubles as the tie-break order.
#[must_use]
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(
            IntentKind::Timetable,
            &[
                "timetable", "class", "schedule", "lecture", "period", "timing", "classes",
                "today", "tomorrow", "when",
            ],
            &[
                r"what.*class",
                r"when.*class",
                r"today.*schedule",
                r"tomorrow.*schedule",
                r"class.*timing",
                r"schedule.*for",
            ],
        ),
        IntentRule::new(
            IntentKind::Exam,
            &[
                "exam",
                "examination",
                "test",
                "internal",
                "semester",
                "exam schedule",
                "exam date",
                "exam time",
                "exams",
            ],
            &[
                r"when.*exam",
                r"exam.*schedule",
                r"exam.*date",
                r"next.*exam",
                r"upcoming.*exam",
            ],
        ),
        IntentRule::new(
            IntentKind::Department,
            &[
                "department",
                "hod",
                "head",
                "faculty",
                "professor",
                "teacher",
                "staff",
                "office",
                "contact",
                "phone",
            ],
            &[
                r"who.*hod",
                r"department.*info",
                r"contact.*department",
                r"about.*department",
            ],
        ),
        IntentRule::new(
            IntentKind::Facility,
            &[
                "library",
                "canteen",
                "hostel",
                "sports",
                "gym",
                "medical",
                "hospital",
                "bus",
                "transport",
                "wifi",
            ],
            &[
                r"where.*library",
                r"library.*timing",
                r"canteen.*open",
                r"hostel.*timing",
                r"bus.*route",
            ],
        ),
        IntentRule::new(
            IntentKind::Event,
            &[
                "event",
                "fest",
                "cultural",
                "technical",
                "seminar",
                "workshop",
                "placement",
                "drive",
                "program",
            ],
            &[r"upcoming.*event", r"next.*fest", r"when.*placement"],
        ),
        IntentRule::new(
            IntentKind::Faq,
            &[
                "leave",
                "fee",
                "certificate",
                "attendance",
                "scholarship",
                "apply",
                "bonafide",
                "rules",
                "how to",
                "procedure",
            ],
            &[r"how.*apply", r"what.*fee", r"attendance.*requirement"],
        ),
        IntentRule::new(
            IntentKind::Greeting,
            &[
                "hello",
                "hi",
                "hey",
                "good morning",
                "good afternoon",
                "good evening",
                "help",
                "assist",
            ],
            &[r"^hello", r"^hi\b", r"^hey"],
        ),
        IntentRule::new(
            IntentKind::Farewell,
            &[
                "bye", "goodbye", "exit", "quit", "stop", "thank you", "thanks", "done",
            ],
            &[r"bye", r"exit", r"quit"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::clean_text;

    fn classify(text: &str) -> Classification {
        IntentClassifier::with_defaults().classify(&clean_text(text))
    }

    #[test]
    fn default_rules_compile() {
        for rule in default_rules() {
            assert!(rule.compile().is_ok(), "rule {:?} failed to compile", rule.kind);
        }
    }

    #[test]
    fn intent_kind_round_trip() {
        assert_eq!(IntentKind::Timetable.as_str(), "timetable");
        assert_eq!(IntentKind::from_str_lowercase("timetable"), IntentKind::Timetable);
        assert_eq!(IntentKind::from_str_lowercase("nonsense"), IntentKind::Unknown);
    }

    #[test]
    fn classifies_timetable_queries() {
        assert_eq!(classify("What are today's classes for CSE?").kind, IntentKind::Timetable);
        assert_eq!(classify("class timings for monday").kind, IntentKind::Timetable);
    }

    #[test]
    fn classifies_exam_queries() {
        assert_eq!(classify("When is the next exam?").kind, IntentKind::Exam);
        assert_eq!(classify("What is the exam schedule?").kind, IntentKind::Exam);
    }

    #[test]
    fn classifies_department_queries() {
        assert_eq!(classify("Who is the HOD of CSE?").kind, IntentKind::Department);
        assert_eq!(classify("Tell me about the ECE department").kind, IntentKind::Department);
    }

    #[test]
    fn classifies_facility_queries() {
        assert_eq!(classify("Where is the library?").kind, IntentKind::Facility);
        assert_eq!(classify("hostel timings").kind, IntentKind::Facility);
    }

    #[test]
    fn classifies_event_queries() {
        assert_eq!(classify("What are the upcoming events?").kind, IntentKind::Event);
    }

    #[test]
    fn classifies_faq_queries() {
        assert_eq!(classify("How to apply for leave?").kind, IntentKind::Faq);
    }

    #[test]
    fn classifies_greeting_and_farewell() {
        assert_eq!(classify("Hello, can you help me?").kind, IntentKind::Greeting);
        assert_eq!(classify("Thank you, bye!").kind, IntentKind::Farewell);
    }

    #[test]
    fn zero_score_is_unknown() {
        let result = classify("quantum flux capacitor");
        assert_eq!(result.kind, IntentKind::Unknown);
        assert_eq!(result.score, 0);
        assert!(result.confidence < f32::EPSILON);
    }

    #[test]
    fn empty_input_is_unknown() {
        let result = IntentClassifier::with_defaults().classify("");
        assert_eq!(result.kind, IntentKind::Unknown);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn ties_go_to_the_earliest_declared_rule() {
        // Both rules score identically on the shared keyword; the first
        // declared rule must win.
        let rules = vec![
            IntentRule::new(IntentKind::Timetable, &["shared"], &[]),
            IntentRule::new(IntentKind::Exam, &["shared"], &[]),
        ];
        let classifier = IntentClassifier::new(rules).expect("rules compile");
        assert_eq!(classifier.classify("shared keyword").kind, IntentKind::Timetable);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn patterns_outweigh_keywords() {
        let rules = vec![
            IntentRule::new(IntentKind::Faq, &["apply"], &[]),
            IntentRule::new(IntentKind::Event, &[], &[r"apply"]),
        ];
        let classifier = IntentClassifier::new(rules).expect("rules compile");
        let result = classifier.classify("apply now");
        assert_eq!(result.kind, IntentKind::Event);
        assert_eq!(result.score, 2);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn confidence_is_normalized() {
        let rules = vec![IntentRule::new(IntentKind::Greeting, &["hello", "hi"], &[])];
        let classifier = IntentClassifier::new(rules).expect("rules compile");
        let result = classifier.classify("hello hi");
        assert!((result.confidence - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let rules = vec![IntentRule::new(IntentKind::Faq, &[], &["(unclosed"])];
        assert!(IntentClassifier::new(rules).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn rule_serialization_round_trips() {
        let rules = default_rules();
        let json = serde_json::to_string(&rules).expect("rules serialize");
        let parsed: Vec<IntentRule> = serde_json::from_str(&json).expect("rules deserialize");
        assert_eq!(parsed.len(), rules.len());
        assert_eq!(parsed[0].kind, IntentKind::Timetable);
    }
}
