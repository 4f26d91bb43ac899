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

//! Query understanding: preprocessing, intent classification and entity
//! extraction.
//!
//! This is the only stage of the pipeline that looks at the query text
//! itself. Everything downstream works from the resulting [`QueryAnalysis`].

use chrono::Weekday;
use tracing::debug;

pub mod entities;
pub mod intent;
pub mod preprocess;

pub use entities::{Entities, EntityExtractor};
pub use intent::{Classification, IntentClassifier, IntentKind, IntentRule};
pub use preprocess::clean_text;

/// Everything the pipeline knows about one query.
#[derive(Debug, Clone)]
pub struct QueryAnalysis {
    /// Raw input as typed or transcribed.
    pub raw: String,
    /// Preprocessed text that classification and extraction ran over.
    pub cleaned: String,
    pub intent: IntentKind,
    pub confidence: f32,
    pub entities: Entities,
}

/// Combined classifier + extractor, built once and reused across queries.
pub struct QueryAnalyzer {
    classifier: IntentClassifier,
    extractor: EntityExtractor,
}

impl QueryAnalyzer {
    #[must_use]
    pub fn new(classifier: IntentClassifier, extractor: EntityExtractor) -> Self {
        Self {
            classifier,
            extractor,
        }
    }

    /// Analyzer with the built-in rule table and vocabularies.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(IntentClassifier::with_defaults(), EntityExtractor::new())
    }

    /// Analyze a query, resolving "today"/"tomorrow" against the local clock.
    #[must_use]
    pub fn analyze(&self, text: &str) -> QueryAnalysis {
        self.analyze_on(text, campus_core::calendar::today())
    }

    /// Analyze a query with an explicit reference day, for deterministic tests.
    #[must_use]
    pub fn analyze_on(&self, text: &str, today: Weekday) -> QueryAnalysis {
        let cleaned = clean_text(text);
        let classification = self.classifier.classify(&cleaned);
        let entities = self.extractor.extract_on(&cleaned, today);

        debug!(
            "Classified '{cleaned}' as {} (confidence {:.2})",
            classification.kind.as_str(),
            classification.confidence
        );

        QueryAnalysis {
            raw: text.to_string(),
            cleaned,
            intent: classification.kind,
            confidence: classification.confidence,
            entities,
        }
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_unknown() {
        let analyzer = QueryAnalyzer::with_defaults();
        let analysis = analyzer.analyze("   ");
        assert_eq!(analysis.intent, IntentKind::Unknown);
        assert!(analysis.confidence < f32::EPSILON);
    }

    #[test]
    fn analysis_carries_entities() {
        let analyzer = QueryAnalyzer::with_defaults();
        let analysis = analyzer.analyze_on("CSE classes on monday", Weekday::Fri);
        assert_eq!(analysis.intent, IntentKind::Timetable);
        assert_eq!(analysis.entities.department.as_deref(), Some("CSE"));
        assert_eq!(analysis.entities.day.as_deref(), Some("monday"));
    }
}
