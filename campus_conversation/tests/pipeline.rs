//! Full pipeline tests: query text in, answer out, against the bundled
//! campus data files.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use campus_conversation::{AssistantConfig, AssistantManager, TurnContext};
use campus_core::TextToSpeech;
use campus_data::DataStore;
use campus_nlp::{IntentKind, QueryAnalyzer};
use campus_response::ResponseGenerator;

fn manager() -> AssistantManager {
    let store = Arc::new(DataStore::load(Path::new("../data")));
    AssistantManager::new(QueryAnalyzer::with_defaults(), ResponseGenerator::new(store))
}

/// Counts speak calls so tests can prove when synthesis runs.
struct CountingSynthesizer(Arc<AtomicUsize>);

#[async_trait]
impl TextToSpeech for CountingSynthesizer {
    async fn speak(&self, _text: &str) -> anyhow::Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn department_query_answers_from_the_record() {
    let mut manager = manager();

    let result = manager
        .process_turn(TurnContext::new("Who is the HOD of CSE?".to_string()))
        .await
        .unwrap();

    assert_eq!(result.intent, IntentKind::Department);
    assert!(result.response.contains("Ramesh Rao"));
    assert!(result.response.contains("Computer Science and Engineering"));
}

#[tokio::test]
async fn exam_query_lists_the_department_exams() {
    let mut manager = manager();

    let result = manager
        .process_turn(TurnContext::new("exam schedule for CSE".to_string()))
        .await
        .unwrap();

    assert_eq!(result.intent, IntentKind::Exam);
    assert!(result.response.contains("Data Structures"));
}

#[tokio::test]
async fn facility_query_describes_the_library() {
    let mut manager = manager();

    let result = manager
        .process_turn(TurnContext::new("Where is the library?".to_string()))
        .await
        .unwrap();

    assert_eq!(result.intent, IntentKind::Facility);
    assert!(result.response.contains("Central Library"));
}

#[tokio::test]
async fn faq_query_returns_the_matching_answer() {
    let mut manager = manager();

    let result = manager
        .process_turn(TurnContext::new(
            "What is the attendance requirement?".to_string(),
        ))
        .await
        .unwrap();

    assert!(result.response.contains("75%"));
}

#[tokio::test]
async fn turns_accumulate_in_the_session() {
    let mut manager = manager();

    let first = manager
        .process_turn(TurnContext::new("hello".to_string()))
        .await
        .unwrap();
    assert_eq!(first.intent, IntentKind::Greeting);
    assert_eq!(first.turn_number, 1);

    let second = manager
        .process_turn(TurnContext::new("upcoming events".to_string()))
        .await
        .unwrap();
    assert_eq!(second.intent, IntentKind::Event);
    assert_eq!(second.turn_number, 2);

    assert_eq!(manager.session().message_count(), 4);
}

#[tokio::test]
async fn history_limit_bounds_the_transcript() {
    let store = Arc::new(DataStore::load(Path::new("../data")));
    let mut manager =
        AssistantManager::new(QueryAnalyzer::with_defaults(), ResponseGenerator::new(store))
            .with_config(AssistantConfig::default().with_history_limit(2));

    for query in ["hello", "upcoming events", "Where is the library?"] {
        manager
            .process_turn(TurnContext::new(query.to_string()))
            .await
            .unwrap();
    }

    // Only the last exchange is retained; turn numbering keeps going.
    assert_eq!(manager.session().message_count(), 2);
    assert_eq!(manager.session().turn_count(), 3);
    assert_eq!(manager.session().messages()[0].content, "Where is the library?");
}

#[tokio::test]
async fn without_a_synthesizer_nothing_is_spoken() {
    // The manager from `manager()` has no synthesizer attached; the turn
    // must still complete normally.
    let mut manager = manager();

    let result = manager
        .process_turn(TurnContext::new("hello".to_string()))
        .await
        .unwrap();
    assert!(!result.response.is_empty());
}

#[tokio::test]
async fn attached_synthesizer_speaks_once_per_turn() {
    let count = Arc::new(AtomicUsize::new(0));
    let store = Arc::new(DataStore::load(Path::new("../data")));
    let mut manager =
        AssistantManager::new(QueryAnalyzer::with_defaults(), ResponseGenerator::new(store))
            .with_synthesizer(Arc::new(CountingSynthesizer(count.clone())));

    manager
        .process_turn(TurnContext::new("hello".to_string()))
        .await
        .unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);

    manager
        .process_turn(TurnContext::new("upcoming events".to_string()))
        .await
        .unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn missing_data_directory_still_answers() {
    let store = Arc::new(DataStore::load(Path::new("does-not-exist")));
    let mut manager = AssistantManager::new(
        QueryAnalyzer::with_defaults(),
        ResponseGenerator::new(store),
    );

    let result = manager
        .process_turn(TurnContext::new("Who is the HOD of CSE?".to_string()))
        .await
        .unwrap();

    assert_eq!(result.intent, IntentKind::Department);
    assert!(!result.response.is_empty());
}
