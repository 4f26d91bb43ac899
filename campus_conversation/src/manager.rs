//! Turn-by-turn dialogue manager.
//!
//! The `AssistantManager` is the main entry point: it owns the query
//! analyzer, the response generator and the optional speech adapters,
//! and drives the interactive shell.

use std::io::Write;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use campus_core::{AudioInput, SpeechToText, TextToSpeech};
use campus_nlp::{IntentKind, QueryAnalyzer};
use campus_response::ResponseGenerator;

use crate::session::AssistantSession;

/// Configuration for the dialogue manager.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Session identifier (persists across turns)
    pub session_id: Uuid,
    /// Optional session name
    pub session_name: Option<String>,
    /// Maximum messages retained in the session transcript
    pub history_limit: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            session_id: Uuid::now_v7(),
            session_name: None,
            history_limit: 20,
        }
    }
}

impl AssistantConfig {
    /// Create a new config with a specific session ID.
    #[must_use]
    pub const fn with_session_id(mut self, id: Uuid) -> Self {
        self.session_id = id;
        self
    }

    /// Set the history limit.
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

/// Errors that can occur while running the dialogue loop.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("speech error: {0}")]
    Speech(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Context for a single dialogue turn.
#[derive(Debug, Clone)]
pub struct TurnContext {
    /// User's input, already transcribed if it came from voice
    pub user_input: String,
    /// Current turn number
    pub turn_number: usize,
}

impl TurnContext {
    /// Create a new turn context.
    #[must_use]
    pub const fn new(user_input: String) -> Self {
        Self {
            user_input,
            turn_number: 0,
        }
    }

    /// Set turn number.
    #[must_use]
    pub const fn with_turn_number(mut self, turn: usize) -> Self {
        self.turn_number = turn;
        self
    }
}

/// Result of processing a dialogue turn.
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// Assistant's response text
    pub response: String,
    /// Classified intent for this turn
    pub intent: IntentKind,
    /// Classification confidence in `0.0..=1.0`
    pub confidence: f32,
    /// Turn number
    pub turn_number: usize,
}

/// Multi-turn dialogue manager.
///
/// Every turn runs the same pipeline: analyze the query, generate a
/// response from campus data, record both sides in the session, and
/// speak the answer when a synthesizer is attached.
pub struct AssistantManager {
    analyzer: QueryAnalyzer,
    generator: ResponseGenerator,
    synthesizer: Option<Arc<dyn TextToSpeech>>,
    recognizer: Option<Arc<dyn SpeechToText>>,
    audio_input: Option<Arc<dyn AudioInput>>,
    config: AssistantConfig,
    session: AssistantSession,
}

impl AssistantManager {
    /// Create a new manager with text-only input and output.
    #[must_use]
    pub fn new(analyzer: QueryAnalyzer, generator: ResponseGenerator) -> Self {
        let config = AssistantConfig::default();
        info!("Creating assistant manager for session: {}", config.session_id);
        let session = Self::session_for(&config);
        Self {
            analyzer,
            generator,
            synthesizer: None,
            recognizer: None,
            audio_input: None,
            config,
            session,
        }
    }

    /// Replace the config, starting a fresh session under it.
    #[must_use]
    pub fn with_config(mut self, config: AssistantConfig) -> Self {
        self.session = Self::session_for(&config);
        self.config = config;
        self
    }

    fn session_for(config: &AssistantConfig) -> AssistantSession {
        let mut session = AssistantSession::new().with_history_limit(config.history_limit);
        if let Some(name) = &config.session_name {
            session = session.with_name(name.clone());
        }
        session.id = config.session_id;
        session
    }

    /// Attach a synthesizer for spoken responses.
    #[must_use]
    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn TextToSpeech>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    /// Attach a recognizer and microphone for voice input.
    #[must_use]
    pub fn with_voice_input(
        mut self,
        recognizer: Arc<dyn SpeechToText>,
        audio_input: Arc<dyn AudioInput>,
    ) -> Self {
        self.recognizer = Some(recognizer);
        self.audio_input = Some(audio_input);
        self
    }

    /// Process a single dialogue turn.
    pub async fn process_turn(&mut self, context: TurnContext) -> Result<TurnResult, TurnError> {
        debug!("Processing turn for session: {}", self.session.id);

        let analysis = self.analyzer.analyze(&context.user_input);
        let response = self.generator.generate(&analysis);

        let turn_number = self.session.record_turn(context.user_input, response.clone());

        if let Some(synthesizer) = &self.synthesizer {
            synthesizer.speak(&response).await?;
        }

        debug!(
            "Turn {turn_number}: intent {} at confidence {:.2}",
            analysis.intent.as_str(),
            analysis.confidence
        );

        Ok(TurnResult {
            response,
            intent: analysis.intent,
            confidence: analysis.confidence,
            turn_number,
        })
    }

    /// Capture one voice query, or `None` if the audio was not understood.
    ///
    /// Network and capture failures propagate; an unintelligible clip is
    /// an expected outcome the caller should re-prompt on.
    pub async fn listen(&self) -> Result<Option<String>, TurnError> {
        let (Some(recognizer), Some(audio_input)) = (&self.recognizer, &self.audio_input) else {
            return Ok(None);
        };

        let wav = audio_input.capture().await?;
        match recognizer.transcribe(&wav).await {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                warn!("Recognition failed: {e}");
                println!("{e}");
                Ok(None)
            }
        }
    }

    /// Run the interactive shell.
    ///
    /// Reads queries from the microphone when voice input is attached,
    /// otherwise from stdin. `exit`, `quit` or `q` ends the session, as
    /// does any farewell query.
    pub async fn run_interactive(&mut self) -> Result<(), TurnError> {
        println!("=== Campus Assistant ===");
        println!("Ask about timetables, exams, departments, facilities or events.");
        println!("Type 'help' for examples, 'exit' to leave.\n");

        loop {
            let input = if self.recognizer.is_some() {
                println!("Listening...");
                match self.listen().await? {
                    Some(text) => {
                        println!("You said: {text}");
                        text
                    }
                    None => continue,
                }
            } else {
                print!("> ");
                std::io::stdout().flush()?;

                let mut line = String::new();
                if std::io::stdin().read_line(&mut line)? == 0 {
                    break;
                }
                line.trim().to_string()
            };

            if matches!(input.as_str(), "exit" | "quit" | "q") {
                println!("\nSession ended. Total turns: {}", self.session.turn_count());
                break;
            }

            if input.is_empty() {
                continue;
            }

            if input == "help" {
                println!("\n{}\n", ResponseGenerator::help_message());
                continue;
            }

            let result = self.process_turn(TurnContext::new(input)).await?;
            println!("\n{}\n", result.response);

            if result.intent == IntentKind::Farewell {
                break;
            }
        }

        Ok(())
    }

    /// Get the current session state.
    #[must_use]
    pub const fn session(&self) -> &AssistantSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AssistantConfig::default();
        assert!(config.history_limit > 0);
    }

    #[test]
    fn test_turn_context() {
        let ctx = TurnContext::new("Hello".to_string()).with_turn_number(5);
        assert_eq!(ctx.user_input, "Hello");
        assert_eq!(ctx.turn_number, 5);
    }
}
