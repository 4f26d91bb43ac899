//! Session state for multi-turn conversations.
//!
//! A session numbers the turns of one shell run and keeps a bounded
//! transcript. History is in-memory only and dropped when the shell
//! exits.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use campus_core::{ChatMessage, Role};

/// One conversation with the assistant.
///
/// Turns are numbered for the whole session; the transcript itself is
/// bounded, so the turn counter keeps running after old messages are
/// dropped.
#[derive(Debug, Clone)]
pub struct AssistantSession {
    /// Session identifier
    pub id: Uuid,
    /// Session name (optional)
    pub name: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
    history_limit: Option<usize>,
    turns: usize,
}

impl AssistantSession {
    /// Create a new empty session with an unbounded transcript.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: None,
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
            history_limit: None,
            turns: 0,
        }
    }

    /// Set session name.
    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Keep at most `limit` messages in the transcript.
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Record one completed turn and return its 1-based number.
    ///
    /// Both sides of the exchange are appended; once the transcript
    /// exceeds the history limit the oldest messages are dropped.
    pub fn record_turn(&mut self, user_input: String, response: String) -> usize {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: user_input,
        });
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: response,
        });

        if let Some(limit) = self.history_limit {
            let excess = self.messages.len().saturating_sub(limit);
            if excess > 0 {
                self.messages.drain(..excess);
            }
        }

        self.turns += 1;
        self.updated_at = Utc::now();
        self.turns
    }

    /// The retained transcript, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Messages currently retained.
    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Turns completed over the session lifetime, counting turns whose
    /// messages have already been dropped from the transcript.
    #[must_use]
    pub const fn turn_count(&self) -> usize {
        self.turns
    }

    /// Check if the transcript is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for AssistantSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_turn_numbers_turns_sequentially() {
        let mut session = AssistantSession::new().with_name("Test".to_string());

        assert!(session.is_empty());
        assert_eq!(session.record_turn("hello".to_string(), "Hi there!".to_string()), 1);
        assert_eq!(session.record_turn("bye".to_string(), "Goodbye!".to_string()), 2);

        assert_eq!(session.message_count(), 4);
        assert_eq!(session.messages()[0].role, Role::User);
        assert_eq!(session.messages()[0].content, "hello");
        assert_eq!(session.messages()[3].content, "Goodbye!");
    }

    #[test]
    fn history_limit_drops_the_oldest_messages() {
        let mut session = AssistantSession::new().with_history_limit(4);

        for i in 0..5 {
            session.record_turn(format!("question {i}"), format!("answer {i}"));
        }

        // Two retained exchanges, but the counter covers all five.
        assert_eq!(session.message_count(), 4);
        assert_eq!(session.turn_count(), 5);
        assert_eq!(session.messages()[0].content, "question 3");
        assert_eq!(session.messages()[3].content, "answer 4");
    }

    #[test]
    fn unbounded_session_keeps_the_whole_transcript() {
        let mut session = AssistantSession::new();

        for i in 0..10 {
            session.record_turn(format!("question {i}"), "answer".to_string());
        }

        assert_eq!(session.message_count(), 20);
        assert_eq!(session.turn_count(), 10);
    }
}
