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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod calendar;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Converts captured audio into text.
///
/// Implementations delegate the actual recognition work (typically to a
/// cloud service); the pipeline only cares about the transcript.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, wav: &[u8]) -> anyhow::Result<String>;
}

/// Speaks a response aloud, blocking until playback completes.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    async fn speak(&self, text: &str) -> anyhow::Result<()>;
}

/// Captures one utterance from the user and returns WAV bytes.
#[async_trait]
pub trait AudioInput: Send + Sync {
    async fn capture(&self) -> anyhow::Result<Vec<u8>>;
}
