//! Cloud speech recognition client.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use campus_core::SpeechToText;

use crate::SpeechError;
use crate::retry::retry_with_backoff;

/// Transcribes WAV audio through a cloud recognition endpoint.
///
/// Transient network failures are retried with backoff; an empty
/// transcript is not retried, it surfaces as
/// [`SpeechError::Unintelligible`] so the shell can re-prompt.
pub struct CloudRecognizer {
    client: Client,
    api_key: String,
    endpoint: String,
    language: String,
}

impl CloudRecognizer {
    #[must_use]
    pub fn new(api_key: String, endpoint: String) -> Self {
        info!("Creating cloud recognizer for {endpoint}");
        Self {
            client: Client::new(),
            api_key,
            endpoint,
            language: "en-US".to_string(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: String) -> Self {
        self.language = language;
        self
    }

    /// Send one recognition request. The transcript may be empty.
    async fn try_send(&self, wav: &[u8]) -> Result<String, SpeechError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .query(&[("language", self.language.as_str())])
            .header(CONTENT_TYPE, "audio/wav")
            .body(wav.to_vec())
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let transcript = response["transcript"]
            .as_str()
            .ok_or_else(|| SpeechError::InvalidResponse("missing transcript field".to_string()))?;

        Ok(transcript.trim().to_string())
    }
}

#[async_trait]
impl SpeechToText for CloudRecognizer {
    async fn transcribe(&self, wav: &[u8]) -> anyhow::Result<String> {
        debug!("Sending {} bytes of audio for recognition", wav.len());

        let base_delays: [u64; 3] = [1, 2, 4];
        let transcript = retry_with_backoff(|| self.try_send(wav), &base_delays, 1).await?;

        if transcript.is_empty() {
            return Err(SpeechError::Unintelligible.into());
        }

        debug!("Recognized: {transcript}");
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_language() {
        let recognizer = CloudRecognizer::new(
            "key".to_string(),
            "https://speech.example/recognize".to_string(),
        )
        .with_language("en-IN".to_string());
        assert_eq!(recognizer.language, "en-IN");
    }
}
