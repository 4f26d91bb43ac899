//! Offline text-to-speech via an external synthesizer program.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use campus_core::TextToSpeech;

use crate::SpeechError;

/// Speaks text by shelling out to a local synthesizer such as `espeak`.
///
/// Synthesis is fully offline, so voice output keeps working when the
/// cloud recognizer cannot reach the network.
pub struct CommandSynthesizer {
    program: String,
    rate: u32,
    volume: f32,
}

impl CommandSynthesizer {
    #[must_use]
    pub fn new(program: String) -> Self {
        Self {
            program,
            rate: 150,
            volume: 0.9,
        }
    }

    /// Words per minute.
    #[must_use]
    pub const fn with_rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }

    /// Volume in `0.0..=1.0`.
    #[must_use]
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    /// espeak amplitude runs 0..=200.
    fn amplitude(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let amp = (self.volume * 200.0).round() as u32;
        amp.min(200)
    }
}

impl Default for CommandSynthesizer {
    fn default() -> Self {
        Self::new("espeak".to_string())
    }
}

#[async_trait]
impl TextToSpeech for CommandSynthesizer {
    async fn speak(&self, text: &str) -> anyhow::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        debug!("Speaking {} characters with {}", text.len(), self.program);

        let status = Command::new(&self.program)
            .args([
                "-s",
                &self.rate.to_string(),
                "-a",
                &self.amplitude().to_string(),
                text,
            ])
            .status()
            .await
            .map_err(SpeechError::Io)?;

        if !status.success() {
            return Err(
                SpeechError::Synthesis(format!("{} exited with {status}", self.program)).into(),
            );
        }
        Ok(())
    }
}

/// Discards speech output. Used when voice output is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSynthesizer;

#[async_trait]
impl TextToSpeech for NullSynthesizer {
    async fn speak(&self, _text: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
