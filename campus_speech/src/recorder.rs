//! Microphone capture via an external recording program.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use campus_core::AudioInput;

use crate::SpeechError;

/// Captures a fixed-length WAV clip by shelling out to a recorder
/// such as `arecord`. The program must write WAV to stdout.
pub struct CommandRecorder {
    program: String,
    duration_secs: u32,
}

impl CommandRecorder {
    #[must_use]
    pub fn new(program: String) -> Self {
        Self {
            program,
            duration_secs: 5,
        }
    }

    #[must_use]
    pub const fn with_duration(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new("arecord".to_string())
    }
}

#[async_trait]
impl AudioInput for CommandRecorder {
    async fn capture(&self) -> anyhow::Result<Vec<u8>> {
        info!(
            "Recording {}s of audio with {}",
            self.duration_secs, self.program
        );

        // 16 kHz mono signed 16-bit, the format cloud recognizers expect.
        let output = Command::new(&self.program)
            .args([
                "-q",
                "-f",
                "S16_LE",
                "-r",
                "16000",
                "-c",
                "1",
                "-d",
                &self.duration_secs.to_string(),
                "-t",
                "wav",
                "-",
            ])
            .output()
            .await
            .map_err(SpeechError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::Capture(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            ))
            .into());
        }

        debug!("Captured {} bytes", output.stdout.len());
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_records_five_seconds_with_arecord() {
        let recorder = CommandRecorder::default();
        assert_eq!(recorder.program, "arecord");
        assert_eq!(recorder.duration_secs, 5);
    }

    #[tokio::test]
    async fn missing_program_reports_capture_failure() {
        let recorder = CommandRecorder::new("definitely-not-a-recorder".to_string());
        let result = recorder.capture().await;
        assert!(result.is_err());
    }
}
