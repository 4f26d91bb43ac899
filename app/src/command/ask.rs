//! One-shot question command.

use std::path::PathBuf;

use tracing::debug;

use campus_config::Config;
use campus_conversation::TurnContext;

use super::{VoiceOverrides, build_assistant_config, build_manager};

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    /// The question to answer
    pub query: String,
    /// Override for the campus data directory
    pub data_dir: Option<PathBuf>,
}

/// Strategy for answering a single query and exiting.
///
/// Always text-only, so it stays scriptable.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let assistant_config = build_assistant_config(&config, None, None);
        let voice = VoiceOverrides {
            text_only: true,
            ..VoiceOverrides::default()
        };
        let mut manager = build_manager(&config, assistant_config, input.data_dir, voice)?;

        let result = manager.process_turn(TurnContext::new(input.query)).await?;
        debug!(
            "Classified as {} with confidence {:.2}",
            result.intent.as_str(),
            result.confidence
        );
        println!("{}", result.response);

        Ok(())
    }
}
