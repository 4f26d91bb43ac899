//! Multi-turn conversation command.

use std::path::PathBuf;

use tracing::info;

use campus_conversation::TurnContext;

use super::{VoiceOverrides, build_assistant_config, build_manager};
use campus_config::Config;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Session name (for logs)
    pub session_name: Option<String>,
    /// Number of messages to keep in history
    pub history_limit: Option<usize>,
    /// Override for the campus data directory
    pub data_dir: Option<PathBuf>,
    /// Voice behavior overrides
    pub voice: VoiceOverrides,
}

/// Strategy for executing the Chat command.
///
/// Runs the interactive shell by default, or answers a single message
/// and exits when `-m` is given. Voice input and output follow the
/// config unless overridden on the command line.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let assistant_config =
            build_assistant_config(&config, input.session_name, input.history_limit);
        let session_id = assistant_config.session_id;

        let mut manager = build_manager(&config, assistant_config, input.data_dir, input.voice)?;

        info!("Starting session: {session_id}");

        if let Some(msg) = input.message {
            let result = manager.process_turn(TurnContext::new(msg)).await?;
            println!("{}", result.response);
            info!("Turn {} completed.", result.turn_number);
        } else {
            manager.run_interactive().await?;

            let session = manager.session();
            info!("Session ended: {} total messages", session.message_count());
        }

        Ok(())
    }
}
