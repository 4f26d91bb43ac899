//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type, so dispatch is
//! monomorphized at compile time with no boxing.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use campus_config::Config;
use campus_conversation::{AssistantConfig, AssistantManager};
use campus_data::DataStore;
use campus_nlp::QueryAnalyzer;
use campus_response::ResponseGenerator;
use campus_speech::{CloudRecognizer, CommandRecorder, CommandSynthesizer};

mod ask;
mod chat;
mod info;
mod init;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use chat::{ChatInput, ChatStrategy};
pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// CLI switches that narrow the configured voice behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceOverrides {
    /// Disable both voice input and voice output
    pub text_only: bool,
    /// Disable voice input only
    pub no_voice_input: bool,
    /// Disable voice output only
    pub no_voice_output: bool,
}

/// Resolve the campus data directory.
///
/// A CLI override wins; otherwise the configured path is used, resolved
/// against the config directory when relative.
pub fn resolve_data_dir(config: &Config, cli_dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli_dir {
        return Ok(dir);
    }
    let configured = PathBuf::from(&config.assistant.data_dir);
    if configured.is_absolute() {
        return Ok(configured);
    }
    Ok(Config::ensure_config_dir()?.join(configured))
}

/// Build the per-session config from file defaults plus CLI overrides.
pub fn build_assistant_config(
    config: &Config,
    session_name: Option<String>,
    history_limit: Option<usize>,
) -> AssistantConfig {
    let mut assistant_config = AssistantConfig {
        session_name,
        ..AssistantConfig::default()
    };
    if let Some(limit) = history_limit.or(config.assistant.history_limit) {
        assistant_config = assistant_config.with_history_limit(limit);
    }
    assistant_config
}

/// Assemble the full pipeline: data store, analyzer, generator, and the
/// speech adapters the config plus overrides allow.
pub fn build_manager(
    config: &Config,
    assistant_config: AssistantConfig,
    cli_data_dir: Option<PathBuf>,
    voice: VoiceOverrides,
) -> anyhow::Result<AssistantManager> {
    let data_dir = resolve_data_dir(config, cli_data_dir)?;
    info!("Loading campus data from {}", data_dir.display());

    let store = Arc::new(DataStore::load(&data_dir));
    let analyzer = QueryAnalyzer::with_defaults();
    let generator = ResponseGenerator::new(store);

    let mut manager =
        AssistantManager::new(analyzer, generator).with_config(assistant_config);

    if config.assistant.voice_output && !voice.text_only && !voice.no_voice_output {
        let synthesizer = CommandSynthesizer::new(config.synthesis.program.clone())
            .with_rate(config.synthesis.rate)
            .with_volume(config.synthesis.volume);
        manager = manager.with_synthesizer(Arc::new(synthesizer));
    }

    if config.assistant.voice_input && !voice.text_only && !voice.no_voice_input {
        if config.speech.api_key.is_empty() {
            warn!("voice_input is enabled but speech.api_key is empty, staying in text mode");
        } else {
            let recognizer = CloudRecognizer::new(
                config.speech.api_key.clone(),
                config.speech.endpoint.clone(),
            )
            .with_language(config.speech.language.clone());
            manager = manager
                .with_voice_input(Arc::new(recognizer), Arc::new(CommandRecorder::default()));
        }
    }

    Ok(manager)
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type, so
/// parameters pass without runtime casting, and every `execute` call is
/// statically dispatched.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
