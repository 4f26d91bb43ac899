use std::path::PathBuf;

use campus_config::Config;
use campus_data::DataStore;

use super::resolve_data_dir;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone)]
pub struct InfoInput {
    /// Override for the campus data directory
    pub data_dir: Option<PathBuf>,
}

/// Strategy for displaying configuration and data status.
///
/// Outputs the speech API key (masked), the assistant and synthesis
/// settings, and record counts for each campus dataset.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== campus-assistant Configuration ===\n");

        println!("Speech:");
        println!("  API Key: {}", mask_key(&config.speech.api_key));
        println!("  Endpoint: {}", config.speech.endpoint);
        println!("  Language: {}", config.speech.language);
        println!();

        println!("Assistant:");
        println!("  Voice Input: {}", config.assistant.voice_input);
        println!("  Voice Output: {}", config.assistant.voice_output);
        if let Some(limit) = config.assistant.history_limit {
            println!("  History Limit: {limit}");
        }
        println!();

        println!("Synthesis:");
        println!("  Program: {}", config.synthesis.program);
        println!("  Rate: {} wpm", config.synthesis.rate);
        println!("  Volume: {}", config.synthesis.volume);
        println!();

        let data_dir = resolve_data_dir(&config, input.data_dir)?;
        println!("Campus Data:");
        println!("  Directory: {}", data_dir.display());

        let counts = DataStore::load(&data_dir).counts();
        println!("  Timetable Days: {}", counts.timetable_days);
        println!("  Departments: {}", counts.departments);
        println!("  Exams: {}", counts.exams);
        println!("  Events: {}", counts.events);
        println!("  FAQs: {}", counts.faqs);

        Ok(())
    }
}

/// Mask all but the first and last four characters of a key. Counts
/// characters, not bytes, so multi-byte keys cannot split a boundary.
fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{prefix}...{suffix}")
    } else {
        "***".to_string()
    }
}
