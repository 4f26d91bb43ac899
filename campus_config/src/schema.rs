use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub assistant: AssistantDefaults,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssistantDefaults {
    #[serde(default = "AssistantDefaults::default_data_dir")]
    pub data_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
    #[serde(default)]
    pub voice_input: bool,
    #[serde(default = "AssistantDefaults::default_voice_output")]
    pub voice_output: bool,
}

impl Default for AssistantDefaults {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            history_limit: None,
            voice_input: false,
            voice_output: Self::default_voice_output(),
        }
    }
}

impl AssistantDefaults {
    fn default_data_dir() -> String {
        "data".to_string()
    }

    const fn default_voice_output() -> bool {
        false
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpeechConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "SpeechConfig::default_endpoint")]
    pub endpoint: String,
    #[serde(default = "SpeechConfig::default_language")]
    pub language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: Self::default_endpoint(),
            language: Self::default_language(),
        }
    }
}

impl SpeechConfig {
    fn default_endpoint() -> String {
        "https://speech.example.com/v1/recognize".to_string()
    }

    fn default_language() -> String {
        "en-IN".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SynthesisConfig {
    #[serde(default = "SynthesisConfig::default_program")]
    pub program: String,
    #[serde(default = "SynthesisConfig::default_rate")]
    pub rate: u32,
    #[serde(default = "SynthesisConfig::default_volume")]
    pub volume: f32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            program: Self::default_program(),
            rate: Self::default_rate(),
            volume: Self::default_volume(),
        }
    }
}

impl SynthesisConfig {
    fn default_program() -> String {
        "espeak".to_string()
    }

    const fn default_rate() -> u32 {
        150
    }

    const fn default_volume() -> f32 {
        0.9
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("campus-assistant");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'campus-assistant init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("campus-assistant");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "assistant": {
    "data_dir": "data",
    "history_limit": 20,
    "voice_input": false,
    "voice_output": false
  },
  "speech": {
    "api_key": "your-speech-api-key-here",
    "endpoint": "https://speech.example.com/v1/recognize",
    "language": "en-IN"
  },
  "synthesis": {
    "program": "espeak",
    "rate": 150,
    "volume": 0.9
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point data_dir at your campus data directory (JSON files)");
        println!("   2. Add a speech API key if you want voice input");
        println!("   3. Run 'campus-assistant chat' to start a conversation");
        println!();
        println!("🔧 Configuration options:");
        println!("   - voice_input: capture queries from the microphone");
        println!("   - voice_output: speak responses with the local synthesizer");
        println!("   - history_limit: number of messages kept in session history");
        println!();
        Ok(())
    }
}
