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

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    AskInput, AskStrategy, ChatInput, ChatStrategy, CommandStrategy, InfoInput, InfoStrategy,
    InitStrategy, VersionStrategy, VoiceOverrides,
};

#[derive(Parser)]
#[command(name = "campus-assistant")]
#[command(about = "Voice and text assistant for campus queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the assistant interactively
    Chat {
        /// Single message to send instead of the interactive shell
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Session name for the logs
        #[arg(short = 'n', long)]
        session_name: Option<String>,

        /// Number of messages to keep in history
        #[arg(long)]
        history_limit: Option<usize>,

        /// Campus data directory (overrides config)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Disable voice input and output for this session
        #[arg(long)]
        text_only: bool,

        /// Disable voice input only
        #[arg(long)]
        no_voice_input: bool,

        /// Disable voice output only
        #[arg(long)]
        no_voice_output: bool,
    },
    /// Answer a single question and exit
    Ask {
        /// The question to answer
        query: String,

        /// Campus data directory (overrides config)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and data status
    Info {
        /// Campus data directory (overrides config)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            message,
            session_name,
            history_limit,
            data_dir,
            text_only,
            no_voice_input,
            no_voice_output,
        } => {
            ChatStrategy
                .execute(ChatInput {
                    message,
                    session_name,
                    history_limit,
                    data_dir,
                    voice: VoiceOverrides {
                        text_only,
                        no_voice_input,
                        no_voice_output,
                    },
                })
                .await?;
        }
        Commands::Ask { query, data_dir } => {
            AskStrategy.execute(AskInput { query, data_dir }).await?;
        }
        Commands::Init => {
            InitStrategy.execute(()).await?;
        }
        Commands::Info { data_dir } => {
            InfoStrategy.execute(InfoInput { data_dir }).await?;
        }
        Commands::Version => {
            VersionStrategy.execute(()).await?;
        }
    }

    Ok(())
}
