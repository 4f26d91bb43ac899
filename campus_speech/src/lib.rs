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

//! Speech adapters: cloud recognition, offline synthesis and audio capture.
//!
//! Recognition goes over the network to a cloud service; synthesis and
//! capture shell out to local programs. All three sit behind the trait
//! seams in `campus_core`, so the pipeline never knows which is in play.

use thiserror::Error;

pub mod recognizer;
pub mod recorder;
pub mod retry;
pub mod synthesis;

pub use recognizer::CloudRecognizer;
pub use recorder::CommandRecorder;
pub use retry::retry_with_backoff;
pub use synthesis::{CommandSynthesizer, NullSynthesizer};

/// Speech failures. Display strings double as the user-visible messages.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("no internet connection ({0})")]
    Network(#[from] reqwest::Error),

    #[error("could not understand the audio")]
    Unintelligible,

    #[error("speech service returned an unexpected response: {0}")]
    InvalidResponse(String),

    #[error("audio capture failed: {0}")]
    Capture(String),

    #[error("speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
