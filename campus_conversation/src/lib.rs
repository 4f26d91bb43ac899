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

//! Multi-turn dialogue management for the campus assistant.
//!
//! Ties the analyzer, the data-backed response generator and the speech
//! adapters into one interactive shell with per-session history.

pub mod manager;
pub mod session;

pub use manager::{AssistantConfig, AssistantManager, TurnContext, TurnError, TurnResult};
pub use session::AssistantSession;
