//! Capture capability
//!
//! Typed commands come from a line source (stdin in production); spoken
//! commands come from a `Listener`. Both produce `Utterance`s.

pub mod speechd;
pub mod typed;

use crate::config::Config;
use crate::error::GhostResult;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use tracing::{info, warn};

pub use typed::StdinLines;

/// How an utterance entered the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Spoken,
    Typed,
}

impl InputMode {
    /// Parse the answer to the mode prompt
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim().to_lowercase().as_str() {
            "speech" => Some(InputMode::Spoken),
            "text" => Some(InputMode::Typed),
            _ => None,
        }
    }
}

/// One captured command, discarded after dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub captured_at: DateTime<Local>,
    pub mode: InputMode,
}

impl Utterance {
    pub fn new(text: impl Into<String>, mode: InputMode) -> Self {
        Self {
            text: text.into(),
            captured_at: Local::now(),
            mode,
        }
    }
}

/// Line-oriented typed input
#[async_trait]
pub trait LineSource: Send {
    /// Show `prompt` and read one line. A closed stream is an error.
    async fn read_line(&mut self, prompt: &str) -> GhostResult<String>;
}

/// Spoken input
#[async_trait]
pub trait Listener: Send {
    /// `Ok(None)` when nothing interpretable was heard
    async fn capture_utterance(&mut self) -> GhostResult<Option<Utterance>>;
}

/// Factory for the configured spoken-input backend, if any connects
pub async fn create_listener(config: &Config) -> Option<Box<dyn Listener>> {
    match config.speech.asr_engine.as_str() {
        "speechd" | "speechd_ng" => match crate::speechd::SpeechdClient::connect().await {
            Ok(client) => {
                info!("🎙️ Spoken input via speechd-ng");
                Some(Box::new(speechd::SpeechdListener::new(
                    client,
                    config.listen_timeout(),
                )))
            }
            Err(e) => {
                warn!("⚠️ Spoken input unavailable: {}", e);
                None
            }
        },
        "none" => None,
        other => {
            warn!("⚠️ Unknown ASR engine '{}', spoken input disabled", other);
            None
        }
    }
}
