//! TTS (Text-to-Speech) Module
//!
//! Output capability for the session. Every backend sits behind
//! `TtsEngine`; `Speaker` adds the console echo the session relies on.

use crate::config::Config;
use crate::error::{GhostError, GhostResult};
use anyhow::Result;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub mod console;
pub mod speechd;
pub mod system;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the given text, returning once playback has finished
    async fn speak(&self, text: &str) -> Result<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured TTS engine
pub async fn create_engine(config: &Config) -> Result<Arc<dyn TtsEngine>> {
    info!("🛠️ Creating TTS engine: {}", config.speech.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.speech.tts_engine.as_str() {
        "speechd_ng" | "speechd" => {
            info!("  - Using Speechd TTS");
            let client = crate::speechd::SpeechdClient::connect().await?;
            Arc::new(client)
        }
        "console" => {
            info!("  - Using console output only");
            Arc::new(console::ConsoleEngine)
        }
        "system" => {
            info!("  - Using System TTS");
            Arc::new(system::SystemEngine::new())
        }
        _ => {
            warn!(
                "  - Unknown engine '{}', falling back to System",
                config.speech.tts_engine
            );
            Arc::new(system::SystemEngine::new())
        }
    };
    info!("✅ TTS engine '{}' initialized", engine.name());
    Ok(engine)
}

/// Output capability: echoes to the console, then vocalizes
#[derive(Debug, Clone)]
pub struct Speaker {
    engine: Arc<dyn TtsEngine>,
}

impl Speaker {
    pub fn new(engine: Arc<dyn TtsEngine>) -> Self {
        Self { engine }
    }

    /// A failing engine is fatal to the session
    pub async fn say(&self, text: &str) -> GhostResult<()> {
        {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
        debug!("🗣️ {}", text);

        self.engine
            .speak(text)
            .await
            .map_err(|e| GhostError::Tts(format!("{} engine failed: {}", self.engine.name(), e)))
    }
}
