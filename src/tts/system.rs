//! System TTS engine (speech-dispatcher or eSpeak NG)

use super::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug)]
pub struct SystemEngine;

impl Default for SystemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        debug!("System speaking: {}", text);

        // Both commands block until playback ends
        if let Ok(status) = Command::new("spd-say").arg("--wait").arg(text).status().await {
            if status.success() {
                return Ok(());
            }
        }

        if let Ok(status) = Command::new("espeak-ng").arg(text).status().await {
            if status.success() {
                return Ok(());
            }
        }

        Err(anyhow::anyhow!(
            "No system TTS command found (tried spd-say, espeak-ng)"
        ))
    }

    fn name(&self) -> &str {
        "system"
    }
}
