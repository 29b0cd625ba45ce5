//! Speechd-ng TTS backend using D-Bus

use crate::speechd::SpeechdClient;
use crate::tts::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
impl TtsEngine for SpeechdClient {
    async fn speak(&self, text: &str) -> Result<()> {
        self.speak_text(text).await
    }

    fn name(&self) -> &str {
        "speechd_ng"
    }
}
