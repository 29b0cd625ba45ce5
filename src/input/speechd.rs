//! Spoken commands transcribed by speechd-ng

use super::{InputMode, Listener, Utterance};
use crate::error::{GhostError, GhostResult};
use crate::speechd::SpeechdClient;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct SpeechdListener {
    client: SpeechdClient,
    timeout: Duration,
}

impl SpeechdListener {
    pub fn new(client: SpeechdClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl Listener for SpeechdListener {
    async fn capture_utterance(&mut self) -> GhostResult<Option<Utterance>> {
        info!("🎙️ Listening for commands...");
        let transcript = bounded_capture(self.client.listen(), self.timeout).await?;

        Ok(transcript.map(|text| {
            info!("📝 Heard: '{}'", text);
            Utterance::new(text, InputMode::Spoken)
        }))
    }
}

/// Await one transcription for at most `limit`.
///
/// Silence, timeouts and daemon-side errors are `Ok(None)`; only a lost
/// bus connection is fatal.
pub async fn bounded_capture<F>(listen: F, limit: Duration) -> GhostResult<Option<String>>
where
    F: Future<Output = zbus::Result<String>>,
{
    match tokio::time::timeout(limit, listen).await {
        Err(_) => {
            warn!("⏱️ No transcript within {:?}", limit);
            Ok(None)
        }
        Ok(Err(zbus::Error::InputOutput(e))) => Err(GhostError::Capture(e.to_string())),
        Ok(Err(e)) => {
            warn!("⚠️ Capture failed, treating as unrecognized: {}", e);
            Ok(None)
        }
        Ok(Ok(transcript)) => {
            let transcript = transcript.trim();
            if transcript.is_empty() {
                debug!("Nothing recognized");
                return Ok(None);
            }
            Ok(Some(transcript.to_string()))
        }
    }
}
