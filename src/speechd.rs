//! D-Bus client for speechd-ng integration
//!
//! Uses zbus for async D-Bus communication with the speechd-ng daemon.
//! The same connection serves speech output and spoken capture.

use anyhow::Result;
use tracing::{debug, info, warn};
use zbus::{proxy, Connection};

/// D-Bus proxy for the speechd-ng service
#[proxy(
    interface = "org.speech.Service",
    default_service = "org.speech.Service",
    default_path = "/org/speech/Service"
)]
trait SpeechService {
    /// Speak text using default voice
    fn speak(&self, text: &str) -> zbus::Result<()>;

    /// Listen with VAD and return transcript
    fn listen_vad(&self) -> zbus::Result<String>;

    /// Ping the service
    fn ping(&self) -> zbus::Result<String>;
}

/// Client for communicating with speechd-ng
#[derive(Clone)]
pub struct SpeechdClient {
    proxy: SpeechServiceProxy<'static>,
}

impl std::fmt::Debug for SpeechdClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechdClient").finish()
    }
}

impl SpeechdClient {
    /// Connect to the speechd-ng D-Bus service, failing if it does not answer
    pub async fn connect() -> Result<Self> {
        let connection = Connection::session().await?;
        let proxy = SpeechServiceProxy::new(&connection).await?;

        match proxy.ping().await {
            Ok(response) => {
                info!("🔊 Connected to speechd-ng: {}", response);
            }
            Err(e) => {
                warn!("⚠️ speechd-ng not responding: {}", e);
                return Err(anyhow::anyhow!("speechd-ng not responding: {}", e));
            }
        }

        Ok(Self { proxy })
    }

    /// Speak text using TTS
    pub async fn speak_text(&self, text: &str) -> Result<()> {
        debug!("Speaking: {}", text);
        self.proxy.speak(text).await?;
        Ok(())
    }

    /// Listen for speech and return transcript
    pub async fn listen(&self) -> zbus::Result<String> {
        debug!("Listening via speechd-ng...");
        self.proxy.listen_vad().await
    }
}
