//! Session Loop
//!
//! Drives one session from mode selection to exit:
//!
//! ```text
//! ModeSelection -> Listening/Reading -> Dispatching -> Speaking -> Listening/Reading ...
//!                                            |
//!                                            +-> Ended (exit intent)
//! ```
//!
//! Exactly one command is handled at a time. Adapter failures arrive as
//! rendered sentences; only capability failures (output device gone,
//! input closed) end the session early.

use crate::core::normalize;
use crate::dispatcher::{Dispatch, Dispatcher};
use crate::error::{GhostResult, ServiceError};
use crate::input::{InputMode, LineSource, Listener, Utterance};
use crate::render;
use crate::services::clock::format_date_time;
use crate::tts::Speaker;
use chrono::Timelike;
use tracing::{debug, info, warn};

pub const MODE_PROMPT: &str = "Select Command Type: ";
pub const COMMAND_PROMPT: &str = "Please type a command: ";
pub const MODE_HELP: &str = "Please choose either 'speech' or 'text'.";
pub const SPEECH_UNAVAILABLE: &str =
    "Speech input is not available right now. Please choose 'text'.";

/// Loop phases, logged on transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ModeSelection,
    Listening,
    Dispatching,
    Speaking,
    Ended,
}

/// Mutable state owned by the loop alone
#[derive(Debug)]
struct SessionState {
    mode: Option<InputMode>,
    phase: Phase,
}

impl SessionState {
    fn new() -> Self {
        Self {
            mode: None,
            phase: Phase::ModeSelection,
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!("Session {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }
}

/// Capabilities and dispatcher injected for one session
pub struct Session {
    speaker: Speaker,
    console: Box<dyn LineSource>,
    microphone: Option<Box<dyn Listener>>,
    dispatcher: Dispatcher,
}

impl Session {
    pub fn new(
        speaker: Speaker,
        console: Box<dyn LineSource>,
        microphone: Option<Box<dyn Listener>>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            speaker,
            console,
            microphone,
            dispatcher,
        }
    }

    /// Speak the opening greeting with time and weather
    pub async fn greet(&self) -> GhostResult<()> {
        let services = self.dispatcher.services();
        let now = services.clock.now();
        let weather = services.weather.fetch().await;

        let greeting = render::greeting(
            now.hour(),
            services.clock.location(),
            &format_date_time(&now),
            &weather,
        );
        self.speaker.say(greeting.text()).await
    }

    /// Run until the exit intent is recognized.
    ///
    /// `preset` skips the mode prompt when it can be honored.
    pub async fn run(&mut self, preset: Option<InputMode>) -> GhostResult<()> {
        let mut state = SessionState::new();

        state.mode = Some(self.select_mode(preset).await?);
        info!("✅ Session ready ({:?} input)", state.mode);
        state.enter(Phase::Listening);

        while !state.is_ended() {
            let mode = state.mode.unwrap_or(InputMode::Typed);
            let Some(utterance) = self.acquire(mode).await? else {
                continue;
            };

            state.enter(Phase::Dispatching);
            let command = normalize(&utterance.text);
            debug!(
                "Command '{}' ({:?} at {})",
                command, utterance.mode, utterance.captured_at
            );

            match self.dispatcher.classify_and_dispatch(&command).await {
                Dispatch::Exit(ack) => {
                    self.speaker.say(ack.text()).await?;
                    state.enter(Phase::Ended);
                }
                Dispatch::Respond(response) => {
                    state.enter(Phase::Speaking);
                    self.speaker.say(response.text()).await?;
                    state.enter(Phase::Listening);
                }
            }
        }

        info!("👋 Session ended");
        Ok(())
    }

    async fn select_mode(&mut self, preset: Option<InputMode>) -> GhostResult<InputMode> {
        match preset {
            Some(InputMode::Spoken) if self.microphone.is_none() => {
                warn!("⚠️ Spoken input requested but no listener is available");
            }
            Some(mode) => return Ok(mode),
            None => {}
        }

        loop {
            let choice = self.console.read_line(MODE_PROMPT).await?;
            match InputMode::from_choice(&choice) {
                Some(InputMode::Spoken) if self.microphone.is_none() => {
                    self.speaker.say(SPEECH_UNAVAILABLE).await?;
                }
                Some(mode) => return Ok(mode),
                None => self.speaker.say(MODE_HELP).await?,
            }
        }
    }

    /// One capture attempt. `None` re-enters Listening.
    async fn acquire(&mut self, mode: InputMode) -> GhostResult<Option<Utterance>> {
        match (mode, self.microphone.as_mut()) {
            (InputMode::Spoken, Some(microphone)) => match microphone.capture_utterance().await? {
                Some(utterance) if !normalize(&utterance.text).is_empty() => Ok(Some(utterance)),
                _ => {
                    let failure = ServiceError::RecognitionFailure;
                    self.speaker.say(&failure.to_string()).await?;
                    Ok(None)
                }
            },
            _ => {
                let line = self.console.read_line(COMMAND_PROMPT).await?;
                if normalize(&line).is_empty() {
                    return Ok(None);
                }
                Ok(Some(Utterance::new(line, InputMode::Typed)))
            }
        }
    }
}
