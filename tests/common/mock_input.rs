//! Scripted input for session tests

use async_trait::async_trait;
use ghost_protocol::error::{GhostError, GhostResult};
use ghost_protocol::input::{InputMode, LineSource, Listener, Utterance};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays typed lines, then reports the stream closed
pub struct ScriptedLines {
    lines: VecDeque<String>,
    /// Every prompt shown, in order
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLines {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LineSource for ScriptedLines {
    async fn read_line(&mut self, prompt: &str) -> GhostResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.lines.pop_front().ok_or(GhostError::InputClosed)
    }
}

/// Replays transcripts; `None` entries simulate unrecognized audio
pub struct MockListener {
    transcripts: VecDeque<Option<String>>,
}

impl MockListener {
    pub fn new(transcripts: Vec<Option<&str>>) -> Self {
        Self {
            transcripts: transcripts
                .into_iter()
                .map(|t| t.map(str::to_string))
                .collect(),
        }
    }
}

#[async_trait]
impl Listener for MockListener {
    async fn capture_utterance(&mut self) -> GhostResult<Option<Utterance>> {
        match self.transcripts.pop_front() {
            Some(Some(text)) => Ok(Some(Utterance::new(text, InputMode::Spoken))),
            Some(None) => Ok(None),
            None => Err(GhostError::Capture("microphone unplugged".into())),
        }
    }
}
