#![allow(dead_code)]

pub mod mock_input;
pub mod mock_tts;
pub mod stub_services;

use ghost_protocol::config::Config;
use ghost_protocol::dispatcher::Dispatcher;
use ghost_protocol::error::{GhostResult, ServiceResult};
use ghost_protocol::input::{InputMode, Listener};
use ghost_protocol::services::WeatherReport;
use ghost_protocol::session::Session;
use ghost_protocol::tts::Speaker;
use std::sync::Arc;

pub use mock_input::{MockListener, ScriptedLines};
pub use mock_tts::MockTts;
pub use stub_services::{stub_services, sunny, Recorders};

/// Outcome of one scripted session
pub struct SessionRun {
    pub result: GhostResult<()>,
    pub tts: MockTts,
    pub recorders: Recorders,
    pub prompts: Vec<String>,
}

/// Run a whole session against stubs
pub async fn run_session(
    lines: &[&str],
    microphone: Option<MockListener>,
    preset: Option<InputMode>,
    weather: ServiceResult<WeatherReport>,
) -> SessionRun {
    let tts = MockTts::new();
    let (services, recorders) = stub_services(weather);
    let dispatcher = Dispatcher::new(services, &Config::default());

    let console = ScriptedLines::new(lines);
    let prompts = console.prompts.clone();
    let microphone = microphone.map(|m| Box::new(m) as Box<dyn Listener>);

    let mut session = Session::new(
        Speaker::new(Arc::new(tts.clone())),
        Box::new(console),
        microphone,
        dispatcher,
    );
    let result = session.run(preset).await;

    let prompts = prompts.lock().unwrap().clone();
    SessionRun {
        result,
        tts,
        recorders,
        prompts,
    }
}
