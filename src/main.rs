//! Ghost Protocol - voice and text command assistant

use anyhow::Result;
use clap::{Parser, ValueEnum};
use ghost_protocol::config::{self, Config};
use ghost_protocol::dispatcher::Dispatcher;
use ghost_protocol::error::GhostError;
use ghost_protocol::input::{self, InputMode, StdinLines};
use ghost_protocol::services::Services;
use ghost_protocol::session::Session;
use ghost_protocol::tts::{self, Speaker};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Speech,
    Text,
}

impl From<ModeArg> for InputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Speech => InputMode::Spoken,
            ModeArg::Text => InputMode::Typed,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input mode; skips the selection prompt
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Skip the opening greeting
    #[arg(long)]
    no_greeting: bool,
}

fn init_logging(verbose: bool, config_level: &str) -> Result<()> {
    let level = if verbose {
        Level::DEBUG
    } else {
        config_level.parse().unwrap_or(Level::INFO)
    };

    // Logs go to stderr; stdout carries the spoken text
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);
    match EnvFilter::try_from_default_env() {
        Ok(filter) => {
            tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())?
        }
        Err(_) => {
            tracing::subscriber::set_global_default(builder.with_max_level(level).finish())?
        }
    }
    Ok(())
}

/// Load config under a provisional warn-level subscriber writing to `writer`.
/// The real subscriber depends on the loaded `log_level`.
fn load_config<W>(path: &Path, writer: W) -> Result<Config>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let provisional = FmtSubscriber::builder()
        .with_writer(writer)
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::with_default(provisional, || Config::load_from(path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let dotenv = dotenvy::dotenv();

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let config = load_config(&config_path, std::io::stderr)?;

    init_logging(args.verbose, &config.log_level)?;
    info!("👻 Ghost Protocol v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let services = Services::from_config(&config)?;
    let dispatcher = Dispatcher::new(services, &config);

    let engine = tts::create_engine(&config).await?;
    let speaker = Speaker::new(engine);
    let microphone = input::create_listener(&config).await;

    let mut session = Session::new(speaker, Box::new(StdinLines::new()), microphone, dispatcher);

    let outcome = async {
        if !args.no_greeting {
            session.greet().await?;
        }
        session.run(args.mode.map(InputMode::from)).await
    }
    .await;

    match outcome {
        Ok(()) => Ok(()),
        Err(GhostError::InputClosed) => {
            warn!("⚠️ Input closed, ending session");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
