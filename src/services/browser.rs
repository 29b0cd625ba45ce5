//! Browser launch adapter
//!
//! Fire-and-forget navigation in the desktop's default browser.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use tracing::{debug, warn};

/// Opens URLs in an interactive browser
pub trait Browser: Send + Sync {
    /// Launch navigation to `url`. Outcome is not observable.
    fn open(&self, url: &str);
}

/// Delegates to the platform opener (`xdg-open`, `open` or `start`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl Browser for SystemBrowser {
    fn open(&self, url: &str) {
        debug!("🌐 Opening {}", url);
        if let Err(e) = launch(Self::command(url)) {
            warn!("⚠️ Could not launch browser for {}: {}", url, e);
        }
    }
}

/// Spawn `cmd` detached from the console and reap it on a background thread
fn launch(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(std::thread::spawn(move || child.wait()))
}

/// Search-engine URL for a free-text query
pub fn search_url(engine_url: &str, query: &str) -> String {
    format!("{}{}", engine_url, urlencoding::encode(query.trim()))
}
