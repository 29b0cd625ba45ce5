//! Typed commands from standard input

use super::LineSource;
use crate::error::{GhostError, GhostResult};
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct StdinLines {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinLines {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl LineSource for StdinLines {
    async fn read_line(&mut self, prompt: &str) -> GhostResult<String> {
        {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }

        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => Err(GhostError::InputClosed),
        }
    }
}
