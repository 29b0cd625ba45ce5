//! Console-only output; the speaker echo is the whole response

use super::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEngine;

#[async_trait]
impl TtsEngine for ConsoleEngine {
    async fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
