//! # caption-adapters
//!
//! Template-based implementation of the `CaptionWriter` port. Stands in
//! for a hosted text-generation model: same contract, same latency shape,
//! deterministic output.

use std::time::Duration;

use async_trait::async_trait;
use domains::traits::CaptionWriter;
use tracing::debug;

pub struct TemplateCaptionWriter {
    latency: Duration,
}

impl TemplateCaptionWriter {
    /// `latency` simulates the round trip to a real caption model; pass
    /// `Duration::ZERO` in tests.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl CaptionWriter for TemplateCaptionWriter {
    async fn suggest(&self, nickname: &str, event_type: &str) -> anyhow::Result<Vec<String>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let occasion = event_type.to_lowercase();
        let candidates = vec![
            format!("{nickname} is absolutely crushing it at this {occasion}! 🎤✨"),
            format!("When {nickname} takes the mic, magic happens! Perfect {occasion} vibes 🌟"),
            format!("{nickname}'s karaoke game is UNREAL! This {occasion} just got legendary! 🔥"),
        ];
        debug!(nickname, event_type, count = candidates.len(), "caption candidates generated");
        Ok(candidates)
    }
}
