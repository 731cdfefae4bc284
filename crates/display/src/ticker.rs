//! Scrolling ticker strip along the top of the display: a fixed message
//! list cycled on its own timer, same wraparound arithmetic as the
//! slideshow.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

pub struct Ticker {
    messages: Vec<String>,
    index: usize,
}

impl Ticker {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages, index: 0 }
    }

    /// House hype lines shown between guest shout-outs.
    pub fn with_default_messages() -> Self {
        Self::new(vec![
            "🎤 Grab the mic, your moment goes live on the big screen!".to_string(),
            "📸 New snaps are reviewed and up within minutes!".to_string(),
            "🏆 Tag us on your socials & win free shots!".to_string(),
            "💫 Next up: more karaoke magic!".to_string(),
        ])
    }

    pub fn current(&self) -> Option<&str> {
        if self.messages.is_empty() {
            return None;
        }
        Some(&self.messages[self.index % self.messages.len()])
    }

    pub fn advance(&mut self) {
        let len = self.messages.len();
        if len == 0 {
            self.index = 0;
        } else {
            self.index = (self.index % len + 1) % len;
        }
    }

    pub async fn run(mut self, interval: Duration, mut shutdown: watch::Receiver<bool>) {
        let start = tokio::time::Instant::now() + interval;
        let mut ticker = tokio::time::interval_at(start, interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.advance();
                    if let Some(line) = self.current() {
                        info!(line, "ticker");
                    }
                }
                _ = shutdown.changed() => {
                    debug!("ticker stopped");
                    break;
                }
            }
        }
    }
}
