//! # Display Rotation Controller
//!
//! Timer-driven slideshow over the published feed. The controller never
//! owns the list: every access goes through the feed handle, so a swap
//! by the sync loop is picked up on the next render. The raw index is
//! clamped modulo the current length on every read; a feed that shrank
//! between ticks can therefore never index out of bounds.

use std::time::Duration;

use domains::models::Submission;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::feed::FeedHandle;

pub struct RotationController {
    feed: FeedHandle,
    index: usize,
    visible: bool,
}

impl RotationController {
    pub fn new(feed: FeedHandle) -> Self {
        Self {
            feed,
            index: 0,
            visible: true,
        }
    }

    /// The item currently on screen, or `None` for the idle presentation.
    pub fn current(&self) -> Option<Submission> {
        let items = self.feed.snapshot();
        if items.is_empty() {
            return None;
        }
        Some(items[self.index % items.len()].clone())
    }

    /// Zero-based slot and total count, for the progress indicator.
    pub fn position(&self) -> Option<(usize, usize)> {
        let len = self.feed.len();
        if len == 0 {
            None
        } else {
            Some((self.index % len, len))
        }
    }

    /// Steps to the next item, wrapping at the end of the list. Resets to
    /// the start when the feed is empty.
    pub fn advance(&mut self) {
        let len = self.feed.len();
        if len == 0 {
            self.index = 0;
        } else {
            self.index = (self.index % len + 1) % len;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn begin_transition(&mut self) {
        self.visible = false;
    }

    pub fn end_transition(&mut self) {
        self.visible = true;
    }

    fn render(&self) {
        match (self.current(), self.position()) {
            (Some(item), Some((slot, total))) => {
                info!(
                    slot = slot + 1,
                    total,
                    nickname = %item.nickname,
                    event = %item.event_type,
                    caption = %item.caption,
                    "now showing"
                );
            }
            _ => debug!("gallery idle, waiting for the first approved moment"),
        }
    }

    /// Tick loop: fade out, hold the transition delay, advance, fade in.
    /// The first advance happens one full interval after startup so the
    /// opening item gets its dwell time.
    pub async fn run(
        mut self,
        interval: Duration,
        transition_delay: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        self.render();
        let start = tokio::time::Instant::now() + interval;
        let mut ticker = tokio::time::interval_at(start, interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.begin_transition();
                    tokio::time::sleep(transition_delay).await;
                    self.advance();
                    self.end_transition();
                    self.render();
                }
                _ = shutdown.changed() => {
                    debug!("rotation controller stopped");
                    break;
                }
            }
        }
    }
}
