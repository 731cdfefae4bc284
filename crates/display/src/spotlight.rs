//! Periodic spotlight effect: every so often, hold a highlight on the
//! current item for a few seconds. Skipped entirely while the feed is
//! empty.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::feed::FeedHandle;

pub struct SpotlightTimer {
    feed: FeedHandle,
    active: Arc<AtomicBool>,
}

impl SpotlightTimer {
    pub fn new(feed: FeedHandle) -> Self {
        Self {
            feed,
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag the renderer can sample.
    pub fn flag(&self) -> Arc<AtomicBool> {
        self.active.clone()
    }

    pub fn should_fire(&self) -> bool {
        !self.feed.is_empty()
    }

    pub async fn run(
        self,
        every: Duration,
        hold: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let start = tokio::time::Instant::now() + every;
        let mut ticker = tokio::time::interval_at(start, every);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !self.should_fire() {
                        continue;
                    }
                    self.active.store(true, Ordering::Relaxed);
                    info!("spotlight on");
                    tokio::select! {
                        _ = tokio::time::sleep(hold) => {}
                        _ = shutdown.changed() => {
                            self.active.store(false, Ordering::Relaxed);
                            break;
                        }
                    }
                    self.active.store(false, Ordering::Relaxed);
                    debug!("spotlight off");
                }
                _ = shutdown.changed() => {
                    debug!("spotlight timer stopped");
                    break;
                }
            }
        }
    }
}
