//! # Publication Sync Loop
//!
//! The display surface has no channel to the moderation surface; the two
//! share only the durable store. This loop polls the published cache and
//! swaps the in-memory copy when it changes, so the rotation controller
//! always renders from a list at most one polling interval stale.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use domains::models::Submission;
use storage_adapters::SubmissionRepository;
use tokio::sync::watch;
use tracing::debug;

/// Cheap cloneable view of the display's current published list.
#[derive(Clone, Default)]
pub struct FeedHandle {
    items: Arc<RwLock<Vec<Submission>>>,
}

impl FeedHandle {
    pub fn snapshot(&self) -> Vec<Submission> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn replace_if_changed(&self, fresh: Vec<Submission>) -> bool {
        let mut guard = self.items.write().unwrap_or_else(PoisonError::into_inner);
        if *guard == fresh {
            return false;
        }
        *guard = fresh;
        true
    }
}

pub struct PublishedFeed {
    repo: Arc<SubmissionRepository>,
    handle: FeedHandle,
}

impl PublishedFeed {
    pub fn new(repo: Arc<SubmissionRepository>) -> Self {
        Self {
            repo,
            handle: FeedHandle::default(),
        }
    }

    pub fn handle(&self) -> FeedHandle {
        self.handle.clone()
    }

    /// One reconciliation step: re-read the published cache and swap the
    /// in-memory copy if it differs. Returns whether anything changed.
    pub fn refresh(&self) -> bool {
        let fresh = self.repo.list_published();
        let count = fresh.len();
        let changed = self.handle.replace_if_changed(fresh);
        if changed {
            debug!(count, "published set changed, display feed updated");
        }
        changed
    }

    /// Polls until the shutdown signal flips. The first refresh happens
    /// immediately so the display is populated on startup.
    pub async fn run(self, interval: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.refresh();
                }
                _ = shutdown.changed() => {
                    debug!("publication sync loop stopped");
                    break;
                }
            }
        }
    }
}
