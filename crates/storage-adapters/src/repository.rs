//! # Submission Repository
//!
//! Sole writer for the two persisted collections: `submissions` (full
//! history) and `published` (derived cache of approved items, original
//! order). Every mutation rewrites both keys, so a reader of `published`
//! never has to touch pending or rejected content.

use std::sync::Arc;

use domains::error::{AppError, Result};
use domains::models::Submission;
use domains::traits::KvStore;
use serde::Serialize;
use tracing::{debug, warn};

pub const SUBMISSIONS_KEY: &str = "submissions";
pub const PUBLISHED_KEY: &str = "published";

pub struct SubmissionRepository {
    store: Arc<dyn KvStore>,
    /// When set, the oldest entries beyond this count are dropped at add
    /// time. `None` keeps the full event history.
    max_submissions: Option<usize>,
}

impl SubmissionRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            max_submissions: None,
        }
    }

    pub fn with_retention(mut self, max_submissions: Option<usize>) -> Self {
        self.max_submissions = max_submissions;
        self
    }

    /// All submissions in insertion order. Absent or corrupt store content
    /// degrades to an empty list.
    pub fn list_all(&self) -> Vec<Submission> {
        self.read_collection(SUBMISSIONS_KEY)
    }

    /// The derived cache of approved submissions, read directly from its
    /// own key and never recomputed here. This is the narrow read path
    /// the display surface polls.
    pub fn list_published(&self) -> Vec<Submission> {
        self.read_collection(PUBLISHED_KEY)
    }

    /// Appends a new submission and returns the updated full list.
    pub fn add(&self, submission: Submission) -> Result<Vec<Submission>> {
        let mut all = self.list_all();
        if all.iter().any(|s| s.id == submission.id) {
            return Err(AppError::Conflict(format!(
                "submission {} already exists",
                submission.id
            )));
        }
        all.push(submission);

        if let Some(cap) = self.max_submissions {
            if all.len() > cap {
                let dropped = all.len() - cap;
                all.drain(..dropped);
                warn!(dropped, cap, "retention cap reached, dropped oldest submissions");
            }
        }

        self.persist(&all)?;
        Ok(all)
    }

    /// Replaces the full list wholesale and recomputes the published
    /// cache. This is the only mutation path moderation uses; whole-list
    /// replace means concurrent writers are last-writer-wins.
    pub fn save(&self, submissions: &[Submission]) -> Result<()> {
        self.persist(submissions)
    }

    fn persist(&self, all: &[Submission]) -> Result<()> {
        let published: Vec<&Submission> = all.iter().filter(|s| s.is_published()).collect();
        debug!(total = all.len(), published = published.len(), "persisting collections");
        self.write_collection(SUBMISSIONS_KEY, &all)?;
        self.write_collection(PUBLISHED_KEY, &published)?;
        Ok(())
    }

    fn read_collection(&self, key: &str) -> Vec<Submission> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "store read failed, treating collection as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(key, error = %e, "stored collection is malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &T) -> Result<()> {
        let raw = serde_json::to_string(items)
            .map_err(|e| AppError::Internal(format!("serializing {key}: {e}")))?;
        self.store
            .set(key, &raw)
            .map_err(|e| AppError::Internal(format!("writing {key}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv_memory::MemoryKvStore;
    use chrono::Utc;
    use domains::models::{MediaKind, SubmissionStatus};
    use domains::traits::MockKvStore;

    fn submission(id: &str, status: SubmissionStatus) -> Submission {
        Submission {
            id: id.to_string(),
            media_kind: MediaKind::Photo,
            media_ref: format!("blob:{id}"),
            overlay: None,
            filter: None,
            nickname: "Jess".to_string(),
            event_type: "Hen Do".to_string(),
            caption: "Jess is crushing it!".to_string(),
            social_consent: true,
            created_at: Utc::now(),
            status,
            reviewed_by: None,
            reviewed_at: None,
        }
    }

    fn repo() -> SubmissionRepository {
        SubmissionRepository::new(Arc::new(MemoryKvStore::new()))
    }

    #[test]
    fn add_persists_and_returns_the_new_list() {
        let repo = repo();
        let all = repo.add(submission("1", SubmissionStatus::Pending)).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(repo.list_all().len(), 1);
        assert!(repo.list_published().is_empty());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let repo = repo();
        repo.add(submission("1", SubmissionStatus::Pending)).unwrap();
        let err = repo
            .add(submission("1", SubmissionStatus::Pending))
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.list_all().len(), 1);
    }

    #[test]
    fn save_recomputes_the_published_cache() {
        let repo = repo();
        let mut all = repo.add(submission("1", SubmissionStatus::Pending)).unwrap();
        all[0].status = SubmissionStatus::Approved;
        repo.save(&all).unwrap();

        let published = repo.list_published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].id, "1");
    }

    #[test]
    fn published_preserves_insertion_order() {
        let repo = repo();
        for id in ["a", "b", "c"] {
            repo.add(submission(id, SubmissionStatus::Approved)).unwrap();
        }
        let order: Vec<_> = repo.list_published().into_iter().map(|s| s.id).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn retention_cap_drops_the_oldest() {
        let repo = SubmissionRepository::new(Arc::new(MemoryKvStore::new()))
            .with_retention(Some(2));
        for id in ["a", "b", "c"] {
            repo.add(submission(id, SubmissionStatus::Pending)).unwrap();
        }
        let kept: Vec<_> = repo.list_all().into_iter().map(|s| s.id).collect();
        assert_eq!(kept, vec!["b", "c"]);
    }

    #[test]
    fn store_read_failure_degrades_to_empty() {
        let mut store = MockKvStore::new();
        store
            .expect_get()
            .returning(|_| Err(anyhow::anyhow!("disk gone")));
        let repo = SubmissionRepository::new(Arc::new(store));
        assert!(repo.list_all().is_empty());
        assert!(repo.list_published().is_empty());
    }

    #[test]
    fn store_write_failure_surfaces_as_internal() {
        let mut store = MockKvStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));
        let repo = SubmissionRepository::new(Arc::new(store));
        let err = repo
            .add(submission("1", SubmissionStatus::Pending))
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
