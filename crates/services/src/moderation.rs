//! # Moderation Service
//!
//! The submission lifecycle state machine. Staff read the full list, a
//! verdict maps one record to its new status, and the whole list is saved
//! back, which also rewrites the derived published cache. There is no
//! optimistic-concurrency check: a second moderation context would win
//! wholesale (accepted for single-staff-device use).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domains::error::Result;
use domains::models::{Submission, SubmissionStatus};
use domains::traits::ReviewContext;
use storage_adapters::SubmissionRepository;
use tracing::{info, warn};

/// Dashboard header tallies. The three buckets partition the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// Wall clock plus a configured staff display name.
pub struct SystemReviewContext {
    reviewer_name: String,
}

impl SystemReviewContext {
    pub fn new(reviewer_name: impl Into<String>) -> Self {
        Self {
            reviewer_name: reviewer_name.into(),
        }
    }
}

impl ReviewContext for SystemReviewContext {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn reviewer(&self) -> String {
        self.reviewer_name.clone()
    }
}

pub struct ModerationService {
    repo: Arc<SubmissionRepository>,
    context: Arc<dyn ReviewContext>,
}

impl ModerationService {
    pub fn new(repo: Arc<SubmissionRepository>, context: Arc<dyn ReviewContext>) -> Self {
        Self { repo, context }
    }

    /// Full history, newest last.
    pub fn list(&self) -> Vec<Submission> {
        self.repo.list_all()
    }

    pub fn list_by_status(&self, status: SubmissionStatus) -> Vec<Submission> {
        self.repo
            .list_all()
            .into_iter()
            .filter(|s| s.status == status)
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for submission in self.repo.list_all() {
            match submission.status {
                SubmissionStatus::Pending => counts.pending += 1,
                SubmissionStatus::Approved => counts.approved += 1,
                SubmissionStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }

    /// Publish a submission to the live display.
    pub fn approve(&self, id: &str) -> Result<Vec<Submission>> {
        self.transition(id, SubmissionStatus::Approved)
    }

    /// Keep a submission off the live display.
    pub fn reject(&self, id: &str) -> Result<Vec<Submission>> {
        self.transition(id, SubmissionStatus::Rejected)
    }

    /// A verdict is legal from `Pending` and from either reviewed state;
    /// re-reviewing overwrites the stamp. An unknown id is a soft no-op:
    /// logged, not an error, and the list is still republished.
    fn transition(&self, id: &str, verdict: SubmissionStatus) -> Result<Vec<Submission>> {
        let mut submissions = self.repo.list_all();
        let mut matched = false;
        for submission in submissions.iter_mut() {
            if submission.id == id {
                submission.review(verdict, self.context.reviewer(), self.context.now());
                matched = true;
            }
        }
        if matched {
            info!(id, status = ?verdict, "submission reviewed");
        } else {
            warn!(id, "moderation verdict for unknown submission id, skipping");
        }
        self.repo.save(&submissions)?;
        Ok(submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domains::models::MediaKind;
    use domains::traits::MockReviewContext;
    use storage_adapters::MemoryKvStore;

    fn pending(id: &str) -> Submission {
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
            status: SubmissionStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
        }
    }

    fn fixed_context() -> Arc<dyn ReviewContext> {
        let mut context = MockReviewContext::new();
        context
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2024, 6, 1, 21, 30, 0).unwrap());
        context.expect_reviewer().returning(|| "Alex".to_string());
        Arc::new(context)
    }

    fn service() -> (Arc<SubmissionRepository>, ModerationService) {
        let repo = Arc::new(SubmissionRepository::new(Arc::new(MemoryKvStore::new())));
        let service = ModerationService::new(repo.clone(), fixed_context());
        (repo, service)
    }

    #[test]
    fn approve_publishes_and_stamps() {
        let (repo, service) = service();
        repo.add(pending("1")).unwrap();

        let updated = service.approve("1").unwrap();
        assert_eq!(updated[0].status, SubmissionStatus::Approved);
        assert_eq!(updated[0].reviewed_by.as_deref(), Some("Alex"));

        let published = repo.list_published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].id, "1");
    }

    #[test]
    fn reject_after_approve_unpublishes() {
        let (repo, service) = service();
        repo.add(pending("1")).unwrap();
        service.approve("1").unwrap();
        service.reject("1").unwrap();
        assert!(repo.list_published().is_empty());
        assert_eq!(repo.list_all()[0].status, SubmissionStatus::Rejected);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let (repo, service) = service();
        repo.add(pending("1")).unwrap();
        let before = repo.list_all();

        service.approve("nonexistent").unwrap();
        assert_eq!(repo.list_all(), before);
        assert!(repo.list_published().is_empty());
    }

    #[test]
    fn counts_partition_the_full_list() {
        let (repo, service) = service();
        for id in ["a", "b", "c"] {
            repo.add(pending(id)).unwrap();
        }
        service.approve("a").unwrap();
        service.reject("b").unwrap();

        let counts = service.status_counts();
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.rejected, 1);
        assert_eq!(
            counts.pending + counts.approved + counts.rejected,
            service.list().len()
        );
    }
}
