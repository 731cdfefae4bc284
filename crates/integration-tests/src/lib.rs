//! Shared fixtures for the integration suite.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use domains::models::{MediaKind, Submission, SubmissionStatus};
use domains::traits::{MockReviewContext, ReviewContext};
use storage_adapters::{MemoryKvStore, SubmissionRepository};

/// A pending photo submission with predictable fields.
pub fn pending(id: &str, nickname: &str) -> Submission {
    Submission {
        id: id.to_string(),
        media_kind: MediaKind::Photo,
        media_ref: format!("blob:{id}"),
        overlay: None,
        filter: None,
        nickname: nickname.to_string(),
        event_type: "Hen Do".to_string(),
        caption: format!("{nickname} smashed it!"),
        social_consent: true,
        created_at: Utc::now(),
        status: SubmissionStatus::Pending,
        reviewed_by: None,
        reviewed_at: None,
    }
}

pub fn review_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 21, 30, 0).unwrap()
}

/// A deterministic clock/identity pair for review stamps.
pub fn fixed_review_context(reviewer: &str, at: DateTime<Utc>) -> Arc<dyn ReviewContext> {
    let reviewer = reviewer.to_string();
    let mut context = MockReviewContext::new();
    context.expect_now().returning(move || at);
    context.expect_reviewer().returning(move || reviewer.clone());
    Arc::new(context)
}

/// A repository over a fresh in-memory store, plus the store handle so
/// tests can build a second "execution context" over the same data.
pub fn memory_repo() -> (Arc<MemoryKvStore>, Arc<SubmissionRepository>) {
    let store = Arc::new(MemoryKvStore::new());
    let repo = Arc::new(SubmissionRepository::new(store.clone()));
    (store, repo)
}
