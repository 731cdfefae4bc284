//! Repository behavior across execution contexts: the write-through
//! published cache, derivation properties, and the file-backed store.

use std::sync::Arc;

use domains::models::SubmissionStatus;
use integration_tests::{memory_repo, pending};
use storage_adapters::{FileKvStore, SubmissionRepository};

#[test]
fn published_cache_is_visible_to_an_independent_context() {
    let (store, writer) = memory_repo();

    let mut all = writer.add(pending("1", "Jess")).unwrap();
    all[0].status = SubmissionStatus::Approved;
    writer.save(&all).unwrap();

    // A second repository over the same store: the display context.
    let reader = SubmissionRepository::new(store);
    let published = reader.list_published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, "1");
}

#[test]
fn derivation_is_idempotent() {
    let (_, repo) = memory_repo();
    let mut all = Vec::new();
    for (id, status) in [
        ("a", SubmissionStatus::Approved),
        ("b", SubmissionStatus::Pending),
        ("c", SubmissionStatus::Approved),
        ("d", SubmissionStatus::Rejected),
    ] {
        let mut submission = pending(id, "Jess");
        submission.status = status;
        all.push(submission);
    }
    repo.save(&all).unwrap();
    let once = repo.list_published();

    // Recompute over the already-derived subset: nothing changes.
    repo.save(&once).unwrap();
    let twice = repo.list_published();
    assert_eq!(once, twice);

    let order: Vec<_> = once.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, vec!["a", "c"]);
}

#[test]
fn statuses_partition_the_full_list() {
    let (_, repo) = memory_repo();
    let mut all = Vec::new();
    for (id, status) in [
        ("a", SubmissionStatus::Approved),
        ("b", SubmissionStatus::Pending),
        ("c", SubmissionStatus::Rejected),
        ("d", SubmissionStatus::Pending),
    ] {
        let mut submission = pending(id, "Jess");
        submission.status = status;
        all.push(submission);
    }
    repo.save(&all).unwrap();

    let full = repo.list_all();
    let by_status = |status: SubmissionStatus| {
        full.iter().filter(|s| s.status == status).count()
    };
    let total = by_status(SubmissionStatus::Pending)
        + by_status(SubmissionStatus::Approved)
        + by_status(SubmissionStatus::Rejected);
    assert_eq!(total, full.len());
}

#[test]
fn file_store_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = Arc::new(FileKvStore::open(dir.path()).unwrap());
        let repo = SubmissionRepository::new(store);
        let mut all = repo.add(pending("1", "Jess")).unwrap();
        all[0].status = SubmissionStatus::Approved;
        repo.save(&all).unwrap();
    }

    // Fresh adapter over the same directory, as after a process restart.
    let store = Arc::new(FileKvStore::open(dir.path()).unwrap());
    let repo = SubmissionRepository::new(store);
    assert_eq!(repo.list_all().len(), 1);
    assert_eq!(repo.list_published().len(), 1);
}
