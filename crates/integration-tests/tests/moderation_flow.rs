//! The submission lifecycle end to end: pending on arrival, published on
//! approval, withdrawn on rejection, and safe against unknown ids.

use chrono::Duration;
use integration_tests::{fixed_review_context, memory_repo, pending, review_time};
use services::ModerationService;

#[test]
fn approve_then_reject_round_trip() {
    let (_, repo) = memory_repo();
    let moderation = ModerationService::new(repo.clone(), fixed_review_context("Alex", review_time()));

    repo.add(pending("1", "Jess")).unwrap();
    assert!(repo.list_published().is_empty());

    moderation.approve("1").unwrap();
    let published = repo.list_published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, "1");
    assert_eq!(published[0].nickname, "Jess");
    assert_eq!(published[0].reviewed_by.as_deref(), Some("Alex"));

    moderation.reject("1").unwrap();
    assert!(repo.list_published().is_empty());
}

#[test]
fn approving_twice_keeps_a_single_published_entry() {
    let (_, repo) = memory_repo();
    let moderation = ModerationService::new(repo.clone(), fixed_review_context("Alex", review_time()));

    repo.add(pending("1", "Jess")).unwrap();
    moderation.approve("1").unwrap();
    moderation.approve("1").unwrap();
    assert_eq!(repo.list_published().len(), 1);
}

#[test]
fn re_review_overwrites_the_stamp() {
    let (_, repo) = memory_repo();

    let first = ModerationService::new(repo.clone(), fixed_review_context("Alex", review_time()));
    repo.add(pending("1", "Jess")).unwrap();
    first.approve("1").unwrap();

    let later = review_time() + Duration::minutes(10);
    let second = ModerationService::new(repo.clone(), fixed_review_context("Robin", later));
    second.reject("1").unwrap();

    let reviewed = &repo.list_all()[0];
    assert_eq!(reviewed.reviewed_by.as_deref(), Some("Robin"));
    assert_eq!(reviewed.reviewed_at, Some(later));
}

#[test]
fn unknown_id_leaves_everything_unchanged() {
    let (_, repo) = memory_repo();
    let moderation = ModerationService::new(repo.clone(), fixed_review_context("Alex", review_time()));

    repo.add(pending("1", "Jess")).unwrap();
    let before_all = repo.list_all();
    let before_published = repo.list_published();

    moderation.approve("nonexistent").unwrap();
    assert_eq!(repo.list_all(), before_all);
    assert_eq!(repo.list_published(), before_published);
}

#[test]
fn moderating_one_of_many_only_publishes_that_one() {
    let (_, repo) = memory_repo();
    let moderation = ModerationService::new(repo.clone(), fixed_review_context("Alex", review_time()));

    for (id, nickname) in [("1", "Jess"), ("2", "Chloe"), ("3", "Emma")] {
        repo.add(pending(id, nickname)).unwrap();
    }
    moderation.approve("2").unwrap();

    let published = repo.list_published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].nickname, "Chloe");

    let counts = moderation.status_counts();
    assert_eq!((counts.pending, counts.approved, counts.rejected), (2, 1, 0));
}
