//! # Leaderboard
//!
//! Ranks guests by crowd votes over their approved submissions. Purely
//! derived; rebuild it whenever the published set or the reaction
//! tallies change.

use std::collections::BTreeMap;

use domains::models::Submission;

use crate::reactions::ReactionRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub nickname: String,
    pub votes: u32,
    pub submission_count: usize,
}

/// Builds the ranking from approved submissions and their reaction votes.
/// Ordered by votes, then submission count, then nickname; ranks are
/// 1-based.
pub fn rank(approved: &[Submission], reactions: &ReactionRegistry) -> Vec<LeaderboardEntry> {
    let mut by_nickname: BTreeMap<&str, (u32, usize)> = BTreeMap::new();
    for submission in approved {
        let entry = by_nickname.entry(submission.nickname.as_str()).or_default();
        entry.0 += reactions.votes_for(&submission.id);
        entry.1 += 1;
    }

    let mut entries: Vec<LeaderboardEntry> = by_nickname
        .into_iter()
        .map(|(nickname, (votes, submission_count))| LeaderboardEntry {
            rank: 0,
            nickname: nickname.to_string(),
            votes,
            submission_count,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.votes
            .cmp(&a.votes)
            .then(b.submission_count.cmp(&a.submission_count))
            .then(a.nickname.cmp(&b.nickname))
    });
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position + 1;
    }
    entries
}
