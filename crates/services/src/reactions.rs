//! # Emoji Reactions
//!
//! Display-context crowd voting. One active reaction per visitor per
//! submission: picking a new emoji replaces the old one, picking the
//! current one clears it. Counts live in memory only; they belong to the
//! display session, not the durable store.

use std::collections::{BTreeMap, HashMap};

use domains::models::Submission;

/// The fixed emoji palette offered under every displayed item.
pub const REACTION_EMOJIS: [&str; 4] = ["🔥", "😂", "🎉", "😍"];

/// Tallies for a single submission.
#[derive(Debug, Clone)]
pub struct ReactionBoard {
    counts: BTreeMap<String, u32>,
    active: Option<String>,
}

impl Default for ReactionBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactionBoard {
    pub fn new() -> Self {
        let counts = REACTION_EMOJIS
            .iter()
            .map(|e| (e.to_string(), 0))
            .collect();
        Self {
            counts,
            active: None,
        }
    }

    /// Applies a visitor tap. Emojis outside the palette are ignored.
    pub fn react(&mut self, emoji: &str) {
        if !self.counts.contains_key(emoji) {
            return;
        }
        if let Some(previous) = self.active.take() {
            if let Some(count) = self.counts.get_mut(&previous) {
                *count = count.saturating_sub(1);
            }
            if previous == emoji {
                // Tapping the active emoji clears it.
                return;
            }
        }
        if let Some(count) = self.counts.get_mut(emoji) {
            *count += 1;
        }
        self.active = Some(emoji.to_string());
    }

    pub fn count(&self, emoji: &str) -> u32 {
        self.counts.get(emoji).copied().unwrap_or(0)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Total votes across the palette.
    pub fn votes(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Boards keyed by submission id, created lazily as items are shown.
#[derive(Debug, Default)]
pub struct ReactionRegistry {
    boards: HashMap<String, ReactionBoard>,
}

impl ReactionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_mut(&mut self, submission: &Submission) -> &mut ReactionBoard {
        self.boards
            .entry(submission.id.clone())
            .or_insert_with(ReactionBoard::new)
    }

    pub fn votes_for(&self, submission_id: &str) -> u32 {
        self.boards
            .get(submission_id)
            .map(ReactionBoard::votes)
            .unwrap_or(0)
    }
}
