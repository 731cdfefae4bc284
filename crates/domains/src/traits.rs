//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be used by the binaries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence contract: a durable, synchronous, string-keyed store
/// scoped to one device. Offers single-key atomic replace only, no
/// transactions across keys.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait KvStore: Send + Sync {
    /// Returns the raw stored value, or `None` when the key was never set.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Atomically replaces the value under `key`.
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Caption generation contract. Given the guest's details, returns an
/// ordered list of candidate captions (at least one on success). May
/// fail; the intake flow surfaces that as a retryable condition.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CaptionWriter: Send + Sync {
    async fn suggest(&self, nickname: &str, event_type: &str) -> anyhow::Result<Vec<String>>;
}

/// Clock and reviewer identity for moderation stamps.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ReviewContext: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Display name recorded in `reviewed_by`.
    fn reviewer(&self) -> String;
}
