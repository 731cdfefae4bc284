//! # Domain Models
//!
//! These structs represent the core entities of the Encore kiosk.
//! We use UUID v7 for time-ordered, globally unique identification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media a guest captured at the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

/// Lifecycle state of a submission. Starts at `Pending`; both reviewed
/// states are re-enterable (staff may flip a verdict), but there is no
/// way back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

/// Raw output of the capture subsystem, before the guest fills in
/// their details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedMedia {
    pub media_kind: MediaKind,
    /// Opaque locator for the captured content (blob URL, file path, ...).
    /// Owned by the capture subsystem; treated as an immutable handle here.
    pub media_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
}

/// A single guest-captured moment plus its metadata, awaiting or having
/// completed staff review.
///
/// Every field except `status` and the review stamp is immutable after
/// creation. The review stamp is overwritten on each verdict, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub media_kind: MediaKind,
    pub media_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub nickname: String,
    pub event_type: String,
    /// Chosen from AI-generated candidates during intake.
    pub caption: String,
    pub social_consent: bool,
    pub created_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Submission {
    /// Whether this submission belongs in the public display feed.
    pub fn is_published(&self) -> bool {
        self.status == SubmissionStatus::Approved
    }

    /// Apply a staff verdict, overwriting any previous review stamp.
    pub fn review(&mut self, verdict: SubmissionStatus, reviewer: String, at: DateTime<Utc>) {
        self.status = verdict;
        self.reviewed_by = Some(reviewer);
        self.reviewed_at = Some(at);
    }
}
