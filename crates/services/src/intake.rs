//! # Intake Service
//!
//! Orchestrates the kiosk capture flow: caption candidates from the
//! caption port, then assembly and persistence of the final submission
//! with `status = pending`. Caption failures are retryable; nothing is
//! persisted until `submit`.

use std::sync::Arc;

use chrono::Utc;
use domains::error::{AppError, Result};
use domains::models::{CapturedMedia, Submission, SubmissionStatus};
use domains::traits::CaptionWriter;
use storage_adapters::SubmissionRepository;
use tracing::info;
use uuid::Uuid;

/// Everything the guest chose before pressing submit.
#[derive(Debug, Clone)]
pub struct IntakeRequest {
    pub media: CapturedMedia,
    pub filter: Option<String>,
    pub nickname: String,
    pub event_type: String,
    pub caption: String,
    pub social_consent: bool,
}

pub struct IntakeService {
    repo: Arc<SubmissionRepository>,
    captions: Arc<dyn CaptionWriter>,
}

impl IntakeService {
    pub fn new(repo: Arc<SubmissionRepository>, captions: Arc<dyn CaptionWriter>) -> Self {
        Self { repo, captions }
    }

    /// Candidate captions for the guest to pick from. At least one on
    /// success; a port failure surfaces as a retryable external error.
    pub async fn caption_candidates(
        &self,
        nickname: &str,
        event_type: &str,
    ) -> Result<Vec<String>> {
        if nickname.trim().is_empty() || event_type.trim().is_empty() {
            return Err(AppError::ValidationError(
                "nickname and event type are required before captions".to_string(),
            ));
        }
        let candidates = self
            .captions
            .suggest(nickname.trim(), event_type)
            .await
            .map_err(|e| AppError::ExternalService(e.to_string()))?;
        if candidates.is_empty() {
            return Err(AppError::ExternalService(
                "caption service returned no candidates".to_string(),
            ));
        }
        Ok(candidates)
    }

    /// Validates and persists the submission for staff review.
    pub fn submit(&self, request: IntakeRequest) -> Result<Submission> {
        let nickname = request.nickname.trim();
        if nickname.is_empty() {
            return Err(AppError::ValidationError("nickname is required".to_string()));
        }
        if request.caption.trim().is_empty() {
            return Err(AppError::ValidationError("caption is required".to_string()));
        }

        let submission = Submission {
            id: Uuid::now_v7().to_string(),
            media_kind: request.media.media_kind,
            media_ref: request.media.media_ref,
            overlay: request.media.overlay,
            filter: request.filter,
            nickname: nickname.to_string(),
            event_type: request.event_type,
            caption: request.caption,
            social_consent: request.social_consent,
            created_at: Utc::now(),
            status: SubmissionStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
        };

        self.repo.add(submission.clone())?;
        info!(id = %submission.id, nickname = %submission.nickname, "submission accepted for review");
        Ok(submission)
    }
}
