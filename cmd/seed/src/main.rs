//! Seeds a handful of demo submissions through the real intake path so
//! the display has content to rotate during setup and demos.

use std::sync::Arc;
use std::time::Duration;

use caption_adapters::TemplateCaptionWriter;
use configs::AppConfig;
use domains::models::{CapturedMedia, MediaKind};
use services::{IntakeRequest, IntakeService, ModerationService, SystemReviewContext};
use storage_adapters::{FileKvStore, SubmissionRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let store = Arc::new(FileKvStore::open(&config.storage.data_dir)?);
    let repo = Arc::new(
        SubmissionRepository::new(store).with_retention(config.retention.max_submissions),
    );
    let intake = IntakeService::new(
        repo.clone(),
        Arc::new(TemplateCaptionWriter::new(Duration::ZERO)),
    );

    let guests = [
        ("Jess", "Hen Do", MediaKind::Photo),
        ("DJ Mike", "Stag Night", MediaKind::Video),
        ("Sarah", "Birthday Bash", MediaKind::Photo),
    ];

    let mut first_id = None;
    for (nickname, event_type, media_kind) in guests {
        let captions = intake.caption_candidates(nickname, event_type).await?;
        let submission = intake.submit(IntakeRequest {
            media: CapturedMedia {
                media_kind,
                media_ref: format!("demo:{}", nickname.to_lowercase().replace(' ', "-")),
                overlay: None,
            },
            filter: None,
            nickname: nickname.to_string(),
            event_type: event_type.to_string(),
            caption: captions[0].clone(),
            social_consent: true,
        })?;
        println!("seeded {} ({nickname})", submission.id);
        first_id.get_or_insert(submission.id);
    }

    // Approve one entry so the display shows something immediately.
    if let Some(id) = first_id {
        let moderation = ModerationService::new(
            repo,
            Arc::new(SystemReviewContext::new(
                config.moderation.reviewer_name.clone(),
            )),
        );
        moderation.approve(&id)?;
        println!("approved {id}");
    }

    Ok(())
}
