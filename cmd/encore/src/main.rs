//! # Encore Binary
//!
//! Assembles the adapters and runs one of the kiosk's surfaces. Each
//! surface is an independent process sharing only the durable store:
//!
//! ```text
//! encore                  # the public display (default)
//! encore review           # staff queue: counts + pending items
//! encore review approve <id>
//! encore review reject <id>
//! ```

use std::sync::Arc;

use anyhow::bail;
use configs::AppConfig;
use display::{PublishedFeed, RotationController, SpotlightTimer, Ticker};
use domains::models::SubmissionStatus;
use domains::traits::KvStore;
use services::{ModerationService, SystemReviewContext};
use storage_adapters::SubmissionRepository;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "store-file")]
use storage_adapters::FileKvStore;
#[cfg(not(feature = "store-file"))]
use storage_adapters::MemoryKvStore;

fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn KvStore>> {
    #[cfg(feature = "store-file")]
    {
        let store = FileKvStore::open(&config.storage.data_dir)?;
        Ok(Arc::new(store))
    }
    #[cfg(not(feature = "store-file"))]
    {
        let _ = config;
        Ok(Arc::new(MemoryKvStore::new()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::load()?;
    let store = open_store(&config)?;
    let repo = Arc::new(
        SubmissionRepository::new(store).with_retention(config.retention.max_submissions),
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("display") => run_display(config, repo).await,
        Some("review") => run_review(&config, repo, &args[1..]),
        Some(other) => bail!("unknown surface `{other}`; expected `display` or `review`"),
    }
}

/// The public display: sync loop, slideshow, spotlight and ticker, all
/// wired to one shutdown signal so Ctrl-C clears every timer.
async fn run_display(config: AppConfig, repo: Arc<SubmissionRepository>) -> anyhow::Result<()> {
    let feed = PublishedFeed::new(repo);
    let handle = feed.handle();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let display = &config.display;
    let tasks = vec![
        tokio::spawn(feed.run(display.sync_interval(), shutdown_rx.clone())),
        tokio::spawn(RotationController::new(handle.clone()).run(
            display.rotation_interval(),
            display.transition_delay(),
            shutdown_rx.clone(),
        )),
        tokio::spawn(SpotlightTimer::new(handle.clone()).run(
            display.spotlight_interval(),
            display.spotlight_duration(),
            shutdown_rx.clone(),
        )),
        tokio::spawn(Ticker::with_default_messages().run(display.ticker_interval(), shutdown_rx)),
    ];

    info!("encore display surface running, Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;
    info!("shutting down, clearing display timers");
    shutdown_tx.send(true)?;
    for task in tasks {
        let _ = task.await;
    }
    Ok(())
}

fn run_review(
    config: &AppConfig,
    repo: Arc<SubmissionRepository>,
    args: &[String],
) -> anyhow::Result<()> {
    let context = Arc::new(SystemReviewContext::new(
        config.moderation.reviewer_name.clone(),
    ));
    let moderation = ModerationService::new(repo, context);

    match args {
        [] => print_queue(&moderation),
        [action, id] if action.as_str() == "approve" => {
            moderation.approve(id)?;
            println!("approved {id}");
        }
        [action, id] if action.as_str() == "reject" => {
            moderation.reject(id)?;
            println!("rejected {id}");
        }
        _ => bail!("usage: encore review [approve <id> | reject <id>]"),
    }
    Ok(())
}

fn print_queue(moderation: &ModerationService) {
    let counts = moderation.status_counts();
    println!(
        "pending: {}  approved: {}  rejected: {}",
        counts.pending, counts.approved, counts.rejected
    );
    for submission in moderation.list_by_status(SubmissionStatus::Pending) {
        println!(
            "  {}  {:<12}  {:<16}  {}",
            submission.id, submission.nickname, submission.event_type, submission.caption
        );
    }
}
