//! # configs
//!
//! Layered configuration for the Encore binaries: embedded defaults,
//! then an optional `encore.toml`, then `ENCORE_*` environment variables
//! (nested keys separated by `__`, e.g. `ENCORE_DISPLAY__SYNC_INTERVAL_MS`).

use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Where the key-value store keeps its data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

/// Timer cadences for the display surface. All values are milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How often the slideshow advances to the next item.
    pub rotation_interval_ms: u64,
    /// Fade-out hold between hiding the current item and showing the next.
    pub transition_delay_ms: u64,
    /// How often the display re-reads the published set from the store.
    pub sync_interval_ms: u64,
    pub spotlight_interval_ms: u64,
    pub spotlight_duration_ms: u64,
    pub ticker_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Display name recorded on review stamps.
    pub reviewer_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// When set, the oldest submissions beyond this count are dropped at
    /// add time. Unset means submissions accumulate for the whole event.
    pub max_submissions: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionConfig {
    /// Simulated latency of the caption service adapter.
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub moderation: ModerationConfig,
    pub retention: RetentionConfig,
    pub caption: CaptionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            storage: StorageConfig {
                data_dir: "./data".to_string(),
            },
            display: DisplayConfig {
                rotation_interval_ms: 4_000,
                transition_delay_ms: 500,
                sync_interval_ms: 5_000,
                spotlight_interval_ms: 30_000,
                spotlight_duration_ms: 5_000,
                ticker_interval_ms: 4_000,
            },
            moderation: ModerationConfig {
                reviewer_name: "Staff".to_string(),
            },
            retention: RetentionConfig {
                max_submissions: None,
            },
            caption: CaptionConfig { latency_ms: 2_000 },
        }
    }
}

impl AppConfig {
    /// Loads `.env`, then merges defaults, `encore.toml` (if present) and
    /// `ENCORE_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let merged = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("encore").required(false))
            .add_source(Environment::with_prefix("ENCORE").separator("__"))
            .build()?;

        let app: AppConfig = merged.try_deserialize()?;
        debug!(?app, "configuration loaded");
        Ok(app)
    }
}

impl DisplayConfig {
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_millis(self.sync_interval_ms)
    }

    pub fn spotlight_interval(&self) -> Duration {
        Duration::from_millis(self.spotlight_interval_ms)
    }

    pub fn spotlight_duration(&self) -> Duration {
        Duration::from_millis(self.spotlight_duration_ms)
    }

    pub fn ticker_interval(&self) -> Duration {
        Duration::from_millis(self.ticker_interval_ms)
    }
}

impl CaptionConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
