//! # services
//!
//! Domain services sitting between the surfaces and the repository:
//! kiosk intake, staff moderation, and the crowd-voting extras.

pub mod intake;
pub mod leaderboard;
pub mod moderation;
pub mod reactions;

pub use intake::{IntakeRequest, IntakeService};
pub use leaderboard::{rank, LeaderboardEntry};
pub use moderation::{ModerationService, StatusCounts, SystemReviewContext};
pub use reactions::{ReactionBoard, ReactionRegistry, REACTION_EMOJIS};
