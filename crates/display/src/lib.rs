//! # display
//!
//! The public display surface: a polling sync loop over the published
//! cache, the slideshow rotation controller, and the ambient effects
//! (spotlight, ticker). All loops are timer-driven tokio tasks wired to
//! one shutdown signal so teardown clears every timer.

pub mod feed;
pub mod rotation;
pub mod spotlight;
pub mod ticker;

pub use feed::{FeedHandle, PublishedFeed};
pub use rotation::RotationController;
pub use spotlight::SpotlightTimer;
pub use ticker::Ticker;
