//! Browser-driven extraction pipelines.
//!
//! Each public operation is a linear pipeline over one browser session:
//!
//! ```text
//! Launch → Navigate → Consent/Ads → (required UI) → Extract ⇄ Scroll → Trim → Teardown
//! ```
//!
//! Failure at any stage aborts the pipeline; teardown always runs. The
//! pipelines never touch the browser directly, only the
//! [`PageDriver`](crate::browser::PageDriver) capability interface, so
//! their control flow is testable against a scripted page.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tubelens::config::ScrapeConfig;
//! use tubelens::scraper;
//!
//! let config = ScrapeConfig::default();
//! let segments = scraper::get_transcript(&config, "dQw4w9WgXcQ", "en").await?;
//! let listing = scraper::get_channel_videos(&config, "@mkbhd", 30).await?;
//! ```

pub mod channel;
pub mod comments;
pub mod extractor;
pub mod loader;
pub mod metadata;
pub mod overlay;
pub mod search;
pub mod transcript;

pub use channel::{get_channel_videos, search_channel_videos};
pub use comments::get_video_comments;
pub use metadata::get_video_metadata;
pub use search::search_global;
pub use transcript::get_transcript;

pub(crate) fn watch_url(video_id: &str) -> String {
    format!("https://youtube.com/watch?v={video_id}")
}
