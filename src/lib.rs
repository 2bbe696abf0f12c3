//! # Tubelens
//!
//! Extraction of transcripts, channel listings, comments, metadata and
//! search results from YouTube's rendered pages, driven through a
//! headless Chromium instance.
//!
//! The site exposes no stable public API for these fields, so every
//! operation loads the real page, waits for client-side rendering, and
//! reads the live DOM through CSS selectors with fallback candidates
//! per field.
//!
//! ## Architecture
//!
//! ```text
//! Launch → Navigate → Consent/Ads → (required UI) → Extract ⇄ Scroll → Trim → Teardown
//! ```
//!
//! - [`browser`]: session lifecycle and the page capability interface
//! - [`scraper`]: one pipeline per operation, plus the incremental loader
//! - [`domain`]: the extracted record types and result envelopes
//!
//! ## Quick Start
//!
//! ```bash
//! # A video's transcript
//! tubelens transcript dQw4w9WgXcQ
//!
//! # A channel's latest uploads
//! tubelens channel-videos @mkbhd --limit 30
//!
//! # Comments, newest first
//! tubelens comments dQw4w9WgXcQ --sort newest
//!
//! # Global search
//! tubelens search "rust async" --max-results 10
//! ```
//!
//! Results print as JSON on stdout; logs go to stderr (`RUST_LOG`
//! controls verbosity).

/// Error types shared across the crate.
pub mod app;

/// Headless browser session management.
///
/// - [`BrowserSession`](browser::BrowserSession): chromiumoxide-backed session
/// - [`PageDriver`](browser::PageDriver): the narrow capability interface
///   the pipelines are written against
/// - [`Locator`](browser::Locator): CSS-or-text rules for finding controls
pub mod browser;

/// Command-line interface using clap.
///
/// One subcommand per operation: `transcript`, `channel-videos`,
/// `channel-search`, `comments`, `metadata`, `search`.
pub mod cli;

/// Configuration loading.
///
/// Reads `~/.config/tubelens/config.toml`; every timing and browser
/// knob has a default matching the site's rendering behavior.
pub mod config;

/// Extracted record types and result envelopes.
///
/// All records are flat and stringly-typed: fields carry the page's
/// display strings as-is, serialized as camelCase JSON.
pub mod domain;

/// The extraction pipelines.
///
/// - [`get_transcript`](scraper::get_transcript)
/// - [`get_channel_videos`](scraper::get_channel_videos)
/// - [`search_channel_videos`](scraper::search_channel_videos)
/// - [`get_video_comments`](scraper::get_video_comments)
/// - [`get_video_metadata`](scraper::get_video_metadata)
/// - [`search_global`](scraper::search_global)
pub mod scraper;
