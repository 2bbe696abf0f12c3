use serde::Serialize;

use crate::app::Result;
use crate::config::ScrapeConfig;
use crate::domain::{CommentSort, ResultType};
use crate::scraper;

pub async fn transcript(config: &ScrapeConfig, video_id: &str, lang: &str) -> Result<()> {
    let segments = scraper::get_transcript(config, video_id, lang).await?;
    print_json(&segments)
}

pub async fn channel_videos(config: &ScrapeConfig, channel: &str, limit: usize) -> Result<()> {
    let listing = scraper::get_channel_videos(config, channel, limit).await?;
    print_json(&listing)
}

pub async fn channel_search(
    config: &ScrapeConfig,
    channel: &str,
    query: &str,
    limit: usize,
) -> Result<()> {
    let results = scraper::search_channel_videos(config, channel, query, limit).await?;
    print_json(&results)
}

pub async fn comments(
    config: &ScrapeConfig,
    video_id: &str,
    limit: usize,
    sort_by: CommentSort,
) -> Result<()> {
    let comments = scraper::get_video_comments(config, video_id, limit, sort_by).await?;
    print_json(&comments)
}

pub async fn metadata(config: &ScrapeConfig, video_id: &str, expand_description: bool) -> Result<()> {
    let metadata = scraper::get_video_metadata(config, video_id, expand_description).await?;
    print_json(&metadata)
}

pub async fn search(
    config: &ScrapeConfig,
    query: &str,
    max_results: usize,
    result_types: &[ResultType],
) -> Result<()> {
    let results = scraper::search_global(config, query, max_results, result_types).await?;
    print_json(&results)
}

/// Results go to stdout as pretty JSON; diagnostics stay on stderr.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
