use tracing::info;

use crate::app::Result;
use crate::browser::{BrowserSession, Locator, PageDriver};
use crate::config::ScrapeConfig;
use crate::domain::channel::{self, ChannelInfo, ChannelSearchResults, ChannelVideos};
use crate::domain::VideoSummary;
use crate::scraper::{extractor, loader, overlay};

const VIDEO_ITEM: &str = "ytd-rich-item-renderer";
const SEARCH_INPUT: &str = "input[placeholder*=\"Search\"]";
const SEARCH_RESULT_ITEM: &str = "ytd-video-renderer, ytd-rich-item-renderer";

const SEARCH_BUTTON: &[Locator] = &[
    Locator::Css("ytd-channel-header-renderer yt-icon-button[aria-label*=\"Search\"]"),
    Locator::Css("ytd-channel-header-renderer button[aria-label*=\"Search\"]"),
    Locator::Css("#channel-header yt-icon-button[aria-label*=\"Search\"]"),
    Locator::Css("yt-icon[icon=\"yt-icons:search\"]"),
];

/// List a channel's uploaded videos, newest first as the page orders
/// them, loading more batches until `limit` is reached or the grid
/// stops growing.
pub async fn get_channel_videos(
    config: &ScrapeConfig,
    channel: &str,
    limit: usize,
) -> Result<ChannelVideos> {
    let session = BrowserSession::launch(config).await?;
    let result = collect_videos(&session, config, channel, limit).await;
    session.shutdown().await;
    result
}

pub(crate) async fn collect_videos(
    page: &dyn PageDriver,
    config: &ScrapeConfig,
    channel: &str,
    limit: usize,
) -> Result<ChannelVideos> {
    page.navigate(&channel::videos_url(channel), config.nav_timeout())
        .await?;
    overlay::dismiss_cookie_consent(page, config).await;
    page.settle(config.settle_long()).await;

    page.wait_for(VIDEO_ITEM, config.player_timeout()).await?;
    info!("Initial videos loaded");

    let channel_info: ChannelInfo =
        serde_json::from_value(page.eval(extractor::CHANNEL_INFO).await?)?;

    let mut all_videos: Vec<VideoSummary> = Vec::new();
    let mut current = 0usize;

    while all_videos.len() < limit {
        all_videos = serde_json::from_value(page.eval(extractor::VIDEO_LIST).await?)?;

        if all_videos.len() == current {
            // No more videos to load
            break;
        }
        current = all_videos.len();

        if current < limit {
            let grown = loader::scroll_and_wait_for_more(
                page,
                VIDEO_ITEM,
                current,
                config.scroll_budget(),
                config.poll_interval(),
            )
            .await?;
            if grown == current {
                break;
            }
        }
    }

    let total_loaded = all_videos.len();
    let videos: Vec<VideoSummary> = all_videos.into_iter().take(limit).collect();
    info!("Extracted {} videos", videos.len());

    Ok(ChannelVideos {
        channel: channel_info,
        videos,
        total_loaded,
        has_more: total_loaded > limit,
    })
}

/// Search within a channel's videos through the channel header's
/// search control.
pub async fn search_channel_videos(
    config: &ScrapeConfig,
    channel: &str,
    query: &str,
    limit: usize,
) -> Result<ChannelSearchResults> {
    let session = BrowserSession::launch(config).await?;
    let result = collect_search(&session, config, channel, query, limit).await;
    session.shutdown().await;
    result
}

pub(crate) async fn collect_search(
    page: &dyn PageDriver,
    config: &ScrapeConfig,
    channel: &str,
    query: &str,
    limit: usize,
) -> Result<ChannelSearchResults> {
    page.navigate(&channel::page_url(channel), config.nav_timeout())
        .await?;
    overlay::dismiss_cookie_consent(page, config).await;
    page.settle(config.settle_long()).await;

    page.click_required(SEARCH_BUTTON, "channel search button")
        .await?;
    info!("Opened channel search");

    page.wait_for(SEARCH_INPUT, config.input_timeout()).await?;
    page.type_and_submit(SEARCH_INPUT, query).await?;

    page.settle(config.settle_long()).await;
    page.wait_for(SEARCH_RESULT_ITEM, config.element_timeout())
        .await?;

    let results: Vec<VideoSummary> =
        serde_json::from_value(page.eval(extractor::CHANNEL_SEARCH_RESULTS).await?)?;
    let total_found = results.len();
    let results: Vec<VideoSummary> = results.into_iter().take(limit).collect();
    info!("Found {} videos matching \"{}\"", total_found, query);

    Ok(ChannelSearchResults {
        query: query.to_string(),
        results,
        total_found,
    })
}
