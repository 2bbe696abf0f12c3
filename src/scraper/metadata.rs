use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::app::{Result, TubelensError};
use crate::browser::{BrowserSession, Locator, PageDriver};
use crate::config::ScrapeConfig;
use crate::domain::{ChannelRef, ExtractionInfo, VideoInfo, VideoMetadata};
use crate::scraper::{extractor, overlay, watch_url};

const PLAYER: &str = "#movie_player, video";

const DESCRIPTION_EXPAND: &[Locator] = &[Locator::Css("#description-inline-expander #expand")];

/// Raw shape of [`extractor::VIDEO_METADATA`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawMetadata {
    title: String,
    description: String,
    upload_date: String,
    view_count: String,
    like_count: String,
    channel_name: String,
    channel_url: String,
    duration: String,
}

/// Extract a watch page's metadata, including the description.
///
/// With `expand_description`, the truncated description is expanded
/// before reading; whether that happened is reported in the result.
pub async fn get_video_metadata(
    config: &ScrapeConfig,
    video_id: &str,
    expand_description: bool,
) -> Result<VideoMetadata> {
    let session = BrowserSession::launch(config).await?;
    let result = collect(&session, config, video_id, expand_description).await;
    session.shutdown().await;
    result
}

pub(crate) async fn collect(
    page: &dyn PageDriver,
    config: &ScrapeConfig,
    video_id: &str,
    expand_description: bool,
) -> Result<VideoMetadata> {
    page.navigate(&watch_url(video_id), config.nav_timeout()).await?;
    page.wait_for(PLAYER, config.player_timeout()).await?;
    info!("Video player loaded");

    overlay::dismiss_cookie_consent(page, config).await;
    overlay::skip_ads(page, config).await;
    page.settle(config.settle_long()).await;

    page.scroll_by(800).await?;
    page.settle(config.settle_medium()).await;

    let mut description_expanded = false;
    if expand_description && page.try_click(DESCRIPTION_EXPAND).await.unwrap_or(false) {
        info!("Expanded description");
        description_expanded = true;
        page.settle(config.settle_short()).await;
    }

    let raw: RawMetadata = serde_json::from_value(page.eval(extractor::VIDEO_METADATA).await?)?;

    if raw.title.is_empty() {
        return Err(TubelensError::Empty(format!(
            "no metadata for video {video_id}; it may not exist or be private"
        )));
    }
    info!("Extracted metadata for: {}", raw.title);

    Ok(VideoMetadata {
        video: VideoInfo {
            id: video_id.to_string(),
            title: raw.title,
            description: raw.description,
            upload_date: raw.upload_date,
            view_count: raw.view_count,
            like_count: raw.like_count,
            duration: raw.duration,
        },
        channel: ChannelRef {
            name: raw.channel_name,
            url: raw.channel_url,
        },
        metadata: ExtractionInfo {
            extracted_at: Utc::now().to_rfc3339(),
            description_expanded,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::testing::MockPage;
    use serde_json::json;

    fn metadata_json() -> serde_json::Value {
        json!({
            "title": "A video",
            "description": "Long description",
            "uploadDate": "Jan 1, 2025",
            "viewCount": "10,000 views",
            "likeCount": "1.2K",
            "channelName": "Chan",
            "channelUrl": "https://youtube.com/@chan",
            "duration": "12:34"
        })
    }

    #[tokio::test]
    async fn test_metadata_assembled() {
        let page = MockPage::new()
            .allow_click(&Locator::Css("#description-inline-expander #expand"))
            .respond(extractor::VIDEO_METADATA, metadata_json());

        let result = collect(&page, &ScrapeConfig::default(), "vid1", true)
            .await
            .unwrap();
        assert_eq!(result.video.id, "vid1");
        assert_eq!(result.video.title, "A video");
        assert_eq!(result.video.view_count, "10,000 views");
        assert_eq!(result.channel.name, "Chan");
        assert!(result.metadata.description_expanded);
        assert!(!result.metadata.extracted_at.is_empty());
    }

    #[tokio::test]
    async fn test_description_left_collapsed_on_request() {
        let page = MockPage::new()
            .allow_click(&Locator::Css("#description-inline-expander #expand"))
            .respond(extractor::VIDEO_METADATA, metadata_json());

        let result = collect(&page, &ScrapeConfig::default(), "vid1", false)
            .await
            .unwrap();
        assert!(!result.metadata.description_expanded);

        // The expand control was never touched
        assert!(!page
            .eval_log()
            .iter()
            .any(|s| s.contains("description-inline-expander")));
    }

    #[tokio::test]
    async fn test_missing_title_is_an_error() {
        let page = MockPage::new().respond(
            extractor::VIDEO_METADATA,
            json!({"title": "", "description": ""}),
        );
        let err = collect(&page, &ScrapeConfig::default(), "gone", true)
            .await
            .unwrap_err();
        assert!(matches!(err, TubelensError::Empty(_)));
    }
}
