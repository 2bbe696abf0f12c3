use tracing::info;

use crate::app::{Result, TubelensError};
use crate::browser::{BrowserSession, Locator, PageDriver};
use crate::config::ScrapeConfig;
use crate::domain::{Comment, CommentSort, VideoComments, VideoDetails};
use crate::scraper::{extractor, loader, overlay, watch_url};

const PLAYER: &str = "#movie_player, video";
const COMMENT_ITEM: &str = "ytd-comment-thread-renderer";

const SORT_DROPDOWN: &[Locator] = &[Locator::Css(
    "ytd-comments-header-renderer tp-yt-paper-dropdown-menu-light",
)];
const SORT_NEWEST: &[Locator] = &[Locator::Text("newest")];

/// Extract a video's top-level comments, loading more batches until
/// `limit` is reached or the thread list stops growing.
pub async fn get_video_comments(
    config: &ScrapeConfig,
    video_id: &str,
    limit: usize,
    sort_by: CommentSort,
) -> Result<VideoComments> {
    let session = BrowserSession::launch(config).await?;
    let result = collect(&session, config, video_id, limit, sort_by).await;
    session.shutdown().await;
    result
}

pub(crate) async fn collect(
    page: &dyn PageDriver,
    config: &ScrapeConfig,
    video_id: &str,
    limit: usize,
    sort_by: CommentSort,
) -> Result<VideoComments> {
    page.navigate(&watch_url(video_id), config.nav_timeout()).await?;
    page.wait_for(PLAYER, config.player_timeout()).await?;
    info!("Video player loaded");

    overlay::dismiss_cookie_consent(page, config).await;
    overlay::skip_ads(page, config).await;
    page.settle(config.settle_long()).await;

    if !loader::scroll_to_comments(page, config).await? {
        return Err(TubelensError::Timeout("comments section".into()));
    }
    page.wait_for(COMMENT_ITEM, config.element_timeout()).await?;
    info!("Comments section loaded");

    let total_comments = page
        .eval(extractor::COMMENT_COUNT)
        .await?
        .as_str()
        .unwrap_or("0")
        .parse::<u64>()
        .unwrap_or(0);

    if sort_by == CommentSort::Newest {
        switch_to_newest(page, config).await;
    }

    let mut all_comments: Vec<Comment> = Vec::new();
    let mut current = 0usize;

    while all_comments.len() < limit {
        all_comments = serde_json::from_value(page.eval(extractor::COMMENT_LIST).await?)?;

        if all_comments.len() == current {
            // No more comments to load
            break;
        }
        current = all_comments.len();

        if current < limit {
            let grown = loader::scroll_and_wait_for_more(
                page,
                COMMENT_ITEM,
                current,
                config.comment_scroll_budget(),
                config.poll_interval(),
            )
            .await?;
            if grown == current {
                break;
            }
        }
    }

    let total_loaded = all_comments.len();
    let comments: Vec<Comment> = all_comments.into_iter().take(limit).collect();
    info!("Extracted {} comments", comments.len());

    let mut video: VideoDetails = serde_json::from_value(page.eval(extractor::VIDEO_DETAILS).await?)?;
    video.id = video_id.to_string();

    Ok(VideoComments {
        video,
        comments,
        total_comments,
        total_loaded,
        has_more: total_loaded > limit,
        sort_by,
    })
}

/// Drive the sort menu to "Newest first". Best-effort: the result
/// records the requested ordering either way.
async fn switch_to_newest(page: &dyn PageDriver, config: &ScrapeConfig) {
    if page.try_click(SORT_DROPDOWN).await.unwrap_or(false) {
        page.settle(config.settle_short()).await;
        if page.try_click(SORT_NEWEST).await.unwrap_or(false) {
            info!("Switched comment sort to newest");
            page.settle(config.settle_long()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::testing::{comment_record, MockPage};
    use serde_json::json;

    fn watch_page(first_batch: usize, batch: usize, max_items: usize) -> MockPage {
        MockPage::listing(
            extractor::COMMENT_LIST,
            COMMENT_ITEM,
            comment_record,
            first_batch,
            batch,
            max_items,
        )
        .respond(extractor::COMMENT_COUNT, json!("1234"))
        .respond(
            extractor::VIDEO_DETAILS,
            json!({
                "title": "A video",
                "channel": { "name": "Chan", "url": "https://youtube.com/@chan" },
                "views": "10K views",
                "uploadDate": "Jan 1, 2025",
                "likeCount": "1K"
            }),
        )
    }

    fn tight_config() -> ScrapeConfig {
        ScrapeConfig {
            comment_scroll_budget_ms: 50,
            poll_interval_ms: 1,
            element_timeout_secs: 0,
            ..ScrapeConfig::default()
        }
    }

    #[tokio::test]
    async fn test_pagination_loads_past_first_batch() {
        // First load batch is 20; requesting 100 must keep loading
        let page = watch_page(20, 20, 120);
        let result = collect(&page, &tight_config(), "vid1", 100, CommentSort::Top)
            .await
            .unwrap();

        assert!(result.total_loaded > 20);
        assert_eq!(
            result.comments.len(),
            result.total_loaded.min(100)
        );
        assert_eq!(result.total_comments, 1234);
        assert_eq!(result.video.id, "vid1");
        assert_eq!(result.video.title, "A video");
        assert_eq!(result.video.channel.name, "Chan");
    }

    #[tokio::test]
    async fn test_has_more_set_after_trimming() {
        let page = watch_page(20, 20, 40);
        let result = collect(&page, &tight_config(), "vid1", 30, CommentSort::Top)
            .await
            .unwrap();

        assert_eq!(result.comments.len(), 30);
        assert_eq!(result.total_loaded, 40);
        assert!(result.has_more);
    }

    #[tokio::test]
    async fn test_limit_never_exceeded() {
        let page = watch_page(20, 20, 120);
        let result = collect(&page, &tight_config(), "vid1", 7, CommentSort::Top)
            .await
            .unwrap();
        assert_eq!(result.comments.len(), 7);
        assert!(!result.has_more || result.total_loaded > 7);
    }

    #[tokio::test]
    async fn test_missing_comments_section_fails() {
        let page = watch_page(20, 20, 120).without_element("ytd-comments");
        let err = collect(&page, &tight_config(), "vid1", 10, CommentSort::Top)
            .await
            .unwrap_err();
        assert!(matches!(err, TubelensError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_newest_sort_recorded_without_menu() {
        // The sort menu is absent; the request is still recorded
        let page = watch_page(20, 20, 20);
        let result = collect(&page, &tight_config(), "vid1", 10, CommentSort::Newest)
            .await
            .unwrap();
        assert_eq!(result.sort_by, CommentSort::Newest);
        assert_eq!(result.comments.len(), 10);
    }
}
