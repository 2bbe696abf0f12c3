use tracing::{debug, info};

use crate::app::{Result, TubelensError};
use crate::browser::{BrowserSession, Locator, PageDriver};
use crate::config::ScrapeConfig;
use crate::domain::transcript::{derive_durations, RawSegment, TranscriptSegment};
use crate::scraper::{extractor, overlay, watch_url};

const PLAYER: &str = "#movie_player, video";
const SEGMENTS: &str = "ytd-transcript-segment-renderer, ytd-transcript-body-renderer";

const MORE_BUTTON: &[Locator] = &[
    Locator::Css("tp-yt-paper-button#expand"),
    Locator::Css("tp-yt-paper-button[id=\"expand\"]"),
    Locator::Css("#expand"),
    Locator::Css("#more"),
    Locator::Css("[aria-label*=\"more\"]"),
];

const TRANSCRIPT_BUTTON: &[Locator] = &[
    Locator::Css("button[aria-label=\"Show transcript\"]"),
    Locator::Css("yt-button-shape button[aria-label=\"Show transcript\"]"),
    Locator::Css("button[title*=\"transcript\" i]"),
    Locator::Css("button[aria-label*=\"transcript\" i]"),
    Locator::Css("yt-button-shape[aria-label*=\"transcript\" i]"),
    Locator::Css("#button[aria-label*=\"transcript\" i]"),
    Locator::Css("ytd-button-renderer[aria-label*=\"transcript\" i]"),
    Locator::Text("transcript"),
];

/// Extract a video's transcript.
///
/// Fails if the transcript control cannot be activated or the panel
/// yields no segments. `lang` is accepted for callers that track it;
/// the extracted language follows the page default.
pub async fn get_transcript(
    config: &ScrapeConfig,
    video_id: &str,
    lang: &str,
) -> Result<Vec<TranscriptSegment>> {
    let session = BrowserSession::launch(config).await?;
    let result = collect(&session, config, video_id, lang).await;
    session.shutdown().await;
    result
}

pub(crate) async fn collect(
    page: &dyn PageDriver,
    config: &ScrapeConfig,
    video_id: &str,
    lang: &str,
) -> Result<Vec<TranscriptSegment>> {
    debug!("Transcript requested for {} (lang {})", video_id, lang);

    page.navigate(&watch_url(video_id), config.nav_timeout()).await?;
    page.wait_for(PLAYER, config.player_timeout()).await?;
    info!("Video player loaded");
    page.settle(config.player_settle()).await;

    overlay::dismiss_cookie_consent(page, config).await;
    overlay::skip_ads(page, config).await;

    page.scroll_by(800).await?;
    page.settle(config.settle_medium()).await;

    if page.try_click(MORE_BUTTON).await.unwrap_or(false) {
        info!("Expanded video description");
        page.settle(config.settle_short()).await;
    }

    page.click_required(TRANSCRIPT_BUTTON, "\"Show transcript\" button")
        .await?;
    page.settle(config.settle_long()).await;
    page.wait_for(SEGMENTS, config.element_timeout()).await?;

    let raw: Vec<RawSegment> =
        serde_json::from_value(page.eval(extractor::TRANSCRIPT_SEGMENTS).await?)?;

    if raw.is_empty() {
        return Err(TubelensError::Empty(format!(
            "no transcript segments for video {video_id}"
        )));
    }

    info!("Extracted {} transcript segments", raw.len());
    Ok(derive_durations(raw))
}
