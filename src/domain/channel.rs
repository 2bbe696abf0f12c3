use serde::{Deserialize, Serialize};

use crate::domain::video::VideoSummary;

/// Channel header fields, as displayed on the channel page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelInfo {
    pub name: String,
    pub subscribers: String,
    pub video_count: String,
}

/// Minimal channel reference attached to watch-page results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRef {
    pub name: String,
    pub url: String,
}

/// Result envelope of the channel-videos operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideos {
    pub channel: ChannelInfo,
    pub videos: Vec<VideoSummary>,
    pub total_loaded: usize,
    pub has_more: bool,
}

/// Result envelope of the channel-search operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSearchResults {
    pub query: String,
    pub results: Vec<VideoSummary>,
    pub total_found: usize,
}

/// Map a channel reference to the canonical videos-tab URL.
///
/// Accepts a full URL, an `@handle`, a raw `UC…` channel id, or a
/// custom-URL slug.
pub fn videos_url(channel: &str) -> String {
    if channel.starts_with("http") {
        if channel.contains("/videos") {
            channel.to_string()
        } else {
            format!("{}/videos", channel.trim_end_matches('/'))
        }
    } else if channel.starts_with('@') {
        format!("https://youtube.com/{channel}/videos")
    } else if channel.starts_with("UC") {
        format!("https://youtube.com/channel/{channel}/videos")
    } else {
        format!("https://youtube.com/c/{channel}/videos")
    }
}

/// Map a channel reference to the channel's landing page, where the
/// header search control lives.
pub fn page_url(channel: &str) -> String {
    if channel.starts_with("http") {
        let trimmed = channel.trim_end_matches('/');
        trimmed.strip_suffix("/videos").unwrap_or(trimmed).to_string()
    } else if channel.starts_with('@') {
        format!("https://youtube.com/{channel}")
    } else if channel.starts_with("UC") {
        format!("https://youtube.com/channel/{channel}")
    } else {
        format!("https://youtube.com/c/{channel}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_videos_url_from_handle() {
        assert_eq!(
            videos_url("@mkbhd"),
            "https://youtube.com/@mkbhd/videos"
        );
    }

    #[test]
    fn test_videos_url_from_channel_id() {
        assert_eq!(
            videos_url("UCBJycsmduvYEL83R_U4JriQ"),
            "https://youtube.com/channel/UCBJycsmduvYEL83R_U4JriQ/videos"
        );
    }

    #[test]
    fn test_videos_url_from_slug() {
        assert_eq!(
            videos_url("linustechtips"),
            "https://youtube.com/c/linustechtips/videos"
        );
    }

    #[test]
    fn test_videos_url_keeps_full_videos_url() {
        let url = "https://youtube.com/@mkbhd/videos";
        assert_eq!(videos_url(url), url);
    }

    #[test]
    fn test_videos_url_appends_videos_tab() {
        assert_eq!(
            videos_url("https://youtube.com/@mkbhd"),
            "https://youtube.com/@mkbhd/videos"
        );
        assert_eq!(
            videos_url("https://youtube.com/@mkbhd/"),
            "https://youtube.com/@mkbhd/videos"
        );
    }

    #[test]
    fn test_page_url_strips_videos_tab() {
        assert_eq!(
            page_url("https://youtube.com/@mkbhd/videos"),
            "https://youtube.com/@mkbhd"
        );
        assert_eq!(
            page_url("https://youtube.com/@mkbhd/videos/"),
            "https://youtube.com/@mkbhd"
        );
    }

    #[test]
    fn test_page_url_from_handle() {
        assert_eq!(page_url("@mkbhd"), "https://youtube.com/@mkbhd");
    }
}
