use serde::{Deserialize, Serialize};

use crate::domain::channel::ChannelRef;

/// A video as it appears in a channel grid or listing.
///
/// Every field is the page's display string, taken as-is; counts like
/// `views` are not parsed into numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub views: String,
    pub upload_time: String,
    pub duration: String,
    pub thumbnail: String,
    pub url: String,
}

/// Watch-page fields returned by the metadata operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub upload_date: String,
    pub view_count: String,
    pub like_count: String,
    pub duration: String,
}

/// Provenance of one metadata extraction pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionInfo {
    /// RFC 3339 timestamp of the extraction.
    pub extracted_at: String,
    /// Whether the truncated description was expanded before reading it.
    pub description_expanded: bool,
}

/// Result envelope of the metadata operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub video: VideoInfo,
    pub channel: ChannelRef,
    pub metadata: ExtractionInfo,
}
