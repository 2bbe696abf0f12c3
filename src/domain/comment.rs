use serde::{Deserialize, Serialize};

use crate::domain::channel::ChannelRef;

/// One top-level comment thread. Counts are the page's display strings
/// ("1.2K"), not parsed numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub author: String,
    pub author_url: String,
    pub author_avatar: String,
    pub text: String,
    pub time: String,
    pub likes: String,
    pub reply_count: String,
}

/// Requested comment ordering.
///
/// Switching to `Newest` drives the page's sort menu best-effort; the
/// returned value records the request, not a verified output order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSort {
    #[default]
    Top,
    Newest,
}

/// Watch-page fields attached to a comments result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoDetails {
    pub id: String,
    pub title: String,
    pub channel: ChannelRef,
    pub views: String,
    pub upload_date: String,
    pub like_count: String,
}

/// Result envelope of the comments operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoComments {
    pub video: VideoDetails,
    pub comments: Vec<Comment>,
    /// The page's own total comment count, parsed from the header.
    pub total_comments: u64,
    /// How many threads were loaded before trimming.
    pub total_loaded: usize,
    pub has_more: bool,
    pub sort_by: CommentSort,
}
