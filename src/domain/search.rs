use serde::{Deserialize, Serialize};

/// Which result kinds a global search should include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    All,
    Videos,
    Channels,
}

/// One global search result, discriminated by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SearchResult {
    #[serde(rename_all = "camelCase")]
    Video {
        id: String,
        title: String,
        url: String,
        channel: String,
        views: String,
        upload_time: String,
        duration: String,
        thumbnail: String,
    },
    #[serde(rename_all = "camelCase")]
    Channel {
        id: String,
        title: String,
        url: String,
        subscribers: String,
        video_count: String,
        thumbnail: String,
    },
}

/// Result envelope of the global search operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSearchResults {
    pub query: String,
    pub result_types: Vec<ResultType>,
    pub max_results: usize,
    pub total_found: usize,
    pub results: Vec<SearchResult>,
}
