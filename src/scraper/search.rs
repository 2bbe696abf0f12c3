use tracing::info;
use url::Url;

use crate::app::{Result, TubelensError};
use crate::browser::{BrowserSession, PageDriver};
use crate::config::ScrapeConfig;
use crate::domain::{GlobalSearchResults, ResultType, SearchResult};
use crate::scraper::{extractor, overlay};

const RESULTS_CONTAINER: &str = "#contents";

/// Search all of the site for videos and channels.
///
/// `max_results` must be between 1 and 20; the query must be non-blank.
pub async fn search_global(
    config: &ScrapeConfig,
    query: &str,
    max_results: usize,
    result_types: &[ResultType],
) -> Result<GlobalSearchResults> {
    validate(query, max_results)?;

    let session = BrowserSession::launch(config).await?;
    let result = collect(&session, config, query, max_results, result_types).await;
    session.shutdown().await;
    result
}

pub(crate) fn validate(query: &str, max_results: usize) -> Result<()> {
    if query.trim().is_empty() {
        return Err(TubelensError::Validation(
            "search query cannot be empty".into(),
        ));
    }
    if !(1..=20).contains(&max_results) {
        return Err(TubelensError::Validation(format!(
            "max_results must be between 1 and 20, got {max_results}"
        )));
    }
    Ok(())
}

pub(crate) fn results_url(query: &str) -> Result<String> {
    let url = Url::parse_with_params(
        "https://www.youtube.com/results",
        &[("search_query", query.trim())],
    )?;
    Ok(url.into())
}

pub(crate) async fn collect(
    page: &dyn PageDriver,
    config: &ScrapeConfig,
    query: &str,
    max_results: usize,
    result_types: &[ResultType],
) -> Result<GlobalSearchResults> {
    page.navigate(&results_url(query)?, config.nav_timeout()).await?;
    overlay::dismiss_cookie_consent(page, config).await;
    page.settle(config.settle_long()).await;

    page.wait_for(RESULTS_CONTAINER, config.player_timeout()).await?;
    info!("Search results page loaded");

    let script = extractor::global_search_script(max_results, result_types);
    let results: Vec<SearchResult> = serde_json::from_value(page.eval(&script).await?)?;
    info!("Extracted {} search results", results.len());

    Ok(GlobalSearchResults {
        query: query.trim().to_string(),
        result_types: result_types.to_vec(),
        max_results,
        total_found: results.len(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::testing::MockPage;
    use serde_json::json;

    #[test]
    fn test_rejects_blank_query() {
        assert!(matches!(
            validate("", 10),
            Err(TubelensError::Validation(_))
        ));
        assert!(matches!(
            validate("   ", 10),
            Err(TubelensError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_max_results() {
        assert!(matches!(
            validate("rust", 0),
            Err(TubelensError::Validation(_))
        ));
        assert!(matches!(
            validate("rust", 21),
            Err(TubelensError::Validation(_))
        ));
    }

    #[test]
    fn test_accepts_boundary_max_results() {
        assert!(validate("rust", 1).is_ok());
        assert!(validate("rust", 20).is_ok());
    }

    #[test]
    fn test_results_url_encodes_query() {
        let url = results_url("rust async runtime").unwrap();
        assert_eq!(
            url,
            "https://www.youtube.com/results?search_query=rust+async+runtime"
        );
    }

    #[tokio::test]
    async fn test_collect_assembles_envelope() {
        let script = extractor::global_search_script(10, &[ResultType::All]);
        let page = MockPage::new().respond(
            &script,
            json!([
                {
                    "type": "video", "id": "v1", "title": "Video one",
                    "url": "https://youtube.com/watch?v=v1", "channel": "Chan",
                    "views": "1K views", "uploadTime": "1 day ago",
                    "duration": "10:00", "thumbnail": ""
                },
                {
                    "type": "channel", "id": "UC1", "title": "Chan",
                    "url": "https://youtube.com/@chan",
                    "subscribers": "1M subscribers", "videoCount": "100 videos",
                    "thumbnail": ""
                }
            ]),
        );

        let result = collect(
            &page,
            &ScrapeConfig::default(),
            "  rust  ",
            10,
            &[ResultType::All],
        )
        .await
        .unwrap();

        assert_eq!(result.query, "rust");
        assert_eq!(result.total_found, 2);
        assert_eq!(result.max_results, 10);
        assert!(matches!(result.results[0], SearchResult::Video { .. }));
        assert!(matches!(result.results[1], SearchResult::Channel { .. }));
    }
}
