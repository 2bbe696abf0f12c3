//! Incremental loading for pages that lazy-load content on scroll.

use std::time::Duration;

use tracing::debug;

use crate::app::Result;
use crate::browser::PageDriver;
use crate::config::ScrapeConfig;

/// Scroll to the bottom and wait for the count of elements matching
/// `item_selector` to grow past `current`.
///
/// Polls every `interval` until `budget` elapses; returns the grown
/// count as soon as it is observed, else the unchanged count. A caller
/// seeing its own count come back knows the listing has stagnated.
pub async fn scroll_and_wait_for_more(
    page: &dyn PageDriver,
    item_selector: &str,
    current: usize,
    budget: Duration,
    interval: Duration,
) -> Result<usize> {
    page.scroll_to_bottom().await?;

    let deadline = tokio::time::Instant::now() + budget;
    while tokio::time::Instant::now() < deadline {
        tokio::time::sleep(interval).await;

        let count = page.count(item_selector).await?;
        if count > current {
            debug!("Loaded {} items (was {})", count, current);
            return Ok(count);
        }
    }

    Ok(current)
}

/// Scroll far enough down a watch page to trigger comment loading and
/// wait for the comments section to attach. Returns whether it did.
pub async fn scroll_to_comments(page: &dyn PageDriver, config: &ScrapeConfig) -> Result<bool> {
    page.scroll_by(800).await?;
    page.settle(config.settle_medium()).await;

    match page.wait_for("ytd-comments", config.element_timeout()).await {
        Ok(()) => Ok(true),
        Err(_) => {
            debug!("Comments section not found");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::extractor;
    use crate::scraper::testing::{comment_record, MockPage};

    const SELECTOR: &str = "ytd-comment-thread-renderer";

    fn page(first_batch: usize, batch: usize, max_items: usize) -> MockPage {
        MockPage::listing(
            extractor::COMMENT_LIST,
            SELECTOR,
            comment_record,
            first_batch,
            batch,
            max_items,
        )
    }

    #[tokio::test]
    async fn test_returns_grown_count() {
        let mock = page(20, 20, 100);
        let count = scroll_and_wait_for_more(
            &mock,
            SELECTOR,
            20,
            Duration::from_millis(50),
            Duration::from_millis(1),
        )
        .await
        .unwrap();
        assert_eq!(count, 40);
    }

    #[tokio::test]
    async fn test_stagnant_count_returned_after_budget() {
        // Page is already saturated: scrolling loads nothing new
        let mock = page(20, 20, 20);
        let started = std::time::Instant::now();
        let count = scroll_and_wait_for_more(
            &mock,
            SELECTOR,
            20,
            Duration::from_millis(30),
            Duration::from_millis(5),
        )
        .await
        .unwrap();
        assert_eq!(count, 20);
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_zero_budget_returns_immediately() {
        let mock = page(20, 20, 100);
        let count = scroll_and_wait_for_more(
            &mock,
            SELECTOR,
            20,
            Duration::ZERO,
            Duration::from_millis(1),
        )
        .await
        .unwrap();
        assert_eq!(count, 20);
    }
}
