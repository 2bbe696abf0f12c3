//! Best-effort dismissal of overlays that sit on top of the content.
//!
//! These steps are optimizations, not requirements: a failure here is
//! swallowed and the pipeline continues.

use tracing::{debug, info};

use crate::browser::{Locator, PageDriver};
use crate::config::ScrapeConfig;

const COOKIE_CONSENT: &[Locator] = &[
    Locator::Css("[aria-label*=\"Accept all\"]"),
    Locator::Css("[aria-label*=\"Accept cookies\"]"),
    Locator::Text("accept all"),
];

const AD_SKIP: &[Locator] = &[
    Locator::Css(".ytp-ad-skip-button"),
    Locator::Css(".ytp-skip-ad-button"),
];

/// Accept the cookie banner if one is shown.
pub async fn dismiss_cookie_consent(page: &dyn PageDriver, config: &ScrapeConfig) {
    match page.try_click(COOKIE_CONSENT).await {
        Ok(true) => {
            info!("Accepted cookies");
            page.settle(config.settle_short()).await;
        }
        Ok(false) => {}
        Err(e) => debug!("Cookie consent check failed: {}", e),
    }
}

/// Skip a running pre-roll ad if a skip control is present.
pub async fn skip_ads(page: &dyn PageDriver, config: &ScrapeConfig) {
    match page.try_click(AD_SKIP).await {
        Ok(true) => {
            info!("Skipped ad");
            page.settle(config.settle_medium()).await;
        }
        Ok(false) => {}
        Err(e) => debug!("Ad skip check failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::testing::MockPage;

    #[tokio::test]
    async fn test_consent_click_is_optional() {
        // Nothing matches; the helpers must not error
        let page = MockPage::new();
        dismiss_cookie_consent(&page, &ScrapeConfig::default()).await;
        skip_ads(&page, &ScrapeConfig::default()).await;
    }

    #[tokio::test]
    async fn test_consent_clicked_when_present() {
        let page = MockPage::new().allow_click(&Locator::Css("[aria-label*=\"Accept all\"]"));
        dismiss_cookie_consent(&page, &ScrapeConfig::default()).await;
        let clicks: Vec<_> = page
            .eval_log()
            .into_iter()
            .filter(|s| s.contains("Accept all"))
            .collect();
        assert_eq!(clicks.len(), 1);
    }
}
