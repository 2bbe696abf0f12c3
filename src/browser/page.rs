use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::app::{Result, TubelensError};

/// Interval between polls while waiting for an element to appear.
const WAIT_POLL: Duration = Duration::from_millis(500);

/// Script issued by [`PageDriver::scroll_to_bottom`].
pub(crate) const SCROLL_BOTTOM_SCRIPT: &str =
    "(() => { window.scrollTo(0, document.documentElement.scrollHeight); return true; })()";

/// A rule for finding a clickable element.
///
/// The site renders structurally different markup across experiment
/// cohorts and locales, so interactive controls are located through an
/// ordered list of these rather than a single selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// CSS selector. Clicks the first visible match, or its nearest
    /// clickable ancestor when the match is a bare icon.
    Css(&'static str),
    /// Case-insensitive substring matched against the text content and
    /// aria-label of clickable elements.
    Text(&'static str),
}

impl Locator {
    /// In-page script that finds this locator's first match, clicks it,
    /// and reports whether anything was clicked.
    pub(crate) fn click_script(&self) -> String {
        match self {
            Locator::Css(selector) => format!(
                r#"(() => {{
  try {{
    const candidates = document.querySelectorAll('{sel}');
    for (const el of candidates) {{
      const rect = el.getBoundingClientRect();
      if (rect.width > 0 && rect.height > 0) {{
        const target = el.closest('button, yt-icon-button, yt-button-shape, tp-yt-paper-item, a') || el;
        target.click();
        return true;
      }}
    }}
    return false;
  }} catch (e) {{
    return false;
  }}
}})()"#,
                sel = escape(selector)
            ),
            Locator::Text(needle) => format!(
                r#"(() => {{
  try {{
    const needle = '{needle}'.toLowerCase();
    const candidates = document.querySelectorAll('button, yt-button-shape, yt-icon-button, tp-yt-paper-item');
    for (const el of candidates) {{
      const text = (el.textContent || '').toLowerCase();
      const label = (el.getAttribute('aria-label') || '').toLowerCase();
      if (text.includes(needle) || label.includes(needle)) {{
        el.click();
        return true;
      }}
    }}
    return false;
  }} catch (e) {{
    return false;
  }}
}})()"#,
                needle = escape(needle)
            ),
        }
    }
}

/// Script that reports whether `selector` has a visible match.
pub(crate) fn visible_script(selector: &str) -> String {
    format!(
        r#"(() => {{
  try {{
    const el = document.querySelector('{sel}');
    if (!el) return false;
    const rect = el.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
  }} catch (e) {{
    return false;
  }}
}})()"#,
        sel = escape(selector)
    )
}

/// Script that counts elements matching `selector`.
pub(crate) fn count_script(selector: &str) -> String {
    format!(
        "(() => {{ try {{ return document.querySelectorAll('{sel}').length; }} catch (e) {{ return 0; }} }})()",
        sel = escape(selector)
    )
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// The narrow capability interface the extraction pipelines drive a
/// page through. The production implementation is
/// [`BrowserSession`](crate::browser::BrowserSession); tests substitute
/// a scripted fake.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to `url` and wait for the load to finish, within `timeout`.
    async fn navigate(&self, url: &str, timeout: Duration) -> Result<()>;

    /// Evaluate a script in the page context and return its JSON value.
    async fn eval(&self, script: &str) -> Result<Value>;

    /// Type `text` into the first element matching `selector` and
    /// submit with the Enter key.
    async fn type_and_submit(&self, selector: &str, text: &str) -> Result<()>;

    /// Suspend the pipeline for a fixed settle delay.
    async fn settle(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }

    /// Wait until `selector` has a visible match, polling up to `timeout`.
    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let present = self.eval(&visible_script(selector)).await?;
            if present.as_bool().unwrap_or(false) {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(TubelensError::Timeout(format!("element `{selector}`")));
            }
            tokio::time::sleep(WAIT_POLL).await;
        }
    }

    /// Try each locator in order and click the first one that resolves.
    /// Returns whether any candidate was clicked.
    async fn try_click(&self, locators: &[Locator]) -> Result<bool> {
        for locator in locators {
            let clicked = self.eval(&locator.click_script()).await?;
            if clicked.as_bool().unwrap_or(false) {
                debug!(?locator, "clicked");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Like [`try_click`](Self::try_click), but the control is
    /// load-bearing: when no candidate resolves the pipeline fails.
    async fn click_required(&self, locators: &[Locator], what: &str) -> Result<()> {
        if self.try_click(locators).await? {
            Ok(())
        } else {
            Err(TubelensError::ControlNotFound(what.to_string()))
        }
    }

    /// Number of elements currently matching `selector`.
    async fn count(&self, selector: &str) -> Result<usize> {
        let value = self.eval(&count_script(selector)).await?;
        Ok(value.as_u64().unwrap_or(0) as usize)
    }

    /// Scroll the page down by `pixels`.
    async fn scroll_by(&self, pixels: u32) -> Result<()> {
        self.eval(&format!(
            "(() => {{ window.scrollBy(0, {pixels}); return true; }})()"
        ))
        .await?;
        Ok(())
    }

    /// Scroll to the bottom of the document.
    async fn scroll_to_bottom(&self) -> Result<()> {
        self.eval(SCROLL_BOTTOM_SCRIPT).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::testing::MockPage;

    const CANDIDATES: &[Locator] = &[
        Locator::Css("#first"),
        Locator::Css("#second"),
        Locator::Css("#third"),
        Locator::Css("#fourth"),
    ];

    #[test]
    fn test_css_click_script_embeds_selector() {
        let script = Locator::Css("button[aria-label=\"Show transcript\"]").click_script();
        assert!(script.contains("button[aria-label=\"Show transcript\"]"));
        assert!(script.contains("getBoundingClientRect"));
    }

    #[test]
    fn test_text_click_script_lowercases_needle() {
        let script = Locator::Text("Transcript").click_script();
        assert!(script.contains("'Transcript'.toLowerCase()"));
        assert!(script.contains("aria-label"));
    }

    #[test]
    fn test_escape_quotes() {
        let script = count_script("a[title='x']");
        assert!(script.contains("a[title=\\'x\\']"));
    }

    #[tokio::test]
    async fn test_try_click_resolves_kth_candidate() {
        let page = MockPage::new().allow_click(&Locator::Css("#third"));
        assert!(page.try_click(CANDIDATES).await.unwrap());

        // Stops on the first success: the fourth candidate is never tried
        let evaluated = page.eval_log();
        let clicks: Vec<_> = evaluated
            .iter()
            .filter(|s| s.contains("querySelectorAll"))
            .collect();
        assert_eq!(clicks.len(), 3);
    }

    #[tokio::test]
    async fn test_try_click_outcome_independent_of_list_length() {
        let short = MockPage::new().allow_click(&Locator::Css("#third"));
        let clicked = short.try_click(&CANDIDATES[..3]).await.unwrap();
        let long = MockPage::new().allow_click(&Locator::Css("#third"));
        let clicked_long = long.try_click(CANDIDATES).await.unwrap();
        assert_eq!(clicked, clicked_long);
    }

    #[tokio::test]
    async fn test_try_click_false_when_nothing_matches() {
        let page = MockPage::new();
        assert!(!page.try_click(CANDIDATES).await.unwrap());
    }

    #[tokio::test]
    async fn test_click_required_fails_pipeline() {
        let page = MockPage::new();
        let err = page
            .click_required(CANDIDATES, "transcript button")
            .await
            .unwrap_err();
        assert!(matches!(err, TubelensError::ControlNotFound(_)));
    }

    #[tokio::test]
    async fn test_wait_for_times_out_on_missing_element() {
        let page = MockPage::new().without_element("#gone");
        let err = page
            .wait_for("#gone", Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, TubelensError::Timeout(_)));
    }
}
