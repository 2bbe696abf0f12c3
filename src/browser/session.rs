use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::{Result, TubelensError};
use crate::browser::page::PageDriver;
use crate::config::ScrapeConfig;

/// One headless browser and one page, exclusively owned by a single
/// extraction call.
///
/// The CDP event handler runs on a spawned task for the lifetime of the
/// session. [`shutdown`](Self::shutdown) must run on every exit path so
/// no browser process leaks; the operation wrappers in
/// [`scraper`](crate::scraper) guarantee this.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a browser and open a blank page configured per `config`.
    pub async fn launch(config: &ScrapeConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg(format!(
                "--window-size={},{}",
                config.window_width, config.window_height
            ));

        if !config.headless {
            builder = builder.with_head();
        }

        if let Some(path) = config.chrome_path() {
            debug!("Using browser executable {}", path);
            builder = builder.chrome_executable(path);
        }

        let browser_config = builder
            .build()
            .map_err(|e| TubelensError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            TubelensError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        let handler = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {
                // Drain browser events
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| TubelensError::Browser(format!("Failed to create page: {}", e)))?;

        page.set_user_agent(&config.user_agent)
            .await
            .map_err(|e| TubelensError::Browser(format!("Failed to set user agent: {}", e)))?;

        Ok(Self {
            browser,
            page,
            handler,
        })
    }

    /// Close the page and the browser. Runs on success and failure
    /// paths alike; close failures are logged, not surfaced.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.page.close().await {
            debug!("Failed to close page: {}", e);
        }
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        let _ = self.browser.wait().await;
        self.handler.abort();
    }
}

#[async_trait]
impl PageDriver for BrowserSession {
    async fn navigate(&self, url: &str, timeout: Duration) -> Result<()> {
        info!("Navigating to {}", url);
        let load = async {
            self.page
                .goto(url)
                .await
                .map_err(|e| TubelensError::Browser(format!("Navigation to {} failed: {}", url, e)))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| TubelensError::Browser(format!("Navigation to {} failed: {}", url, e)))?;
            Ok(())
        };

        tokio::time::timeout(timeout, load)
            .await
            .map_err(|_| TubelensError::Timeout(format!("navigation to {url}")))?
    }

    async fn eval(&self, script: &str) -> Result<Value> {
        self.page
            .evaluate(script)
            .await
            .map_err(|e| TubelensError::Browser(format!("Script execution failed: {}", e)))?
            .into_value()
            .map_err(|e| TubelensError::Browser(format!("Failed to parse script result: {:?}", e)))
    }

    async fn type_and_submit(&self, selector: &str, text: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|e| TubelensError::Browser(format!("No input matching `{}`: {}", selector, e)))?;

        element
            .click()
            .await
            .map_err(|e| TubelensError::Browser(format!("Failed to focus `{}`: {}", selector, e)))?;
        element
            .type_str(text)
            .await
            .map_err(|e| TubelensError::Browser(format!("Failed to type into `{}`: {}", selector, e)))?;
        element
            .press_key("Enter")
            .await
            .map_err(|e| TubelensError::Browser(format!("Failed to submit `{}`: {}", selector, e)))?;

        Ok(())
    }
}
