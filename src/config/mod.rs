//! Configuration for tubelens.
//!
//! Configuration is read from `~/.config/tubelens/config.toml` at startup.
//! A missing file yields the defaults; missing fields in an existing file
//! fall back to their default values.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::{Result, TubelensError};

/// Environment variable naming the Chrome/Chromium executable to launch.
/// Takes precedence over `chrome_executable` in the config file.
pub const CHROME_ENV: &str = "TUBELENS_CHROME";

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrape: ScrapeConfig,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TubelensError::Config("Could not find config directory".into()))?;
        Self::load_from(config_dir.join("tubelens").join("config.toml"))
    }

    /// Load configuration from an explicit path. A missing file yields
    /// the default configuration.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| TubelensError::Config(format!("Invalid config {}: {}", path.display(), e)))
    }
}

/// Knobs for the browser session and the extraction pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Browser window width in pixels (default: 1920)
    pub window_width: u32,

    /// Browser window height in pixels (default: 1080)
    pub window_height: u32,

    /// User agent string presented to the site
    pub user_agent: String,

    /// Chrome/Chromium executable path. `TUBELENS_CHROME` in the
    /// environment wins over this; when both are unset the browser is
    /// auto-detected.
    pub chrome_executable: Option<String>,

    /// Page navigation timeout in seconds (default: 60)
    pub nav_timeout_secs: u64,

    /// Wait budget for the video player or a listing to appear in
    /// seconds (default: 30)
    pub player_timeout_secs: u64,

    /// Wait budget for other required elements in seconds (default: 10)
    pub element_timeout_secs: u64,

    /// Wait budget for the channel search input in seconds (default: 5)
    pub input_timeout_secs: u64,

    /// Settle delay after minor UI actions in milliseconds (default: 1000)
    pub settle_short_ms: u64,

    /// Settle delay after scrolls and ad skips in milliseconds (default: 2000)
    pub settle_medium_ms: u64,

    /// Stabilization delay after navigation in milliseconds (default: 3000)
    pub settle_long_ms: u64,

    /// Extra wait after the video player appears in milliseconds (default: 5000)
    pub player_settle_ms: u64,

    /// Wall-clock budget for one scroll-for-more round in milliseconds
    /// (default: 5000)
    pub scroll_budget_ms: u64,

    /// Scroll-for-more budget when loading additional comments in
    /// milliseconds (default: 3000)
    pub comment_scroll_budget_ms: u64,

    /// Interval between item-count polls in milliseconds (default: 1000)
    pub poll_interval_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            chrome_executable: None,
            nav_timeout_secs: 60,
            player_timeout_secs: 30,
            element_timeout_secs: 10,
            input_timeout_secs: 5,
            settle_short_ms: 1000,
            settle_medium_ms: 2000,
            settle_long_ms: 3000,
            player_settle_ms: 5000,
            scroll_budget_ms: 5000,
            comment_scroll_budget_ms: 3000,
            poll_interval_ms: 1000,
        }
    }
}

impl ScrapeConfig {
    /// Resolved browser executable: environment override first, then the
    /// configured path.
    pub fn chrome_path(&self) -> Option<String> {
        std::env::var(CHROME_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.chrome_executable.clone())
    }

    pub fn nav_timeout(&self) -> Duration {
        Duration::from_secs(self.nav_timeout_secs)
    }

    pub fn player_timeout(&self) -> Duration {
        Duration::from_secs(self.player_timeout_secs)
    }

    pub fn element_timeout(&self) -> Duration {
        Duration::from_secs(self.element_timeout_secs)
    }

    pub fn input_timeout(&self) -> Duration {
        Duration::from_secs(self.input_timeout_secs)
    }

    pub fn settle_short(&self) -> Duration {
        Duration::from_millis(self.settle_short_ms)
    }

    pub fn settle_medium(&self) -> Duration {
        Duration::from_millis(self.settle_medium_ms)
    }

    pub fn settle_long(&self) -> Duration {
        Duration::from_millis(self.settle_long_ms)
    }

    pub fn player_settle(&self) -> Duration {
        Duration::from_millis(self.player_settle_ms)
    }

    pub fn scroll_budget(&self) -> Duration {
        Duration::from_millis(self.scroll_budget_ms)
    }

    pub fn comment_scroll_budget(&self) -> Duration {
        Duration::from_millis(self.comment_scroll_budget_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_values() {
        let config = ScrapeConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
        assert_eq!(config.nav_timeout_secs, 60);
        assert_eq!(config.player_timeout_secs, 30);
        assert_eq!(config.element_timeout_secs, 10);
        assert_eq!(config.scroll_budget_ms, 5000);
        assert_eq!(config.comment_scroll_budget_ms, 3000);
        assert_eq!(config.poll_interval_ms, 1000);
        assert!(config.chrome_executable.is_none());
        assert!(config.user_agent.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_duration_accessors() {
        let config = ScrapeConfig::default();
        assert_eq!(config.nav_timeout(), Duration::from_secs(60));
        assert_eq!(config.player_settle(), Duration::from_millis(5000));
        assert_eq!(config.settle_long(), Duration::from_millis(3000));
        assert_eq!(config.poll_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("config.toml")).unwrap();
        assert!(config.scrape.headless);
        assert_eq!(config.scrape.nav_timeout_secs, 60);
    }

    #[test]
    fn test_load_from_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[scrape]\nheadless = false\nscroll_budget_ms = 8000").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.scrape.headless);
        assert_eq!(config.scrape.scroll_budget_ms, 8000);
        // Untouched fields keep their defaults
        assert_eq!(config.scrape.nav_timeout_secs, 60);
        assert_eq!(config.scrape.window_width, 1920);
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
