// src/config.rs

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

use crate::output::OutputFormat;

/// The LA County locations page.
pub const DEFAULT_URL: &str = "http://publichealth.lacounty.gov/media/Coronavirus/locations.htm";

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: Url,
    pub format: OutputFormat,
    /// `None` waits on the request indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("DEFAULT_URL should parse"),
            format: OutputFormat::Plain,
            timeout: None,
        }
    }
}

impl ScrapeConfig {
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    /// Like `with_url`, parsing `raw` first.
    pub fn with_url_str(self, raw: &str) -> Result<Self> {
        let url = Url::parse(raw).with_context(|| format!("parsing target URL {}", raw))?;
        Ok(self.with_url(url))
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
