// src/fetch.rs

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

/// Something that can hand back the HTML body behind a URL.
///
/// The pipeline only talks to this trait, so tests can swap the network out
/// for a canned document or a forced failure.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of `url`. Any transport error or a status other than
    /// `200 OK` is an error.
    async fn fetch(&self, url: &Url) -> Result<String>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// `PageSource` backed by a plain `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Build a client with no default headers and no request timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("building HTTP client")?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        debug!("Fetching text from {}", url);
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        // Only an exact 200 counts; other 2xx codes are treated as failures too.
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(anyhow!("GET {} returned HTTP {}", url, status));
        }

        resp.text()
            .await
            .with_context(|| format!("reading body from {}", url))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
