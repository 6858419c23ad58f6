// src/pipeline.rs

use anyhow::{anyhow, Result};
use std::io::Write;
use tokio::time::{timeout, Instant};
use tracing::{debug, info, instrument};

use crate::config::ScrapeConfig;
use crate::fetch::PageSource;
use crate::output::write_rows;
use crate::parse::parse_rows;

/// What a single run ended up doing.
#[derive(Debug)]
pub enum Outcome {
    /// The page came back and this many rows were written.
    Printed(usize),
    /// The request failed or the status was not 200; nothing was written.
    FetchFailed(anyhow::Error),
}

impl Outcome {
    pub fn rows(&self) -> usize {
        match self {
            Outcome::Printed(n) => *n,
            Outcome::FetchFailed(_) => 0,
        }
    }

    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Outcome::FetchFailed(_))
    }
}

/// Fetch the configured page, parse its table-body rows and write them to `out`.
///
/// Fetch failures are reported through `Outcome::FetchFailed` and leave `out`
/// untouched. Only errors writing to `out` come back as `Err`.
#[instrument(level = "debug", skip_all, fields(url = %config.url, source = source.name()))]
pub async fn run<S, W>(source: &S, config: &ScrapeConfig, out: &mut W) -> Result<Outcome>
where
    S: PageSource + ?Sized,
    W: Write,
{
    let start = Instant::now();
    info!("fetching {}", config.url);

    let fetched = match config.timeout {
        Some(limit) => match timeout(limit, source.fetch(&config.url)).await {
            Ok(res) => res,
            Err(_) => Err(anyhow!("GET {} timed out after {:?}", config.url, limit)),
        },
        None => source.fetch(&config.url).await,
    };

    let html = match fetched {
        Ok(html) => html,
        Err(e) => return Ok(Outcome::FetchFailed(e)),
    };
    debug!(bytes = html.len(), elapsed = ?start.elapsed(), "fetched page");

    let rows = parse_rows(&html);
    let written = write_rows(out, &rows, config.format)?;

    info!(rows = written, elapsed = ?start.elapsed(), "done");
    Ok(Outcome::Printed(written))
}
