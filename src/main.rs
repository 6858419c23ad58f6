use anyhow::Result;
use lacounty_scraper::{pipeline, HttpSource, Outcome, ScrapeConfig};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr, stdout is for rows) ────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!("startup");

    // ─── 2) fixed target, explicit client ────────────────────────────
    let config = ScrapeConfig::default();
    let source = match HttpSource::new() {
        Ok(source) => source,
        Err(e) => {
            error!("{:#}", e);
            return Ok(());
        }
    };

    // ─── 3) fetch → parse → print ────────────────────────────────────
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match pipeline::run(&source, &config, &mut out).await {
        Ok(Outcome::Printed(n)) => info!("printed {} rows", n),
        Ok(Outcome::FetchFailed(e)) => warn!("no output: {:#}", e),
        Err(e) => error!("writing rows failed: {:#}", e),
    }

    // Exit status is 0 whatever happened above.
    Ok(())
}
