use anyhow::{Context, Result};
use chrono::Local;
use std::sync::Arc;
use tracing::info;

use hocklubs::utils::runtime;
use hocklubs::{download_logos, Config, HttpFetcher, ScrapeSession, SqliteStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hocklubs=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting club scrape at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    let config = Arc::new(Config::load()?);
    runtime::set_max_execution_time(config.max_execution_time());

    // Validate the store before spending minutes on scraping
    let storage = match &config.database_path {
        Some(path) => Some(SqliteStorage::open(path).await?),
        None => None,
    };

    let fetcher = Arc::new(HttpFetcher::new(&config)?);
    let session = ScrapeSession::new(fetcher, config.clone());

    let clubs = session.get_all().await.context("Failed to scrape clubs")?;
    info!("Scraped {} clubs", clubs.len());

    if let Some(storage) = &storage {
        let inserted = storage.export(clubs).await?;
        info!("Exported {} clubs to {}", inserted, storage.path().display());
    }

    if let Some(dir) = &config.logo_dir {
        let report = download_logos(&session, dir, config.logo_scale).await?;
        info!("Downloaded {} logos, skipped {}", report.saved.len(), report.skipped);
    }

    println!("{}", serde_json::to_string_pretty(clubs)?);
    Ok(())
}
