//! Best-effort logo download. A logo that cannot be fetched, decoded or
//! written is logged and skipped; only setting up the destination and reading
//! the overview page can fail the whole run.

use image::imageops::FilterType;
use percent_encoding::percent_decode_str;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::LogoError;
use crate::models::ClubStub;
use crate::scrapers::resolve_url;
use crate::session::ScrapeSession;
use crate::utils::http::PageFetcher;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoReport {
    pub saved: Vec<PathBuf>,
    pub skipped: usize,
}

/// Download every club logo into `dest`, rescaled to `scale_percent` of its
/// size when given.
pub async fn download_logos(
    session: &ScrapeSession,
    dest: impl AsRef<Path>,
    scale_percent: Option<u32>,
) -> Result<LogoReport, LogoError> {
    let dest = dest.as_ref();
    fs::create_dir_all(dest)?;

    let stubs = session.prefetch().await?;
    let base_url = &session.config().base_url;
    let mut report = LogoReport::default();

    for stub in stubs.iter().filter(|stub| !stub.logo.is_empty()) {
        match save_logo(session.fetcher(), base_url, stub, dest, scale_percent).await {
            Ok(path) => report.saved.push(path),
            Err(e) => {
                warn!("Skipping logo of {:?} ({}): {}", stub.name, stub.logo, e);
                report.skipped += 1;
            }
        }
    }

    info!(
        "Saved {} logos to {} ({} skipped)",
        report.saved.len(),
        dest.display(),
        report.skipped
    );
    Ok(report)
}

async fn save_logo(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    stub: &ClubStub,
    dest: &Path,
    scale_percent: Option<u32>,
) -> Result<PathBuf, LogoError> {
    let file_name = logo_file_name(&stub.logo)?;
    let url = resolve_url(base_url, &stub.logo)?;
    let bytes = fetcher.fetch_bytes(&url).await?;
    let path = dest.join(file_name);

    match scale_percent {
        Some(percent) => {
            let logo = image::load_from_memory(&bytes)?;
            let width = scaled(logo.width(), percent);
            let height = scaled(logo.height(), percent);
            logo.resize_exact(width, height, FilterType::Lanczos3).save(&path)?;
        }
        None => fs::write(&path, &bytes)?,
    }

    Ok(path)
}

fn scaled(dimension: u32, percent: u32) -> u32 {
    let value = u64::from(dimension) * u64::from(percent) / 100;
    u32::try_from(value).unwrap_or(u32::MAX).max(1)
}

/// Base file name of a logo path, with any query string and percent-encoding removed.
pub fn logo_file_name(logo: &str) -> Result<String, LogoError> {
    let path = logo.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let name = path.rsplit('/').next().unwrap_or_default();
    let name = percent_decode_str(name).decode_utf8_lossy().into_owned();

    if name.is_empty() || name == "." || name == ".." || name.contains(&['/', '\\'][..]) {
        return Err(LogoError::NoFileName(logo.to_string()));
    }
    Ok(name)
}
