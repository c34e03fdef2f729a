use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{merge, Club, ClubStub};
use crate::scrapers::{fetch_details, prefetch, resolve_url};
use crate::utils::http::PageFetcher;
use crate::utils::runtime;

/// One scrape run. Listing and detail pages are fetched at most once per
/// session; later calls are served from memory.
pub struct ScrapeSession {
    fetcher: Arc<dyn PageFetcher>,
    config: Arc<Config>,
    stubs: OnceCell<Vec<ClubStub>>,
    clubs: OnceCell<Vec<Club>>,
    time_limit: Duration,
}

impl ScrapeSession {
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: Arc<Config>) -> Self {
        let time_limit = runtime::set_max_execution_time(config.max_execution_time());
        Self {
            fetcher,
            config,
            stubs: OnceCell::new(),
            clubs: OnceCell::new(),
            time_limit,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fetcher(&self) -> &dyn PageFetcher {
        self.fetcher.as_ref()
    }

    /// Clubs as listed on the overview page, without details.
    pub async fn prefetch(&self) -> Result<&[ClubStub], FetchError> {
        let stubs = self
            .stubs
            .get_or_try_init(|| prefetch(self.fetcher.as_ref(), &self.config.listing_url))
            .await?;
        Ok(stubs.as_slice())
    }

    /// Every club with its detail page merged in, in overview order.
    pub async fn get_all(&self) -> Result<&[Club], FetchError> {
        let clubs = self
            .clubs
            .get_or_try_init(|| async {
                tokio::time::timeout(self.time_limit, self.fetch_all())
                    .await
                    .map_err(|_| FetchError::TimeLimit(self.time_limit))?
            })
            .await?;
        Ok(clubs.as_slice())
    }

    /// Whether the full pass has already completed.
    pub fn is_fetched(&self) -> bool {
        self.clubs.initialized()
    }

    async fn fetch_all(&self) -> Result<Vec<Club>, FetchError> {
        let stubs = self.prefetch().await?;
        let mut clubs = Vec::with_capacity(stubs.len());

        for stub in stubs {
            if stub.link.is_empty() {
                error!("Club {:?} has no detail link", stub.name);
                return Err(FetchError::MissingLink {
                    club: stub.name.clone(),
                });
            }

            let url = resolve_url(&self.config.base_url, &stub.link)?;
            let raw = fetch_details(self.fetcher.as_ref(), &url).await?;
            let club = merge(Club::from(stub.clone()), &raw);
            debug!("Merged {} detail fields into {}", raw.len(), club);
            clubs.push(club);
        }

        info!("Scraped details of {} clubs", clubs.len());
        Ok(clubs)
    }
}
