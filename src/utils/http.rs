use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::FetchError;

/// Source of raw pages and images. One attempt per call, no retries.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

pub fn create_client(config: &Config) -> reqwest::Result<Client> {
    ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout())
        .pool_max_idle_per_host(6)
        .build()
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = create_client(config).map_err(|source| FetchError::Request {
            url: config.base_url.clone(),
            source,
        })?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error {}: {}", status, url);
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let body = self
            .get(url)
            .await?
            .text()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody { url: url.to_string() });
        }
        Ok(body)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let body = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if body.is_empty() {
            return Err(FetchError::EmptyBody { url: url.to_string() });
        }
        Ok(body.to_vec())
    }
}
