//! Error types for each pipeline boundary.

use std::path::PathBuf;
use std::time::Duration;

/// A page, or a logo, could not be retrieved.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error {status}: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("empty response body from {url}")]
    EmptyBody { url: String },
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("club {club:?} has no detail link")]
    MissingLink { club: String },
    #[error("scrape exceeded the execution time limit of {0:?}")]
    TimeLimit(Duration),
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("store unavailable at {}: {reason}", .path.display())]
    StoreUnavailable { path: PathBuf, reason: String },
    #[error("{} is not a valid SQLite database: {source}", .path.display())]
    StoreCorrupt {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("member count {value:?} of club {club:?} is not a number")]
    InvalidMemberCount { club: String, value: String },
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logo path {0:?} has no file name")]
    NoFileName(String),
}
