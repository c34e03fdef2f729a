//! Scraper for the club overview on hockey.nl: reads every club's detail
//! page, normalizes the fields into [`Club`] records and exports them to
//! SQLite, with an optional logo download.

pub mod config;
pub mod error;
pub mod logos;
pub mod models;
pub mod parsers;
pub mod scrapers;
pub mod session;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use error::{ExportError, FetchError, LogoError};
pub use logos::{download_logos, LogoReport};
pub use models::{Club, ClubStub, ClubUpdate, RawFields};
pub use session::ScrapeSession;
pub use storage::{SqliteStorage, Storage};
pub use utils::http::{HttpFetcher, PageFetcher};
