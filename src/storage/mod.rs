use async_trait::async_trait;

use crate::error::ExportError;
use crate::models::Club;

mod sqlite;
pub use sqlite::{parse_member_count, SqliteStorage};

#[async_trait]
pub trait Storage: Send + Sync {
    /// Create the club table if it does not exist yet.
    async fn migrate(&self) -> Result<(), ExportError>;
    /// Append every club; returns the number of rows written.
    async fn insert_clubs(&self, clubs: &[Club]) -> Result<usize, ExportError>;
    async fn count_clubs(&self) -> Result<usize, ExportError>;

    async fn export(&self, clubs: &[Club]) -> Result<usize, ExportError> {
        self.migrate().await?;
        self.insert_clubs(clubs).await
    }
}
