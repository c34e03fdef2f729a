use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::error::ExportError;
use crate::models::Club;
use crate::storage::Storage;

pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl SqliteStorage {
    /// Open or create the store at `db_path`. The file must be writable and,
    /// if it already exists, an actual SQLite database.
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = db_path.as_ref().to_path_buf();
        ensure_writable(&path)?;

        let conn = Connection::open(&path).map_err(|e| unavailable(&path, e.to_string()))?;

        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))
            .map_err(|source| ExportError::StoreCorrupt {
                path: path.clone(),
                source,
            })?;

        info!("Opened SQLite store at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn unavailable(path: &Path, reason: impl Into<String>) -> ExportError {
    ExportError::StoreUnavailable {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn ensure_writable(path: &Path) -> Result<(), ExportError> {
    if path.is_dir() {
        return Err(unavailable(path, "path is a directory"));
    }

    if !path.exists() {
        debug!("Creating SQLite file {}", path.display());
        OpenOptions::new()
            .write(true)
            .create(true)
            .open(path)
            .map_err(|e| unavailable(path, format!("cannot create file: {}", e)))?;
    }

    let metadata = fs::metadata(path).map_err(|e| unavailable(path, e.to_string()))?;
    if metadata.permissions().readonly() {
        return Err(unavailable(path, "file is not writable"));
    }

    Ok(())
}

/// Coerce scraped member counts for the INTEGER column. Unknown or blank
/// becomes NULL; dots, commas and spaces are read as thousands separators.
pub fn parse_member_count(club: &Club) -> Result<Option<i64>, ExportError> {
    let Some(raw) = club.members.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '.' | ',') && !c.is_whitespace())
        .collect();

    let invalid = || ExportError::InvalidMemberCount {
        club: club.name.clone(),
        value: raw.to_string(),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse::<i64>().map(Some).map_err(|_| invalid())
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn migrate(&self) -> Result<(), ExportError> {
        let conn = self.conn();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS hocklubs (
                id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                name TEXT NOT NULL,
                logo TEXT,
                link TEXT,
                phone TEXT,
                email TEXT,
                website TEXT,
                street TEXT,
                postal_code TEXT,
                city TEXT,
                outfit TEXT,
                pitches TEXT,
                members INTEGER,
                founded TEXT
            )",
            [],
        )?;

        info!("Database migration completed");
        Ok(())
    }

    async fn insert_clubs(&self, clubs: &[Club]) -> Result<usize, ExportError> {
        // Convert everything up front so a bad member count writes nothing.
        let rows = clubs
            .iter()
            .map(|club| parse_member_count(club).map(|members| (club, members)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut conn = self.conn();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO hocklubs (
                    name, logo, link, phone, email, website, street,
                    postal_code, city, outfit, pitches, members, founded
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            )?;

            for (club, members) in &rows {
                stmt.execute(params![
                    club.name,
                    club.logo,
                    club.link,
                    club.phone,
                    club.email,
                    club.website,
                    club.street,
                    club.postal_code,
                    club.city,
                    club.outfit,
                    club.pitches,
                    members,
                    club.founded,
                ])?;
            }
        }
        tx.commit()?;

        info!("Inserted {} clubs into {}", rows.len(), self.path.display());
        Ok(rows.len())
    }

    async fn count_clubs(&self) -> Result<usize, ExportError> {
        let conn = self.conn();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM hocklubs", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club_with_members(members: Option<&str>) -> Club {
        Club {
            name: "HC Bloemendaal".into(),
            members: members.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn member_counts_are_coerced() {
        assert_eq!(parse_member_count(&club_with_members(Some("850"))).unwrap(), Some(850));
        assert_eq!(parse_member_count(&club_with_members(Some(" 2.250 "))).unwrap(), Some(2250));
        assert_eq!(parse_member_count(&club_with_members(Some(""))).unwrap(), None);
        assert_eq!(parse_member_count(&club_with_members(None)).unwrap(), None);
    }

    #[test]
    fn non_numeric_member_count_is_rejected() {
        let err = parse_member_count(&club_with_members(Some("ca. 800"))).unwrap_err();
        assert!(matches!(
            err,
            ExportError::InvalidMemberCount { ref club, ref value }
                if club == "HC Bloemendaal" && value == "ca. 800"
        ));
    }
}
