//! Database schema and connection management

use super::tables::ALL_TABLES;
use crate::config::DatabaseConfig;
use crate::error::{Result, StatsError};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Connection to the stats database
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open the database described by `config` and ensure tables exist
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        if !config.is_sqlite() {
            return Err(StatsError::UnsupportedDriver {
                driver: config.driver.clone(),
            });
        }
        Self::open_path(&config.name)
    }

    /// Open (or create) a SQLite database file
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening stats database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests and dry runs
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create every collector table
    pub fn initialize_schema(&mut self) -> Result<()> {
        for table in ALL_TABLES.iter() {
            self.conn.execute(&table.create_table_sql(), [])?;
        }

        // Dashboard queries join on these
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_game_headers_date
             ON game_headers(game_date_est)",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_stats_player
             ON player_stats_by_game(player_id)",
            [],
        )?;

        Ok(())
    }

    /// Number of rows currently stored in `table`
    pub fn count_rows(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", table);
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }
}
