//! Data models for the storage layer

use crate::nba::types::RowMap;
use serde::Serialize;

/// Storage type of one declared column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Boolean,
    DateTime,
}

impl ColumnType {
    /// SQLite type affinity used in the table definition.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::Boolean => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text | ColumnType::DateTime => "TEXT",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Real => "real",
            ColumnType::Text => "text",
            ColumnType::Boolean => "boolean",
            ColumnType::DateTime => "datetime",
        }
    }
}

/// One accepted column of a target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnType,
}

impl Column {
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnType::Integer,
        }
    }

    pub const fn real(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnType::Real,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnType::Text,
        }
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnType::Boolean,
        }
    }

    pub const fn datetime(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnType::DateTime,
        }
    }
}

/// Declared shape of a target table: the column allow-list plus key constraints.
#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub primary_key: &'static [&'static str],
    /// Columns carrying their own UNIQUE constraint.
    pub unique: &'static [&'static str],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn is_key_column(&self, name: &str) -> bool {
        self.primary_key.contains(&name)
    }

    /// Keep only the keys this table declares, in source order.
    pub fn filter_row(&self, row: &RowMap) -> RowMap {
        row.iter()
            .filter(|(key, _)| self.column(key).is_some())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this schema.
    ///
    /// Only primary-key columns are NOT NULL; everything else tolerates
    /// columns the source stops sending.
    pub fn create_table_sql(&self) -> String {
        let mut defs: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut def = format!("\"{}\" {}", c.name, c.kind.sql_type());
                if self.is_key_column(c.name) {
                    def.push_str(" NOT NULL");
                }
                if self.unique.contains(&c.name) {
                    def.push_str(" UNIQUE");
                }
                def
            })
            .collect();

        let key = self
            .primary_key
            .iter()
            .map(|k| format!("\"{}\"", k))
            .collect::<Vec<_>>()
            .join(", ");
        defs.push(format!("PRIMARY KEY ({})", key));

        format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (\n    {}\n)",
            self.name,
            defs.join(",\n    ")
        )
    }
}

/// One row that could not be committed.
#[derive(Debug, Clone)]
pub struct RowFailure {
    /// The original, unfiltered row.
    pub row: RowMap,
    pub error: String,
}

/// Outcome of committing one batch of rows to one table.
#[derive(Debug, Clone)]
pub struct CommitReport {
    pub table: &'static str,
    pub attempted: usize,
    pub committed: usize,
    pub failures: Vec<RowFailure>,
}

impl CommitReport {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            attempted: 0,
            committed: 0,
            failures: Vec::new(),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Distinct player identity as seen in box scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerName {
    pub player_id: i64,
    pub player_name: String,
}

/// One team's line for one game, with running home/away counts
#[derive(Debug, Clone, Serialize)]
pub struct TeamGame {
    pub game_date_est: Option<String>,
    pub game_id: String,
    pub team_id: i64,
    pub home_or_away: String,
    pub game_number: i64,
    pub home_games_count: i64,
    pub away_games_count: i64,
    pub fgm: Option<i64>,
    pub fga: Option<i64>,
    pub fg_pct: Option<f64>,
    pub fg3m: Option<i64>,
    pub fg3a: Option<i64>,
    pub fg3_pct: Option<f64>,
    pub ftm: Option<i64>,
    pub fta: Option<i64>,
    pub ft_pct: Option<f64>,
    pub oreb: Option<i64>,
    pub dreb: Option<i64>,
    pub reb: Option<i64>,
    pub ast: Option<i64>,
    pub stl: Option<i64>,
    pub blk: Option<i64>,
    pub to: Option<i64>,
    pub pf: Option<i64>,
    pub pts: Option<i64>,
    pub plus_minus: Option<f64>,
    pub team_name: Option<String>,
    pub pts_qtr1: Option<i64>,
    pub pts_qtr2: Option<i64>,
    pub pts_qtr3: Option<i64>,
    pub pts_qtr4: Option<i64>,
    pub pts_total_ot: i64,
}

/// One field-goal attempt for a shot chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotAttempt {
    pub player_id: i64,
    pub loc_x: Option<f64>,
    pub loc_y: Option<f64>,
    pub shot_result: Option<String>,
    pub player_name: String,
}
