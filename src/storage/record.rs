//! Building typed records from filtered source rows

use super::models::{ColumnType, TableSchema};
use crate::error::{Result, StatsError};
use crate::nba::types::RowMap;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rusqlite::types::Value as SqlValue;
use serde_json::Value;

/// Text layout of stored timestamps.
pub const STORED_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// One row ready for insertion: declared columns and their coerced values.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub table: &'static str,
    pub values: Vec<(&'static str, SqlValue)>,
}

impl Record {
    /// Coerce a row to `schema`'s column types.
    ///
    /// Keys the schema does not declare are ignored. Every primary-key
    /// column must be present and non-null.
    pub fn from_row(schema: &TableSchema, row: &RowMap) -> Result<Self> {
        let mut values = Vec::with_capacity(row.len());

        for column in schema.columns {
            let Some(raw) = row.get(column.name) else {
                continue;
            };
            let value = coerce(column.name, column.kind, raw)?;
            values.push((column.name, value));
        }

        for key in schema.primary_key {
            let present = values
                .iter()
                .any(|(name, v)| name == key && *v != SqlValue::Null);
            if !present {
                return Err(StatsError::MissingColumn {
                    column: key.to_string(),
                });
            }
        }

        Ok(Self {
            table: schema.name,
            values,
        })
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, v)| v)
    }

    /// Parameterized `INSERT` for exactly the columns this record carries.
    pub fn insert_sql(&self) -> String {
        let columns = self
            .values
            .iter()
            .map(|(name, _)| format!("\"{}\"", name))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; self.values.len()].join(", ");
        format!(
            "INSERT INTO \"{}\" ({}) VALUES ({})",
            self.table, columns, placeholders
        )
    }
}

/// Whole floats that fit an i64 without saturating.
fn is_integral_i64(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

fn mismatch(column: &str, kind: ColumnType, raw: &Value) -> StatsError {
    StatsError::Coercion {
        column: column.to_string(),
        expected: kind.describe(),
        value: raw.to_string(),
    }
}

/// Coerce one JSON value to the SQL value a column of `kind` stores.
pub fn coerce(column: &str, kind: ColumnType, raw: &Value) -> Result<SqlValue> {
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }

    let value = match kind {
        ColumnType::Integer => match raw {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| is_integral_i64(*f)).map(|f| f as i64)),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
        .map(SqlValue::Integer),

        ColumnType::Real => match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .map(SqlValue::Real),

        ColumnType::Text => Some(SqlValue::Text(match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })),

        ColumnType::Boolean => match raw {
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Some(0),
                Some(1) => Some(1),
                _ => None,
            },
            _ => None,
        }
        .map(SqlValue::Integer),

        ColumnType::DateTime => raw
            .as_str()
            .and_then(parse_datetime)
            .map(|dt| SqlValue::Text(dt.format(STORED_DATETIME_FORMAT).to_string())),
    };

    value.ok_or_else(|| mismatch(column, kind, raw))
}

/// Parse the timestamp layouts the stats and live feeds use.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}
