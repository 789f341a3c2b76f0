//! Wire types for the NBA stats and live-data endpoints.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
mod tests;

/// One source row keyed by column name, in source column order.
pub type RowMap = Map<String, Value>;

/// A named, tabular chunk of a stats response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Reject rows whose width differs from the header width.
    fn check_shape(&self) -> Result<()> {
        for (i, row) in self.row_set.iter().enumerate() {
            if row.len() != self.headers.len() {
                return Err(StatsError::MalformedResultSet {
                    name: self.name.clone(),
                    message: format!(
                        "row {} has {} values for {} headers",
                        i,
                        row.len(),
                        self.headers.len()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Lazily map each row to a `RowMap` keyed by lowercased header.
    pub fn rows(&self) -> Result<Rows<'_>> {
        self.check_shape()?;
        let keys = self.headers.iter().map(|h| h.to_lowercase()).collect();
        Ok(Rows {
            keys,
            inner: self.row_set.iter(),
        })
    }
}

/// Iterator over the rows of one result set.
pub struct Rows<'a> {
    keys: Vec<String>,
    inner: std::slice::Iter<'a, Vec<Value>>,
}

impl Iterator for Rows<'_> {
    type Item = RowMap;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.inner.next()?;
        Some(
            self.keys
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// The ordered result sets of one stats response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResultSets(pub Vec<ResultSet>);

impl ResultSets {
    pub fn new(sets: Vec<ResultSet>) -> Self {
        Self(sets)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the result set at `index`.
    pub fn get(&self, index: usize) -> Result<&ResultSet> {
        self.0.get(index).ok_or(StatsError::ResultSetOutOfRange {
            index,
            available: self.0.len(),
        })
    }

    /// Rows of the result set at `index`.
    pub fn rows(&self, index: usize) -> Result<Rows<'_>> {
        self.get(index)?.rows()
    }
}

/// Envelope returned by `stats.nba.com` endpoints.
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// Envelope returned by the live play-by-play feed.
#[derive(Debug, Deserialize)]
pub struct PlayByPlayEnvelope {
    pub game: PlayByPlayGame,
}

#[derive(Debug, Deserialize)]
pub struct PlayByPlayGame {
    #[serde(default)]
    pub actions: Vec<RowMap>,
}
