//! Row-by-row persistence with per-row failure isolation

use super::{
    models::{CommitReport, RowFailure, TableSchema},
    record::Record,
    schema::StatsDatabase,
};
use crate::error::Result;
use crate::nba::types::RowMap;
use rusqlite::params_from_iter;
use serde_json::Value;
use tracing::{error, info};

impl StatsDatabase {
    /// Commit every row to `schema`'s table, one transaction per row.
    ///
    /// Keys the table does not declare are dropped. A row that fails to
    /// coerce or insert is logged and skipped; earlier rows stay committed.
    pub fn commit_rows<I>(&mut self, rows: I, schema: &TableSchema) -> CommitReport
    where
        I: IntoIterator<Item = RowMap>,
    {
        let mut report = CommitReport::new(schema.name);

        for row in rows {
            report.attempted += 1;
            let filtered = schema.filter_row(&row);

            match self.insert_one(schema, &filtered) {
                Ok(()) => report.committed += 1,
                Err(e) => {
                    let original = Value::Object(row.clone());
                    error!(
                        table = schema.name,
                        row = %original,
                        error = %e,
                        "failed to commit row"
                    );
                    report.failures.push(RowFailure {
                        row,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            table = schema.name,
            committed = report.committed,
            attempted = report.attempted,
            "committed {} of {} rows to {}",
            report.committed,
            report.attempted,
            schema.name
        );

        report
    }

    /// Insert one filtered row inside its own transaction.
    ///
    /// The transaction rolls back on drop if the insert fails.
    fn insert_one(&mut self, schema: &TableSchema, filtered: &RowMap) -> Result<()> {
        let record = Record::from_row(schema, filtered)?;
        let tx = self.conn.transaction()?;
        tx.execute(
            &record.insert_sql(),
            params_from_iter(record.values.iter().map(|(_, v)| v)),
        )?;
        tx.commit()?;
        Ok(())
    }
}
