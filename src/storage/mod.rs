//! SQLite storage for collected stats
//!
//! - `models`: Table declarations, commit reports and query rows
//! - `tables`: The column allow-list of every target table
//! - `record`: Coercing source values into typed records
//! - `schema`: Database connection and schema management
//! - `commit`: Row-by-row persistence
//! - `queries`: Read queries for the dashboard

pub mod commit;
pub mod models;
pub mod queries;
pub mod record;
pub mod schema;
pub mod tables;


pub use models::*;
pub use record::Record;
pub use schema::StatsDatabase;
