//! Command implementations for the NBA stats collector
//!
//! - `collect`: the [`Collector`](collect::Collector) that drives fetch-and-commit runs
//! - `report`: rendering of commit outcomes and read queries

pub mod collect;
pub mod report;

pub use collect::Collector;
