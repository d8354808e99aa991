//! Filterable, searchable views over the job board's record collections.

pub mod board;
pub mod config;
pub mod error;
pub mod filtering;
pub mod telemetry;
