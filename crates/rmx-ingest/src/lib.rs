//! Summary-table ingestion for migration matrix building.
//!
//! This crate is the upstream collaborator of the matrix core:
//!
//! - **csv**: CSV loading into a polars `DataFrame`
//! - **polars_utils**: row-wise value extraction helpers
//! - **summarize**: pivoting raw `(id, date, state, metric)` observations
//!   into the one-row-per-(start, end)-pair summary table the matrix
//!   builder consumes

pub mod csv;
pub mod error;
pub mod polars_utils;
pub mod summarize;

pub use csv::read_summary_csv;
pub use error::{IngestError, Result};
pub use polars_utils::{any_to_f64, any_to_string, format_numeric};
pub use summarize::{SummarizeOptions, summarize_transitions};
