//! Migration matrix assembly from summarized transition tables.
//!
//! This crate is the core of the migration matrix pipeline:
//!
//! - **resolver**: per-role column resolution from the table schema
//! - **notice**: injectable sink for inference notices
//! - **builder**: matrix assembly with sorted label axes and row-major fill
//!
//! The summary table it consumes is produced upstream (see `rmx-ingest`);
//! presentation of the resulting matrix is downstream (see `rmx-cli`).

pub mod builder;
pub mod error;
pub mod notice;
pub mod resolver;

pub use builder::MatrixBuilder;
pub use error::{BuildError, Result};
pub use notice::{CollectedNotices, NoticeSink, TracingNotices};
pub use resolver::ColumnRoleResolver;
