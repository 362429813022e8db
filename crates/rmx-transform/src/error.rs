use polars::prelude::PolarsError;
use thiserror::Error;

use rmx_model::{AmbiguousColumnError, RmxError};

/// Errors raised while assembling a migration matrix.
///
/// All of these abort the build with no partial result. Role resolution is
/// deterministic over a given table, so none of them are retryable without
/// a schema or argument change.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A role could not be resolved to exactly one column.
    #[error(transparent)]
    AmbiguousColumn(#[from] AmbiguousColumnError),

    /// The summary table's row count does not match the label axes.
    ///
    /// The row-major fill requires exactly one input row per
    /// (start, end) label combination.
    #[error(
        "summary table has {actual} rows but the {rows} x {cols} label axes require {expected}"
    )]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Model(#[from] RmxError),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, BuildError>;
