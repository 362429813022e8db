//! Migration matrix assembly.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame, DataType};

use rmx_ingest::any_to_string;
use rmx_model::{ColumnRole, RoleBindings, TransitionMatrix};

use crate::error::{BuildError, Result};
use crate::notice::{NoticeSink, TracingNotices};
use crate::resolver::ColumnRoleResolver;

/// Builds a labeled migration matrix from a summarized transition table.
///
/// Each of the three role columns may be supplied explicitly; omitted roles
/// are inferred from the table schema via [`ColumnRoleResolver`], with an
/// informational notice naming the selected column. Explicitly supplied
/// columns are trusted as-is and never validated against the heuristic.
///
/// # Input ordering assumption
///
/// The fill is a plain row-major scan: it does NOT match metric values to
/// their (start, end) pair. The input must contain exactly one row per
/// (start, end) combination, sorted by start state then end state, so that
/// the scan lines up with the sorted label axes. The summary tables
/// produced by `rmx_ingest::summarize_transitions` satisfy this; for any
/// other source the caller owns that guarantee. A row count that does not
/// equal `rows x cols` fails with [`BuildError::ShapeMismatch`] before any
/// cell is placed.
#[derive(Debug, Clone, Default)]
pub struct MatrixBuilder {
    start_column: Option<String>,
    end_column: Option<String>,
    metric_column: Option<String>,
}

impl MatrixBuilder {
    /// Builder with all three roles left to inference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this column for the start-state role instead of inferring it.
    pub fn with_start_column(mut self, column: impl Into<String>) -> Self {
        self.start_column = Some(column.into());
        self
    }

    /// Use this column for the end-state role instead of inferring it.
    pub fn with_end_column(mut self, column: impl Into<String>) -> Self {
        self.end_column = Some(column.into());
        self
    }

    /// Use this column for the metric role instead of inferring it.
    pub fn with_metric_column(mut self, column: impl Into<String>) -> Self {
        self.metric_column = Some(column.into());
        self
    }

    /// Resolve the three roles to concrete columns.
    ///
    /// Inferred roles emit a notice; explicit columns do not. Fails on the
    /// first role that does not resolve to exactly one column.
    pub fn resolve_roles(
        &self,
        table: &DataFrame,
        notices: &dyn NoticeSink,
    ) -> Result<RoleBindings> {
        let start = self.resolve_role(ColumnRole::StartState, &self.start_column, table, notices)?;
        let end = self.resolve_role(ColumnRole::EndState, &self.end_column, table, notices)?;
        let metric = self.resolve_role(ColumnRole::Metric, &self.metric_column, table, notices)?;
        Ok(RoleBindings { start, end, metric })
    }

    fn resolve_role(
        &self,
        role: ColumnRole,
        explicit: &Option<String>,
        table: &DataFrame,
        notices: &dyn NoticeSink,
    ) -> Result<String> {
        if let Some(column) = explicit {
            return Ok(column.clone());
        }
        let column = ColumnRoleResolver::for_role(role).resolve(table)?;
        notices.column_inferred(role, &column);
        Ok(column)
    }

    /// Build the matrix, routing inference notices through `tracing`.
    pub fn build(&self, table: &DataFrame) -> Result<TransitionMatrix> {
        self.build_with_notices(table, &TracingNotices)
    }

    /// Build the matrix with a caller-supplied notice sink.
    pub fn build_with_notices(
        &self,
        table: &DataFrame,
        notices: &dyn NoticeSink,
    ) -> Result<TransitionMatrix> {
        let bindings = self.resolve_roles(table, notices)?;

        let row_labels = distinct_sorted_labels(table, &bindings.start)?;
        let col_labels = distinct_sorted_labels(table, &bindings.end)?;
        let cells = metric_values(table, &bindings.metric)?;

        let expected = row_labels.len() * col_labels.len();
        if cells.len() != expected {
            return Err(BuildError::ShapeMismatch {
                rows: row_labels.len(),
                cols: col_labels.len(),
                expected,
                actual: cells.len(),
            });
        }

        tracing::debug!(
            rows = row_labels.len(),
            cols = col_labels.len(),
            "assembled migration matrix"
        );
        Ok(TransitionMatrix::new(row_labels, col_labels, cells)?)
    }
}

/// Distinct values of a state column, sorted ascending.
fn distinct_sorted_labels(table: &DataFrame, column: &str) -> Result<Vec<String>> {
    let series = table.column(column)?;
    let mut labels = BTreeSet::new();
    for idx in 0..table.height() {
        labels.insert(any_to_string(series.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(labels.into_iter().collect())
}

/// Metric values in input row order, with infinities sanitized to missing.
///
/// Pre-existing nulls stay missing; every other value, NaN included, passes
/// through untouched.
fn metric_values(table: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    let series = table
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let floats = series.f64()?;
    Ok(floats
        .iter()
        .map(|value| value.filter(|v| !v.is_infinite()))
        .collect())
}
