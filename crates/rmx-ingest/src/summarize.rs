//! Pivot raw observations into the summary table the matrix core consumes.
//!
//! Raw input is one row per `(id, date)` observation carrying the rating
//! held on that date and the metric amount recorded against it. The pivot
//! takes, per id, the earliest observation as the starting state and the
//! latest as the ending state, sums the metric change over each
//! (start, end) pair, and densifies the result onto the full cross product
//! of sorted labels. The output therefore has exactly one row per
//! (start, end) combination, sorted by start then end, which is the layout
//! the matrix builder's row-major fill relies on.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series, SortMultipleOptions};

use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_f64, any_to_string};

/// Column name the pivot emits for the starting state.
pub const START_COLUMN: &str = "start_state";
/// Column name the pivot emits for the ending state.
pub const END_COLUMN: &str = "end_state";
/// Column name the pivot emits for the summed metric change.
pub const METRIC_COLUMN: &str = "metric_change";

/// Which raw-observation columns to pivot on.
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    /// Column identifying the position (e.g. a loan or counterparty id).
    pub id_column: String,
    /// Column carrying the observation date. Values must sort
    /// chronologically under their natural ordering (ISO 8601 strings do).
    pub date_column: String,
    /// Column carrying the rating held on the observation date.
    pub state_column: String,
    /// Column carrying the metric amount recorded on the observation date.
    pub metric_column: String,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            id_column: "id".to_string(),
            date_column: "date".to_string(),
            state_column: "rating".to_string(),
            metric_column: "amount".to_string(),
        }
    }
}

#[derive(Debug)]
struct TransitionAcc {
    start_state: String,
    start_metric: Option<f64>,
    end_state: String,
    end_metric: Option<f64>,
}

/// Pivot raw `(id, date, state, metric)` observations into a dense,
/// sorted summary table with `start_state`, `end_state` and
/// `metric_change` columns.
pub fn summarize_transitions(df: &DataFrame, options: &SummarizeOptions) -> Result<DataFrame> {
    for column in [
        &options.id_column,
        &options.date_column,
        &options.state_column,
        &options.metric_column,
    ] {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: column.clone(),
            });
        }
    }

    let sorted = df.sort(
        [options.id_column.as_str(), options.date_column.as_str()],
        SortMultipleOptions::default(),
    )?;

    let ids = sorted.column(&options.id_column)?;
    let states = sorted.column(&options.state_column)?;
    let metrics = sorted.column(&options.metric_column)?;

    // Rows are sorted by (id, date), so the first row seen for an id is its
    // earliest observation and the latest overwrites `end_*` as we go.
    let mut accumulators: HashMap<String, TransitionAcc> = HashMap::new();
    for idx in 0..sorted.height() {
        let id = any_to_string(ids.get(idx).unwrap_or(AnyValue::Null));
        let state = any_to_string(states.get(idx).unwrap_or(AnyValue::Null));
        let metric = any_to_f64(metrics.get(idx).unwrap_or(AnyValue::Null));
        accumulators
            .entry(id)
            .and_modify(|acc| {
                acc.end_state = state.clone();
                acc.end_metric = metric;
            })
            .or_insert_with(|| TransitionAcc {
                start_state: state.clone(),
                start_metric: metric,
                end_state: state,
                end_metric: metric,
            });
    }

    let mut changes: BTreeMap<(String, String), f64> = BTreeMap::new();
    let mut start_labels: BTreeSet<String> = BTreeSet::new();
    let mut end_labels: BTreeSet<String> = BTreeSet::new();
    for (id, acc) in &accumulators {
        let change = match (acc.start_metric, acc.end_metric) {
            (Some(first), Some(last)) => last - first,
            _ => {
                tracing::warn!(id, "missing metric value at an endpoint, change treated as 0");
                0.0
            }
        };
        start_labels.insert(acc.start_state.clone());
        end_labels.insert(acc.end_state.clone());
        *changes
            .entry((acc.start_state.clone(), acc.end_state.clone()))
            .or_insert(0.0) += change;
    }

    // Densify onto the full cross product so every (start, end) pair is
    // present exactly once, in sorted order.
    let mut starts = Vec::with_capacity(start_labels.len() * end_labels.len());
    let mut ends = Vec::with_capacity(start_labels.len() * end_labels.len());
    let mut totals = Vec::with_capacity(start_labels.len() * end_labels.len());
    for start in &start_labels {
        for end in &end_labels {
            starts.push(start.clone());
            ends.push(end.clone());
            totals.push(
                changes
                    .get(&(start.clone(), end.clone()))
                    .copied()
                    .unwrap_or(0.0),
            );
        }
    }

    let columns: Vec<Column> = vec![
        Series::new(START_COLUMN.into(), starts).into(),
        Series::new(END_COLUMN.into(), ends).into(),
        Series::new(METRIC_COLUMN.into(), totals).into(),
    ];
    let summary = DataFrame::new(columns)?;
    tracing::info!(
        transitions = accumulators.len(),
        rows = summary.height(),
        "summarized observations into transition table"
    );
    Ok(summary)
}
