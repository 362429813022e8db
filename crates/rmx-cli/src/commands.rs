//! Command implementations for the `rmx` binary.

use anyhow::Context;
use polars::prelude::DataFrame;

use rmx_ingest::{SummarizeOptions, read_summary_csv, summarize_transitions};
use rmx_model::TransitionMatrix;
use rmx_transform::{MatrixBuilder, TracingNotices};

use crate::cli::{BuildArgs, RolesArgs};
use crate::render::{print_matrix, print_roles};

/// Build a matrix from a CSV table and print it.
pub fn run_build(args: &BuildArgs) -> anyhow::Result<()> {
    let table = load_table(args)?;
    let matrix = builder_from_columns(
        args.start_column.as_deref(),
        args.end_column.as_deref(),
        args.metric_column.as_deref(),
    )
    .build(&table)
    .context("failed to build migration matrix")?;

    if args.json {
        print_matrix_json(&matrix)?;
    } else {
        print_matrix(&matrix);
    }
    Ok(())
}

/// Resolve the role bindings for a summary table and print them.
pub fn run_roles(args: &RolesArgs) -> anyhow::Result<()> {
    let table = read_summary_csv(&args.input)?;
    let bindings = builder_from_columns(
        args.start_column.as_deref(),
        args.end_column.as_deref(),
        args.metric_column.as_deref(),
    )
    .resolve_roles(&table, &TracingNotices)
    .context("failed to resolve column roles")?;
    print_roles(&bindings);
    Ok(())
}

fn load_table(args: &BuildArgs) -> anyhow::Result<DataFrame> {
    let table = read_summary_csv(&args.input)?;
    if !args.raw {
        return Ok(table);
    }
    let options = SummarizeOptions {
        id_column: args.id_column.clone(),
        date_column: args.date_column.clone(),
        state_column: args.state_column.clone(),
        metric_column: args.value_column.clone(),
    };
    let summary = summarize_transitions(&table, &options)
        .context("failed to summarize raw observations")?;
    Ok(summary)
}

fn builder_from_columns(
    start: Option<&str>,
    end: Option<&str>,
    metric: Option<&str>,
) -> MatrixBuilder {
    let mut builder = MatrixBuilder::new();
    if let Some(column) = start {
        builder = builder.with_start_column(column);
    }
    if let Some(column) = end {
        builder = builder.with_end_column(column);
    }
    if let Some(column) = metric {
        builder = builder.with_metric_column(column);
    }
    builder
}

fn print_matrix_json(matrix: &TransitionMatrix) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(matrix).context("failed to serialize matrix")?;
    println!("{json}");
    Ok(())
}
