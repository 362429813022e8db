//! End-to-end tests for matrix assembly and role inference.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use rmx_model::{AmbiguityKind, AmbiguousColumnError, ColumnRole};
use rmx_transform::{BuildError, CollectedNotices, MatrixBuilder};

fn frame(columns: Vec<Column>) -> DataFrame {
    DataFrame::new(columns).expect("test frame")
}

fn string_column(name: &str, values: &[&str]) -> Column {
    Series::new(name.into(), values).into()
}

fn float_column(name: &str, values: &[f64]) -> Column {
    Series::new(name.into(), values).into()
}

fn summary_frame() -> DataFrame {
    frame(vec![
        string_column("start_state", &["A", "A", "B", "B"]),
        string_column("end_state", &["A", "B", "A", "B"]),
        float_column("metric_change", &[10.0, -2.5, 0.0, 7.0]),
    ])
}

#[test]
fn inference_selects_unambiguous_columns() {
    let notices = CollectedNotices::new();
    let matrix = MatrixBuilder::new()
        .build_with_notices(&summary_frame(), &notices)
        .expect("build with full inference");
    assert_eq!(matrix.shape(), (2, 2));
    assert_eq!(
        notices.entries(),
        vec![
            (ColumnRole::StartState, "start_state".to_string()),
            (ColumnRole::EndState, "end_state".to_string()),
            (ColumnRole::Metric, "metric_change".to_string()),
        ]
    );
}

#[test]
fn two_start_columns_fail_with_multiple_matches() {
    let df = frame(vec![
        string_column("start_state", &["A"]),
        string_column("prior_start", &["A"]),
        string_column("end_state", &["B"]),
        float_column("metric_change", &[1.0]),
    ]);
    let error = MatrixBuilder::new().build(&df).expect_err("ambiguous start");
    match error {
        BuildError::AmbiguousColumn(inner) => {
            assert_eq!(inner.role(), ColumnRole::StartState);
            assert_eq!(inner.kind(), AmbiguityKind::MultipleMatches);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn no_numeric_column_fails_with_not_found() {
    let df = frame(vec![
        string_column("start_state", &["A"]),
        string_column("end_state", &["B"]),
        string_column("comment", &["no amounts here"]),
    ]);
    let error = MatrixBuilder::new().build(&df).expect_err("missing metric");
    match error {
        BuildError::AmbiguousColumn(inner) => {
            assert_eq!(inner.role(), ColumnRole::Metric);
            assert_eq!(inner.kind(), AmbiguityKind::NotFound);
            assert!(inner.to_string().contains("a numeric column"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn explicit_columns_bypass_inference() {
    // Two numeric columns would make metric inference ambiguous, and the
    // state columns carry no start/end naming at all.
    let df = frame(vec![
        string_column("from_rating", &["A", "A", "B", "B"]),
        string_column("to_rating", &["A", "B", "A", "B"]),
        float_column("exposure", &[1.0, 2.0, 3.0, 4.0]),
        float_column("row_weight", &[0.1, 0.2, 0.3, 0.4]),
    ]);
    let notices = CollectedNotices::new();
    let matrix = MatrixBuilder::new()
        .with_start_column("from_rating")
        .with_end_column("to_rating")
        .with_metric_column("exposure")
        .build_with_notices(&df, &notices)
        .expect("explicit roles");
    assert_eq!(matrix.get(1, 0), Some(3.0));
    // No inference happened, so no notices.
    assert!(notices.entries().is_empty());
}

#[test]
fn notices_cover_only_inferred_roles() {
    let df = frame(vec![
        string_column("start_state", &["A"]),
        string_column("end_state", &["B"]),
        float_column("metric_change", &[1.0]),
        float_column("row_weight", &[0.5]),
    ]);
    let notices = CollectedNotices::new();
    MatrixBuilder::new()
        .with_metric_column("metric_change")
        .build_with_notices(&df, &notices)
        .expect("build with explicit metric");
    assert_eq!(
        notices.entries(),
        vec![
            (ColumnRole::StartState, "start_state".to_string()),
            (ColumnRole::EndState, "end_state".to_string()),
        ]
    );
}

#[test]
fn label_axes_sort_ascending_regardless_of_row_order() {
    let df = frame(vec![
        string_column("start_state", &["B", "A", "B", "A"]),
        string_column("end_state", &["C", "B", "B", "C"]),
        float_column("metric_change", &[1.0, 2.0, 3.0, 4.0]),
    ]);
    let matrix = MatrixBuilder::new().build(&df).expect("build");
    assert_eq!(matrix.row_labels(), ["A", "B"]);
    assert_eq!(matrix.col_labels(), ["B", "C"]);
}

#[test]
fn infinities_become_missing_cells() {
    let df = frame(vec![
        string_column("start_state", &["A", "A", "B", "B"]),
        string_column("end_state", &["A", "B", "A", "B"]),
        float_column(
            "metric_change",
            &[1.0, f64::INFINITY, f64::NEG_INFINITY, 4.0],
        ),
    ]);
    let matrix = MatrixBuilder::new().build(&df).expect("build");
    assert_eq!(matrix.get(0, 0), Some(1.0));
    assert_eq!(matrix.get(0, 1), None);
    assert_eq!(matrix.get(1, 0), None);
    assert_eq!(matrix.get(1, 1), Some(4.0));
}

#[test]
fn upstream_nulls_stay_missing() {
    let metric: Vec<Option<f64>> = vec![Some(1.0), None, Some(3.0), Some(4.0)];
    let df = frame(vec![
        string_column("start_state", &["A", "A", "B", "B"]),
        string_column("end_state", &["A", "B", "A", "B"]),
        Series::new("metric_change".into(), metric).into(),
    ]);
    let matrix = MatrixBuilder::new().build(&df).expect("build");
    assert_eq!(matrix.get(0, 1), None);
    assert_eq!(matrix.get(1, 1), Some(4.0));
}

#[test]
fn row_count_mismatch_is_rejected() {
    // 2 x 2 label axes but only 3 summary rows.
    let df = frame(vec![
        string_column("start_state", &["A", "A", "B"]),
        string_column("end_state", &["A", "B", "B"]),
        float_column("metric_change", &[1.0, 2.0, 3.0]),
    ]);
    let error = MatrixBuilder::new().build(&df).expect_err("shape mismatch");
    match error {
        BuildError::ShapeMismatch {
            rows,
            cols,
            expected,
            actual,
        } => {
            assert_eq!((rows, cols), (2, 2));
            assert_eq!(expected, 4);
            assert_eq!(actual, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn input_table_is_not_mutated() {
    let df = summary_frame();
    let before = df.clone();
    let _ = MatrixBuilder::new().build(&df).expect("build");
    assert!(df.equals_missing(&before));
}

#[test]
fn resolution_failure_is_deterministic() {
    let df = frame(vec![
        string_column("start_state", &["A"]),
        string_column("start_rating", &["A"]),
        string_column("end_state", &["B"]),
        float_column("metric_change", &[1.0]),
    ]);
    let first = MatrixBuilder::new().build(&df).expect_err("first attempt");
    let second = MatrixBuilder::new().build(&df).expect_err("second attempt");
    let as_ambiguous = |error: BuildError| -> AmbiguousColumnError {
        match error {
            BuildError::AmbiguousColumn(inner) => inner,
            other => panic!("unexpected error: {other}"),
        }
    };
    assert_eq!(as_ambiguous(first), as_ambiguous(second));
}
