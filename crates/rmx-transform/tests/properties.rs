//! Property tests for the matrix shape invariant and value placement.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use proptest::prelude::{Just, Strategy, prop, prop_assert, prop_assert_eq, prop_oneof, proptest};

use rmx_transform::MatrixBuilder;

fn cell_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1.0e9..1.0e9f64,
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn grid() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
    (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(cell_value(), rows * cols),
        )
    })
}

/// A pre-aggregated, pre-sorted summary table with one row per label pair.
fn dense_summary(rows: usize, cols: usize, values: &[f64]) -> DataFrame {
    let mut starts = Vec::with_capacity(rows * cols);
    let mut ends = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            starts.push(format!("S{row:02}"));
            ends.push(format!("E{col:02}"));
        }
    }
    let columns: Vec<Column> = vec![
        Series::new("start_state".into(), starts).into(),
        Series::new("end_state".into(), ends).into(),
        Series::new("metric_change".into(), values).into(),
    ];
    DataFrame::new(columns).expect("dense summary")
}

proptest! {
    #[test]
    fn shape_invariant_and_placement((rows, cols, values) in grid()) {
        let df = dense_summary(rows, cols, &values);
        let matrix = MatrixBuilder::new().build(&df).expect("build");

        let (matrix_rows, matrix_cols) = matrix.shape();
        prop_assert_eq!(matrix_rows, rows);
        prop_assert_eq!(matrix_cols, cols);
        prop_assert_eq!(matrix.cell_count(), rows * cols);
        prop_assert_eq!(matrix.cell_count(), df.height());

        for row in 0..rows {
            for col in 0..cols {
                let input = values[row * cols + col];
                let cell = matrix.get(row, col);
                if input.is_infinite() {
                    prop_assert_eq!(cell, None);
                } else {
                    prop_assert_eq!(cell, Some(input));
                }
            }
        }
    }

    #[test]
    fn dropping_one_row_fails_on_multi_label_axes((rows, cols, values) in grid()) {
        // Removing the last row breaks rows x cols == height whenever both
        // axes keep all their labels, which is the case for grids with at
        // least two labels per axis.
        let df = dense_summary(rows, cols, &values);
        let truncated = df.head(Some(df.height() - 1));
        let result = MatrixBuilder::new().build(&truncated);
        if rows > 1 && cols > 1 {
            prop_assert!(result.is_err());
        }
    }
}
