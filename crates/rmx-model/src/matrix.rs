use serde::{Deserialize, Serialize};

use crate::error::{Result, RmxError};

/// A labeled two-dimensional grid of aggregated metric amounts.
///
/// Rows are starting states, columns are ending states, both sorted
/// ascending. Cells are stored row-major; `None` is the missing-value
/// marker (used for sanitized infinities and upstream nulls).
///
/// Each matrix is freshly constructed per build and owned by the caller;
/// there is no shared mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cells: Vec<Option<f64>>,
}

impl TransitionMatrix {
    /// Construct a matrix from sorted label axes and row-major cells.
    ///
    /// Fails if the cell count does not equal `row_labels.len() *
    /// col_labels.len()`.
    pub fn new(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        cells: Vec<Option<f64>>,
    ) -> Result<Self> {
        let expected = row_labels.len() * col_labels.len();
        if cells.len() != expected {
            return Err(RmxError::CellCountMismatch {
                rows: row_labels.len(),
                cols: col_labels.len(),
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            row_labels,
            col_labels,
            cells,
        })
    }

    /// Ordered starting-state labels (one per row).
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Ordered ending-state labels (one per column).
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// `(rows, cols)` dimensions.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_labels.len(), self.col_labels.len())
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell value at `(row, col)`, or `None` for a missing value.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        assert!(row < self.row_labels.len(), "row index out of bounds");
        assert!(col < self.col_labels.len(), "col index out of bounds");
        self.cells[row * self.col_labels.len() + col]
    }

    /// Iterate rows as `(row_label, cells)` pairs, in row order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        let width = self.col_labels.len();
        self.row_labels
            .iter()
            .enumerate()
            .map(move |(index, label)| {
                (label.as_str(), &self.cells[index * width..(index + 1) * width])
            })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<f64>] {
        &self.cells
    }
}
