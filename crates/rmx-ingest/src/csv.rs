//! CSV loading for summary and raw observation tables.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Read a CSV file into a `DataFrame`.
///
/// The first line is taken as the header row; polars infers column dtypes,
/// which is what the role resolver later introspects. Empty files are
/// rejected so downstream code never sees a zero-row table.
pub fn read_summary_csv(path: &Path) -> Result<DataFrame> {
    if let Err(error) = std::fs::metadata(path) {
        if error.kind() == std::io::ErrorKind::NotFound {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        return Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?
        .finish()
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV table"
    );
    Ok(df)
}
