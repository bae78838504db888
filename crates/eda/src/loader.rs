//! Delimited text loading.
//!
//! The loader maps every failure onto the two load error kinds:
//! [`EdaError::FileNotFound`] when the path does not resolve and
//! [`EdaError::LoadFailed`] for anything else.

use crate::config::ExplorerConfig;
use crate::error::{EdaError, Result};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions, NullValues};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Markers read as null in addition to empty fields.
pub const NULL_MARKERS: [&str; 18] = [
    "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A", "-NaN", "<NA>", "n/a", "-nan",
    "#NA", "#N/A N/A", "1.#QNAN", "-1.#QNAN", "1.#IND", "-1.#IND",
];

/// Load a delimited text file into a DataFrame.
///
/// Tries a strict read first; when that fails, retries once on a cleaned
/// copy of the content (blank lines removed, tripled quotes collapsed).
/// If both fail the error of the strict read is reported.
pub fn load_dataset(path: &Path, config: &ExplorerConfig) -> Result<DataFrame> {
    if !path.exists() {
        return Err(EdaError::FileNotFound(path.to_path_buf()));
    }

    let strict_error = match read_strict(path, config) {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Strict loading failed: {}", e);
            e
        }
    };

    match read_cleaned(path, config) {
        Ok(df) => {
            debug!("Loaded {} after cleaning its content", path.display());
            Ok(df)
        }
        Err(e) => {
            debug!("Loading cleaned content failed: {}", e);
            Err(EdaError::LoadFailed {
                path: path.to_path_buf(),
                reason: strict_error.to_string(),
            })
        }
    }
}

fn read_options(config: &ExplorerConfig) -> CsvReadOptions {
    let null_values = NULL_MARKERS.iter().map(|marker| (*marker).into()).collect();

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(config.infer_schema_rows))
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(config.delimiter)
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(NullValues::AllColumns(null_values))),
        )
}

fn read_strict(path: &Path, config: &ExplorerConfig) -> Result<DataFrame> {
    let df = read_options(config)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

fn read_cleaned(path: &Path, config: &ExplorerConfig) -> Result<DataFrame> {
    let content = std::fs::read_to_string(path)?;
    let cursor = Cursor::new(clean_content(&content));
    let df = read_options(config)
        .into_reader_with_file_handle(cursor)
        .finish()?;
    Ok(df)
}

/// Drop blank lines and collapse tripled quotes left by some exporters.
fn clean_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
