//! Dataset profiling: shape, descriptive statistics, column info and
//! missing-value counts.
//!
//! The profiler only computes; printing is left to the explorer, which uses
//! the `*_table` helpers to render the results as text.

mod statistics;

pub use statistics::{CategoricalDescription, NumericDescription};

use crate::utils::{
    DtypeCategory, categorical_columns, column_non_null_f64,
    get_dtype_category, numeric_columns, truncate_str, value_frequencies,
};
use crate::error::{Result, ResultExt};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use statistics::{describe_categorical, describe_numeric};
use std::fmt::Write as _;

/// Type and completeness of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub index: usize,
    pub name: String,
    pub dtype: String,
    pub category: DtypeCategory,
    pub non_null_count: usize,
    pub null_count: usize,
}

/// Overview of a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// (rows, columns)
    pub shape: (usize, usize),
    /// Describe rows for numeric columns.
    pub numeric: Vec<NumericDescription>,
    /// Describe rows for categorical columns, only filled when the dataset
    /// has no numeric column.
    pub categorical: Vec<CategoricalDescription>,
    pub columns: Vec<ColumnInfo>,
    pub memory_bytes: usize,
}

/// Null count of one column with at least one missing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingColumn {
    pub column: String,
    pub missing_count: usize,
}

/// Columns with missing values, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingValuesReport {
    pub columns: Vec<MissingColumn>,
    pub total_missing_cells: usize,
    pub total_missing_percentage: f64,
}

impl MissingValuesReport {
    pub fn has_missing(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Missing count of a column, 0 when it is complete or unknown.
    pub fn missing_for(&self, column: &str) -> usize {
        self.columns
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.missing_count)
            .unwrap_or(0)
    }

    /// `{column}  {count}` lines, column names left-aligned.
    pub fn table(&self) -> String {
        let width = self
            .columns
            .iter()
            .map(|entry| entry.column.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for entry in &self.columns {
            let _ = writeln!(out, "{:<width$}  {}", entry.column, entry.missing_count);
        }
        out
    }
}

/// Data profiler for summarizing dataset structure and completeness.
pub struct DataProfiler;

impl DataProfiler {
    /// Shape, describe statistics and per-column info.
    pub fn summarize(df: &DataFrame) -> Result<DatasetSummary> {
        let numeric_names = numeric_columns(df);

        let mut numeric = Vec::with_capacity(numeric_names.len());
        for name in &numeric_names {
            let values = column_non_null_f64(df, name)
                .context(format!("Failed to read numeric column '{name}'"))?;
            numeric.push(describe_numeric(name, &values));
        }

        let mut categorical = Vec::new();
        if numeric.is_empty() {
            for name in categorical_columns(df) {
                let frequencies = value_frequencies(df, &name)
                    .context(format!("Failed to count values of column '{name}'"))?;
                categorical.push(describe_categorical(&name, &frequencies));
            }
        }

        let columns = df
            .get_columns()
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnInfo {
                index,
                name: column.name().to_string(),
                dtype: column.dtype().to_string(),
                category: get_dtype_category(column.dtype()),
                non_null_count: column.len() - column.null_count(),
                null_count: column.null_count(),
            })
            .collect();

        Ok(DatasetSummary {
            shape: df.shape(),
            numeric,
            categorical,
            columns,
            memory_bytes: df.estimated_size(),
        })
    }

    /// Null counts of the columns that have any.
    pub fn missing_values(df: &DataFrame) -> MissingValuesReport {
        let columns: Vec<MissingColumn> = df
            .get_columns()
            .iter()
            .filter(|column| column.null_count() > 0)
            .map(|column| MissingColumn {
                column: column.name().to_string(),
                missing_count: column.null_count(),
            })
            .collect();

        let total_missing_cells: usize = columns.iter().map(|c| c.missing_count).sum();
        let total_cells = df.height().saturating_mul(df.width());
        let total_missing_percentage = if total_cells > 0 {
            (total_missing_cells as f64 / total_cells as f64) * 100.0
        } else {
            0.0
        };

        MissingValuesReport {
            columns,
            total_missing_cells,
            total_missing_percentage,
        }
    }
}

impl DatasetSummary {
    /// Number of columns the explorer treats as numeric.
    pub fn numeric_column_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| c.category == DtypeCategory::Numeric)
            .count()
    }

    /// Statistics as a table with one column per dataset column.
    pub fn describe_table(&self) -> String {
        let label_width: usize = 6;
        let cell_width: usize = 14;

        let mut out = String::new();

        if !self.numeric.is_empty() {
            let _ = write!(out, "{:<label_width$}", "");
            for desc in &self.numeric {
                let _ = write!(out, "{:>cell_width$}", truncate_str(&desc.column, cell_width - 1));
            }
            out.push('\n');

            for row in 0..8 {
                let label = self.numeric[0].rows()[row].0;
                let _ = write!(out, "{label:<label_width$}");
                for desc in &self.numeric {
                    let cell = match desc.rows()[row].1 {
                        Some(value) => format!("{value:.6}"),
                        None => "NaN".to_string(),
                    };
                    let _ = write!(out, "{cell:>cell_width$}");
                }
                out.push('\n');
            }
            return out;
        }

        if !self.categorical.is_empty() {
            let _ = write!(out, "{:<label_width$}", "");
            for desc in &self.categorical {
                let _ = write!(out, "{:>cell_width$}", truncate_str(&desc.column, cell_width - 1));
            }
            out.push('\n');

            let rows: [(&str, fn(&CategoricalDescription) -> String); 4] = [
                ("count", |d| d.count.to_string()),
                ("unique", |d| d.unique.to_string()),
                ("top", |d| d.top.clone().unwrap_or_else(|| "NaN".to_string())),
                ("freq", |d| d.freq.to_string()),
            ];
            for (label, cell) in rows {
                let _ = write!(out, "{label:<label_width$}");
                for desc in &self.categorical {
                    let _ = write!(out, "{:>cell_width$}", truncate_str(&cell(desc), cell_width - 1));
                }
                out.push('\n');
            }
            return out;
        }

        out.push_str("(no numeric or categorical columns)\n");
        out
    }

    /// Column index, name, non-null count and dtype, plus memory usage.
    pub fn info_table(&self) -> String {
        let name_width = self
            .columns
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Column".len());

        let mut out = String::new();
        let _ = writeln!(out, "RangeIndex: {} entries", self.shape.0);
        let _ = writeln!(out, "Data columns (total {} columns):", self.shape.1);
        let _ = writeln!(
            out,
            " {:>3}  {:<name_width$}  {:<14}  {}",
            "#", "Column", "Non-Null Count", "Dtype"
        );
        for column in &self.columns {
            let _ = writeln!(
                out,
                " {:>3}  {:<name_width$}  {:<14}  {}",
                column.index,
                column.name,
                format!("{} non-null", column.non_null_count),
                column.dtype
            );
        }
        let _ = writeln!(out, "memory usage: {} bytes", self.memory_bytes);
        out
    }
}

/// Category of a DataFrame column, used by callers that hold the frame.
pub fn column_category(df: &DataFrame, name: &str) -> Option<DtypeCategory> {
    df.column(name).ok().map(|column| get_dtype_category(column.dtype()))
}
