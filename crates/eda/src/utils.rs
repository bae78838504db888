//! Shared utilities for the dataset explorer.
//!
//! This module contains common helper functions used across multiple modules
//! to reduce code duplication and ensure consistency.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// How the explorer treats a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtypeCategory {
    /// Integer or floating point numbers
    Numeric,
    /// Text or categorical values
    Categorical,
    /// Boolean, temporal and other types
    Other,
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType holds text-like categorical values.
#[inline]
pub fn is_categorical_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String | DataType::Categorical(_, _))
}

/// Get the category of a DataType.
pub fn get_dtype_category(dtype: &DataType) -> DtypeCategory {
    if is_numeric_dtype(dtype) {
        DtypeCategory::Numeric
    } else if is_categorical_dtype(dtype) {
        DtypeCategory::Categorical
    } else {
        DtypeCategory::Other
    }
}

/// Names of the columns of `df` whose dtype falls in `category`, in column order.
pub fn columns_of_category(df: &DataFrame, category: DtypeCategory) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| get_dtype_category(column.dtype()) == category)
        .map(|column| column.name().to_string())
        .collect()
}

/// Names of the numeric columns of `df`, in column order.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    columns_of_category(df, DtypeCategory::Numeric)
}

/// Names of the categorical columns of `df`, in column order.
pub fn categorical_columns(df: &DataFrame) -> Vec<String> {
    columns_of_category(df, DtypeCategory::Categorical)
}

// =============================================================================
// Value Extraction Utilities
// =============================================================================

/// Column values as `f64`, nulls kept in position.
pub fn column_as_f64(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let series = df.column(name)?.as_materialized_series().cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

/// Non-null column values as `f64`, NaN excluded.
pub fn column_non_null_f64(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    Ok(column_as_f64(df, name)?
        .into_iter()
        .flatten()
        .filter(|value| !value.is_nan())
        .collect())
}

/// Frequency of each non-null value, rendered as a string, most frequent first.
///
/// Counts come from Polars `value_counts`. Equal counts keep the order in
/// which the values first appear in the column.
pub fn value_frequencies(df: &DataFrame, name: &str) -> PolarsResult<Vec<(String, usize)>> {
    let mut non_null = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?
        .drop_nulls();
    non_null.rename("value".into());
    if non_null.is_empty() {
        return Ok(Vec::new());
    }

    let first_seen: HashMap<String, usize> = non_null
        .unique_stable()?
        .str()?
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(position, value)| (value.to_string(), position))
        .collect();

    let value_counts_df = non_null.value_counts(true, false, "count".into(), false)?;
    let values = value_counts_df
        .column("value")?
        .as_materialized_series()
        .str()?;
    let counts = value_counts_df
        .column("count")?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;

    let mut frequencies: Vec<(String, usize)> = values
        .into_iter()
        .zip(counts.u64()?.into_iter())
        .filter_map(|(value, count)| Some((value?.to_string(), count? as usize)))
        .collect();
    frequencies.sort_by_key(|(value, count)| {
        (
            std::cmp::Reverse(*count),
            first_seen.get(value).copied().unwrap_or(usize::MAX),
        )
    });
    Ok(frequencies)
}

// =============================================================================
// Numeric Utilities
// =============================================================================

/// Sort a slice of floats ascending. NaN compares equal to everything.
pub fn sort_floats(values: &mut [f64]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

/// Quantile of already sorted values using linear interpolation.
///
/// Returns 0.0 for an empty slice.
pub fn quantile_sorted(values: &[f64], quantile: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let pos = quantile.clamp(0.0, 1.0) * (values.len() as f64 - 1.0);
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return values[lower];
    }
    let weight = pos - lower as f64;
    values[lower] + (values[upper] - values[lower]) * weight
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation (n - 1), `None` with fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() as f64 - 1.0);
    Some(variance.sqrt())
}

/// Truncate a string to max length with ellipsis.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
