//! Descriptive statistics for single columns.

use crate::utils::{mean, quantile_sorted, sample_std, sort_floats};
use serde::{Deserialize, Serialize};

/// count, mean, std, min, quartiles and max of a numeric column.
///
/// Statistics that are undefined for the column (everything on an empty
/// column, `std` with a single value) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericDescription {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl NumericDescription {
    /// Rows of the describe table, in display order.
    pub fn rows(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("count", Some(self.count as f64)),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q1),
            ("50%", self.median),
            ("75%", self.q3),
            ("max", self.max),
        ]
    }
}

/// count, distinct values, most frequent value and its frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalDescription {
    pub column: String,
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: usize,
}

/// Describe non-null numeric values.
pub(crate) fn describe_numeric(column: &str, values: &[f64]) -> NumericDescription {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sort_floats(&mut sorted);

    let quantile = |q: f64| (!sorted.is_empty()).then(|| quantile_sorted(&sorted, q));

    NumericDescription {
        column: column.to_string(),
        count: sorted.len(),
        mean: mean(&sorted),
        std: sample_std(&sorted),
        min: sorted.first().copied(),
        q1: quantile(0.25),
        median: quantile(0.5),
        q3: quantile(0.75),
        max: sorted.last().copied(),
    }
}

/// Describe a categorical column from its value frequencies, most frequent first.
pub(crate) fn describe_categorical(
    column: &str,
    frequencies: &[(String, usize)],
) -> CategoricalDescription {
    let top = frequencies.first();

    CategoricalDescription {
        column: column.to_string(),
        count: frequencies.iter().map(|(_, count)| count).sum(),
        unique: frequencies.len(),
        top: top.map(|(value, _)| value.clone()),
        freq: top.map(|(_, count)| *count).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::value_frequencies;
    use polars::prelude::*;

    // ==================== describe_numeric tests ====================

    #[test]
    fn test_describe_numeric_basic() {
        let desc = describe_numeric("v", &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(desc.count, 5);
        assert_eq!(desc.mean, Some(3.0));
        assert!((desc.std.unwrap() - 1.5811388300841898).abs() < 1e-12);
        assert_eq!(desc.min, Some(1.0));
        assert_eq!(desc.q1, Some(2.0));
        assert_eq!(desc.median, Some(3.0));
        assert_eq!(desc.q3, Some(4.0));
        assert_eq!(desc.max, Some(5.0));
    }

    #[test]
    fn test_describe_numeric_interpolated_quartiles() {
        let desc = describe_numeric("v", &[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(desc.q1, Some(1.75));
        assert_eq!(desc.median, Some(2.5));
        assert_eq!(desc.q3, Some(3.25));
    }

    #[test]
    fn test_describe_numeric_single_value() {
        let desc = describe_numeric("v", &[7.0]);
        assert_eq!(desc.count, 1);
        assert_eq!(desc.std, None);
        assert_eq!(desc.median, Some(7.0));
    }

    #[test]
    fn test_describe_numeric_empty() {
        let desc = describe_numeric("v", &[]);
        assert_eq!(desc.count, 0);
        assert_eq!(desc.mean, None);
        assert_eq!(desc.min, None);
        assert_eq!(desc.rows()[0], ("count", Some(0.0)));
    }

    // ==================== describe_categorical tests ====================

    #[test]
    fn test_describe_categorical() {
        let df = df!("c" => &["b", "a", "a", "b", "c"]).unwrap();
        let desc = describe_categorical("c", &value_frequencies(&df, "c").unwrap());
        assert_eq!(desc.count, 5);
        assert_eq!(desc.unique, 3);
        // "b" and "a" both appear twice; "b" is seen first
        assert_eq!(desc.top.as_deref(), Some("b"));
        assert_eq!(desc.freq, 2);
    }

    #[test]
    fn test_describe_categorical_empty() {
        let desc = describe_categorical("c", &[]);
        assert_eq!(desc.unique, 0);
        assert_eq!(desc.top, None);
        assert_eq!(desc.freq, 0);
    }
}
