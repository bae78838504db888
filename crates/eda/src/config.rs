//! Configuration types for the dataset explorer.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic explorer setup.

use serde::{Deserialize, Serialize};

/// Columns dropped before plotting categorical distributions.
///
/// Both are high-cardinality identifiers in the credit transaction data the
/// explorer was written for and produce unreadable count plots.
pub const DEFAULT_EXCLUDED_COLUMNS: [&str; 2] = ["TransactionId", "CurrencyCode"];

/// Configuration for the dataset explorer.
///
/// Use [`ExplorerConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use eda::ExplorerConfig;
///
/// let config = ExplorerConfig::builder()
///     .histogram_bins(30)
///     .max_categories(10)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Number of equal-width bins per histogram.
    /// Default: 20
    pub histogram_bins: usize,

    /// Default number of most frequent values kept per count plot.
    /// Default: 20
    pub max_categories: usize,

    /// Number of panels per row in the categorical grid.
    /// Default: 2
    pub categorical_grid_columns: usize,

    /// Columns removed from the dataset, in place and permanently, before
    /// categorical distributions are plotted. Absent columns are ignored.
    /// Default: `["TransactionId", "CurrencyCode"]`
    pub excluded_categorical_columns: Vec<String>,

    /// Rotation applied to count plot tick labels, in degrees.
    /// Default: 45.0
    pub label_rotation_degrees: f64,

    /// Decimal places used for heatmap annotations.
    /// Default: 2
    pub annotation_precision: usize,

    /// Field delimiter of the input file.
    /// Default: `,`
    pub delimiter: u8,

    /// Number of rows used to infer column types.
    /// Default: 100
    pub infer_schema_rows: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 20,
            max_categories: 20,
            categorical_grid_columns: 2,
            excluded_categorical_columns: DEFAULT_EXCLUDED_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            label_rotation_degrees: 45.0,
            annotation_precision: 2,
            delimiter: b',',
            infer_schema_rows: 100,
        }
    }
}

impl ExplorerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ExplorerConfigBuilder {
        ExplorerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("histogram_bins", self.histogram_bins),
            ("max_categories", self.max_categories),
            ("categorical_grid_columns", self.categorical_grid_columns),
            ("infer_schema_rows", self.infer_schema_rows),
        ] {
            if value == 0 {
                return Err(ConfigValidationError::MustBePositive {
                    field: field.to_string(),
                });
            }
        }

        if !self.label_rotation_degrees.is_finite() {
            return Err(ConfigValidationError::InvalidRotation(
                self.label_rotation_degrees,
            ));
        }

        if self.annotation_precision > 6 {
            return Err(ConfigValidationError::InvalidPrecision(
                self.annotation_precision,
            ));
        }

        if !self.delimiter.is_ascii() || self.delimiter == b'"' || self.delimiter == b'\n' {
            return Err(ConfigValidationError::InvalidDelimiter(
                self.delimiter as char,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid value for '{field}': must be at least 1")]
    MustBePositive { field: String },

    #[error("Invalid label rotation: {0} (must be finite)")]
    InvalidRotation(f64),

    #[error("Invalid annotation precision: {0} (must be at most 6)")]
    InvalidPrecision(usize),

    #[error("Invalid delimiter: {0:?} (must be ASCII and not a quote or newline)")]
    InvalidDelimiter(char),
}

impl From<ConfigValidationError> for crate::error::EdaError {
    fn from(err: ConfigValidationError) -> Self {
        crate::error::EdaError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`ExplorerConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExplorerConfigBuilder {
    config: ExplorerConfig,
}

impl ExplorerConfigBuilder {
    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.config.histogram_bins = bins;
        self
    }

    /// Set the default number of categories kept per count plot.
    pub fn max_categories(mut self, max: usize) -> Self {
        self.config.max_categories = max;
        self
    }

    /// Set the number of panels per row in the categorical grid.
    pub fn categorical_grid_columns(mut self, columns: usize) -> Self {
        self.config.categorical_grid_columns = columns;
        self
    }

    /// Replace the list of columns dropped before categorical plotting.
    pub fn excluded_categorical_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.excluded_categorical_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Keep every column when plotting categorical distributions.
    pub fn keep_all_columns(mut self) -> Self {
        self.config.excluded_categorical_columns.clear();
        self
    }

    /// Set the tick label rotation in degrees.
    pub fn label_rotation_degrees(mut self, degrees: f64) -> Self {
        self.config.label_rotation_degrees = degrees;
        self
    }

    /// Set the heatmap annotation precision.
    pub fn annotation_precision(mut self, digits: usize) -> Self {
        self.config.annotation_precision = digits;
        self
    }

    /// Set the input field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the number of rows used for schema inference.
    pub fn infer_schema_rows(mut self, rows: usize) -> Self {
        self.config.infer_schema_rows = rows;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ExplorerConfig, ConfigValidationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert_eq!(config.histogram_bins, 20);
        assert_eq!(config.max_categories, 20);
        assert_eq!(config.categorical_grid_columns, 2);
        assert_eq!(
            config.excluded_categorical_columns,
            vec!["TransactionId".to_string(), "CurrencyCode".to_string()]
        );
        assert_eq!(config.annotation_precision, 2);
        assert_eq!(config.delimiter, b',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ExplorerConfig::builder()
            .histogram_bins(30)
            .max_categories(5)
            .delimiter(b';')
            .keep_all_columns()
            .build()
            .unwrap();

        assert_eq!(config.histogram_bins, 30);
        assert_eq!(config.max_categories, 5);
        assert_eq!(config.delimiter, b';');
        assert!(config.excluded_categorical_columns.is_empty());
    }

    #[test]
    fn test_builder_custom_exclusions() {
        let config = ExplorerConfig::builder()
            .excluded_categorical_columns(["CustomerId"])
            .build()
            .unwrap();
        assert_eq!(config.excluded_categorical_columns, vec!["CustomerId"]);
    }

    #[test]
    fn test_zero_bins_rejected() {
        let result = ExplorerConfig::builder().histogram_bins(0).build();
        assert_eq!(
            result,
            Err(ConfigValidationError::MustBePositive {
                field: "histogram_bins".to_string()
            })
        );
    }

    #[test]
    fn test_zero_max_categories_rejected() {
        assert!(ExplorerConfig::builder().max_categories(0).build().is_err());
    }

    #[test]
    fn test_invalid_precision() {
        let result = ExplorerConfig::builder().annotation_precision(12).build();
        assert!(matches!(
            result,
            Err(ConfigValidationError::InvalidPrecision(12))
        ));
    }

    #[test]
    fn test_invalid_rotation() {
        let result = ExplorerConfig::builder()
            .label_rotation_degrees(f64::NAN)
            .build();
        assert!(matches!(result, Err(ConfigValidationError::InvalidRotation(_))));
    }

    #[test]
    fn test_invalid_delimiter() {
        assert!(ExplorerConfig::builder().delimiter(b'"').build().is_err());
        assert!(ExplorerConfig::builder().delimiter(0xE9).build().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = ExplorerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ExplorerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
