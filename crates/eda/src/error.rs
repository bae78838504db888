//! Custom error types for the dataset explorer.
//!
//! Load failures are split into the two kinds callers care about: the file
//! does not exist, or it exists but could not be parsed. Everything else
//! wraps the underlying library error.
//!
//! Errors are serializable so they can be embedded in JSON output.

use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the explorer.
#[derive(Error, Debug)]
pub enum EdaError {
    /// The dataset path does not resolve to a file.
    #[error("File not found: '{}'", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but could not be read into a table.
    #[error("Failed to load '{}': {reason}", .path.display())]
    LoadFailed { path: PathBuf, reason: String },

    /// An operation that needs data ran before a successful load.
    #[error("Data not loaded yet")]
    NotLoaded,

    /// Invalid configuration or argument.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A plot surface could not display a figure.
    #[error("Failed to render figure: {0}")]
    RenderFailed(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EdaError>,
    },
}

impl EdaError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EdaError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get error code for machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::LoadFailed { .. } => "LOAD_FAILED",
            Self::NotLoaded => "NOT_LOADED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::RenderFailed(_) => "RENDER_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Whether this error came from the load boundary.
    pub fn is_load_error(&self) -> bool {
        match self {
            Self::FileNotFound(_) | Self::LoadFailed { .. } => true,
            Self::WithContext { source, .. } => source.is_load_error(),
            _ => false,
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for EdaError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("EdaError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for explorer operations.
pub type Result<T> = std::result::Result<T, EdaError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EdaError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(EdaError::NotLoaded.error_code(), "NOT_LOADED");
        assert_eq!(
            EdaError::FileNotFound(PathBuf::from("missing.csv")).error_code(),
            "FILE_NOT_FOUND"
        );
    }

    #[test]
    fn test_is_load_error() {
        assert!(EdaError::FileNotFound(PathBuf::from("x.csv")).is_load_error());
        assert!(
            EdaError::LoadFailed {
                path: PathBuf::from("x.csv"),
                reason: "bad".to_string()
            }
            .is_load_error()
        );
        assert!(!EdaError::NotLoaded.is_load_error());
    }

    #[test]
    fn test_file_not_found_message_names_path() {
        let error = EdaError::FileNotFound(PathBuf::from("data/missing.csv"));
        assert!(error.to_string().contains("data/missing.csv"));
    }

    #[test]
    fn test_error_serialization() {
        let error = EdaError::InvalidConfig("max_categories must be at least 1".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("INVALID_CONFIG"));
        assert!(json.contains("max_categories"));
    }

    #[test]
    fn test_with_context() {
        let error = EdaError::NotLoaded.with_context("While plotting");
        assert!(error.to_string().contains("While plotting"));
        assert_eq!(error.error_code(), "NOT_LOADED");
        assert!(!error.is_load_error());
    }

    #[test]
    fn test_polars_result_context() {
        let result: std::result::Result<(), polars::error::PolarsError> = Err(
            polars::error::PolarsError::ColumnNotFound("Amount".into()),
        );
        let error = result.context("Failed to read numeric column 'Amount'").unwrap_err();
        assert_eq!(error.error_code(), "POLARS_ERROR");
        assert!(error.to_string().starts_with("Failed to read numeric column 'Amount': "));
    }
}
