//! Error types for the reference catalog.

use thiserror::Error;

/// Errors produced while querying the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested regulatory framework has no summary.
    #[error("Unknown regulatory framework '{0}' (known: Basel II)")]
    UnknownFramework(String),
}

impl CatalogError {
    /// Get error code for machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFramework(_) => "UNKNOWN_FRAMEWORK",
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
