//! Credit-risk reading list and regulatory summaries.
//!
//! A small, static knowledge holder used alongside the `eda` crate when
//! exploring credit-scoring datasets. It carries:
//!
//! - **References**: an ordered list of key documents on credit scoring
//! - **Framework summaries**: canned descriptions of regulatory frameworks
//!
//! # Quick Start
//!
//! ```rust
//! use credit_risk::{Framework, ReferenceCatalog};
//!
//! let catalog = ReferenceCatalog::new();
//! println!("{}", catalog.summarize(Framework::BaselII));
//!
//! for entry in catalog.list_references() {
//!     println!("{}: {}", entry.name, entry.url);
//! }
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{Framework, ReferenceCatalog, ReferenceEntry};
pub use error::{CatalogError, Result as CatalogResult};
