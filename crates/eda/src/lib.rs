//! Exploratory Data Analysis Library
//!
//! Load a delimited text file into a Polars DataFrame and look at it from
//! the usual angles before modelling.
//!
//! # Overview
//!
//! - **Overview**: shape, describe statistics and per-column info
//! - **Distributions**: histograms of the numeric columns
//! - **Categorical counts**: most frequent values of the text columns
//! - **Correlations**: annotated Pearson heatmap
//! - **Missing values**: null counts per column
//! - **Outliers**: boxplots with 1.5 IQR whiskers
//!
//! Reports print to a console writer and hand their figures to a
//! [`PlotSurface`]. Figures are plain data ([`Figure`]) and can be drawn as
//! text, written as JSON or kept in memory.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use eda::{DatasetExplorer, ExplorerConfig, JsonSurface};
//!
//! let config = ExplorerConfig::builder()
//!     .histogram_bins(30)
//!     .max_categories(10)
//!     .build()?;
//!
//! let mut explorer = DatasetExplorer::builder("data/transactions.csv")
//!     .config(config)
//!     .surface(JsonSurface::stdout())
//!     .build()?;
//!
//! if explorer.load().is_ok() {
//!     explorer.run_all()?;
//! }
//! ```
//!
//! # Reports before loading
//!
//! Every report checks for a loaded dataset first. Without one it prints
//! `Data not loaded yet. Please load the data first.` and returns
//! [`Outcome::Skipped`] instead of an error.

pub mod config;
pub mod console;
pub mod error;
pub mod explorer;
pub mod figures;
pub mod loader;
pub mod profiler;
pub mod surface;
pub mod utils;

// Re-exports for convenient access
pub use config::{
    ConfigValidationError, DEFAULT_EXCLUDED_COLUMNS, ExplorerConfig, ExplorerConfigBuilder,
};
pub use console::SharedBuffer;
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use explorer::{DatasetExplorer, DatasetState, ExplorerBuilder, Outcome, Report, SkipReason};
pub use figures::{
    BoxPlotSummary, CategoryCount, CountPlot, Figure, GridLayout, HeatmapMatrix, Histogram,
    HistogramBin,
};
pub use loader::{NULL_MARKERS, load_dataset};
pub use profiler::{
    CategoricalDescription, ColumnInfo, DataProfiler, DatasetSummary, MissingColumn,
    MissingValuesReport, NumericDescription,
};
pub use surface::{
    ClosureSurface, JsonSurface, PlotSurface, RecordingSurface, TerminalSurface, render_figure,
};
pub use utils::{DtypeCategory, get_dtype_category, is_categorical_dtype, is_numeric_dtype};
