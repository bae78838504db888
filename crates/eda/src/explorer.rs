//! The dataset explorer.
//!
//! [`DatasetExplorer`] owns one dataset read from a delimited text file and
//! runs the exploratory reports on it: overview, distributions, categorical
//! counts, correlations, missing values and outlier boxplots. Every report
//! writes its progress messages to the console and hands its figures to the
//! configured [`PlotSurface`].
//!
//! Reports called before a successful [`load`](DatasetExplorer::load) do not
//! fail: they print a "not loaded" message and return
//! [`Outcome::Skipped`].

use crate::config::{ConfigValidationError, ExplorerConfig};
use crate::error::{EdaError, Result};
use crate::figures::{
    Figure, GridLayout, build_box_summary, build_correlation_matrix, build_count_plot,
    build_histogram,
};
use crate::loader::load_dataset;
use crate::profiler::{DataProfiler, DatasetSummary, MissingValuesReport, column_category};
use crate::surface::{PlotSurface, TerminalSurface};
use crate::utils::{
    DtypeCategory, categorical_columns, column_as_f64, column_non_null_f64, numeric_columns,
    value_frequencies,
};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const OVERVIEW_RULE_WIDTH: usize = 30;

/// Whether the explorer holds a dataset.
#[derive(Debug, Clone, Default)]
pub enum DatasetState {
    #[default]
    NotLoaded,
    Loaded(DataFrame),
}

impl DatasetState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn frame(&self) -> Option<&DataFrame> {
        match self {
            Self::Loaded(df) => Some(df),
            Self::NotLoaded => None,
        }
    }

    /// The loaded frame, or the skip reason every report returns without one.
    pub fn require_loaded(&self) -> std::result::Result<&DataFrame, SkipReason> {
        self.frame().ok_or(SkipReason::NotLoaded)
    }

    fn require_loaded_mut(&mut self) -> std::result::Result<&mut DataFrame, SkipReason> {
        match self {
            Self::Loaded(df) => Ok(df),
            Self::NotLoaded => Err(SkipReason::NotLoaded),
        }
    }
}

/// Why a report did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotLoaded,
    NoNumericColumns,
    NoCategoricalColumns,
    NoValidColumns,
}

impl SkipReason {
    /// Console message printed when a report is skipped for this reason.
    ///
    /// `NoNumericColumns` has no single message since the distribution and
    /// correlation reports word it differently; see [`SkipReason::message_for`].
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotLoaded => "Data not loaded yet. Please load the data first.",
            Self::NoNumericColumns => "No numerical columns found for plotting distributions.",
            Self::NoCategoricalColumns => {
                "No categorical columns found for plotting distributions."
            }
            Self::NoValidColumns => "No valid numerical columns found for plotting.",
        }
    }

    /// Console message for this reason as reported by `report`.
    pub fn message_for(&self, report: Report) -> &'static str {
        match (self, report) {
            (Self::NoNumericColumns, Report::Correlation) => {
                "No numerical data available for correlation analysis."
            }
            _ => self.message(),
        }
    }
}

/// The reports the explorer can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    Summary,
    Distributions,
    Categorical,
    Correlation,
    Missing,
    Boxplots,
}

impl Report {
    /// Every report, in the order [`DatasetExplorer::run_all`] runs them.
    pub const ALL: [Report; 6] = [
        Report::Summary,
        Report::Distributions,
        Report::Categorical,
        Report::Correlation,
        Report::Missing,
        Report::Boxplots,
    ];
}

/// Result of a report that may have been skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    Skipped(SkipReason),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped(reason) => Some(*reason),
            Self::Done(_) => None,
        }
    }

    /// The produced value, if the report ran.
    pub fn done(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Done(value) => Outcome::Done(f(value)),
            Self::Skipped(reason) => Outcome::Skipped(reason),
        }
    }
}

/// Print the skip message and return the skipped outcome.
fn skip<T>(console: &mut dyn Write, reason: SkipReason, report: Report) -> Result<Outcome<T>> {
    warn!("Skipping {:?} report: {:?}", report, reason);
    writeln!(console, "{}", reason.message_for(report))?;
    Ok(Outcome::Skipped(reason))
}

/// Exploratory analysis of one delimited text file.
///
/// # Example
///
/// ```rust,ignore
/// use eda::{DatasetExplorer, RecordingSurface};
///
/// let figures = RecordingSurface::new();
/// let mut explorer = DatasetExplorer::builder("data/transactions.csv")
///     .surface(figures.clone())
///     .build()?;
///
/// explorer.load()?;
/// explorer.summarize()?;
/// explorer.plot_outlier_boxplots(Some(&["Amount", "Value"]))?;
/// assert_eq!(figures.len(), 2);
/// ```
pub struct DatasetExplorer {
    filepath: PathBuf,
    state: DatasetState,
    config: ExplorerConfig,
    console: Box<dyn Write + Send>,
    surface: Box<dyn PlotSurface>,
}

// The explorer can be moved to a worker thread
static_assertions::assert_impl_all!(DatasetExplorer: Send);

impl DatasetExplorer {
    /// Explorer with the default configuration, printing to stdout and
    /// drawing figures as text.
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
            state: DatasetState::NotLoaded,
            config: ExplorerConfig::default(),
            console: Box::new(io::stdout()),
            surface: Box::new(TerminalSurface::stdout()),
        }
    }

    pub fn builder(filepath: impl Into<PathBuf>) -> ExplorerBuilder {
        ExplorerBuilder {
            filepath: filepath.into(),
            config: None,
            console: None,
            surface: None,
        }
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn state(&self) -> &DatasetState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// The loaded dataset, if any.
    pub fn data(&self) -> Option<&DataFrame> {
        self.state.frame()
    }

    /// Read the file into memory, replacing any previously loaded dataset.
    ///
    /// The outcome is also reported on the console. On failure the explorer
    /// keeps whatever dataset it held before.
    pub fn load(&mut self) -> Result<&DataFrame> {
        match load_dataset(&self.filepath, &self.config) {
            Ok(df) => {
                info!(
                    "Loaded {} rows x {} columns from {}",
                    df.height(),
                    df.width(),
                    self.filepath.display()
                );
                self.state = DatasetState::Loaded(df);
                writeln!(
                    self.console,
                    "Data loaded successfully from {}",
                    self.filepath.display()
                )?;
            }
            Err(e) => {
                warn!("Loading {} failed: {}", self.filepath.display(), e);
                match &e {
                    EdaError::FileNotFound(_) => writeln!(self.console, "Error loading data: {e}")?,
                    _ => writeln!(self.console, "An error occurred: {e}")?,
                }
                return Err(e);
            }
        }

        self.state.frame().ok_or(EdaError::NotLoaded)
    }

    /// Print the shape, describe statistics and column info.
    pub fn summarize(&mut self) -> Result<Outcome<DatasetSummary>> {
        let df = match self.state.require_loaded() {
            Ok(df) => df,
            Err(reason) => return skip(&mut *self.console, reason, Report::Summary),
        };

        let summary = DataProfiler::summarize(df)?;
        let (rows, columns) = summary.shape;

        writeln!(self.console, "\nDataset Overview")?;
        writeln!(self.console, "{}", "-".repeat(OVERVIEW_RULE_WIDTH))?;
        writeln!(self.console, "Shape of the dataset: ({rows}, {columns})")?;
        writeln!(self.console, "\nSummary Statistics:")?;
        write!(self.console, "{}", summary.describe_table())?;
        writeln!(self.console, "\nGeneral Info:")?;
        write!(self.console, "{}", summary.info_table())?;

        Ok(Outcome::Done(summary))
    }

    /// One histogram per numeric column, on a shared grid.
    pub fn plot_distributions(&mut self) -> Result<Outcome<Figure>> {
        let df = match self.state.require_loaded() {
            Ok(df) => df,
            Err(reason) => return skip(&mut *self.console, reason, Report::Distributions),
        };

        let columns = numeric_columns(df);
        if columns.is_empty() {
            return skip(
                &mut *self.console,
                SkipReason::NoNumericColumns,
                Report::Distributions,
            );
        }

        writeln!(
            self.console,
            "\nPlotting distributions for numerical features..."
        )?;

        let mut panels = Vec::with_capacity(columns.len());
        for name in &columns {
            let values = column_non_null_f64(df, name)?;
            panels.push(build_histogram(name, &values, self.config.histogram_bins));
        }
        debug!("Built {} histograms", panels.len());

        let figure = Figure::DistributionGrid {
            title: "Numerical Feature Distributions".to_string(),
            layout: GridLayout::square(panels.len()),
            panels,
        };
        self.surface.show(&figure)?;
        Ok(Outcome::Done(figure))
    }

    /// Count plots of the `max_categories` most frequent values of every
    /// categorical column.
    ///
    /// Drops the configured excluded columns from the dataset first. The
    /// drop is permanent; columns that are already gone are ignored.
    pub fn plot_categorical_distributions(
        &mut self,
        max_categories: usize,
    ) -> Result<Outcome<Figure>> {
        let df = match self.state.require_loaded_mut() {
            Ok(df) => df,
            Err(reason) => return skip(&mut *self.console, reason, Report::Categorical),
        };

        if max_categories == 0 {
            return Err(EdaError::InvalidConfig(
                "max_categories must be at least 1".to_string(),
            ));
        }

        for name in &self.config.excluded_categorical_columns {
            if df.get_column_index(name).is_some() {
                df.drop_in_place(name)?;
                info!("Dropped column '{}' before categorical plotting", name);
            }
        }
        let df: &DataFrame = df;

        let columns = categorical_columns(df);
        if columns.is_empty() {
            return skip(
                &mut *self.console,
                SkipReason::NoCategoricalColumns,
                Report::Categorical,
            );
        }

        writeln!(
            self.console,
            "\nPlotting distributions for categorical features..."
        )?;

        let mut panels = Vec::with_capacity(columns.len());
        for name in &columns {
            let frequencies = value_frequencies(df, name)?;
            panels.push(build_count_plot(
                name,
                &frequencies,
                max_categories,
                self.config.label_rotation_degrees,
            ));
        }

        let figure = Figure::CategoricalGrid {
            title: "Categorical Feature Distributions".to_string(),
            layout: GridLayout::with_columns(panels.len(), self.config.categorical_grid_columns),
            panels,
        };
        self.surface.show(&figure)?;
        Ok(Outcome::Done(figure))
    }

    /// Annotated heatmap of pairwise Pearson correlations.
    pub fn correlation_matrix(&mut self) -> Result<Outcome<Figure>> {
        let df = match self.state.require_loaded() {
            Ok(df) => df,
            Err(reason) => return skip(&mut *self.console, reason, Report::Correlation),
        };

        let labels = numeric_columns(df);
        if labels.is_empty() {
            return skip(
                &mut *self.console,
                SkipReason::NoNumericColumns,
                Report::Correlation,
            );
        }

        writeln!(
            self.console,
            "\nDisplaying correlation matrix for numerical features..."
        )?;

        let columns = labels
            .iter()
            .map(|name| column_as_f64(df, name))
            .collect::<PolarsResult<Vec<_>>>()?;
        let matrix = build_correlation_matrix(&labels, &columns, self.config.annotation_precision);

        let figure = Figure::CorrelationHeatmap {
            title: "Correlation Matrix".to_string(),
            matrix,
        };
        self.surface.show(&figure)?;
        Ok(Outcome::Done(figure))
    }

    /// Report the columns that have missing values.
    pub fn detect_missing_values(&mut self) -> Result<Outcome<MissingValuesReport>> {
        let df = match self.state.require_loaded() {
            Ok(df) => df,
            Err(reason) => return skip(&mut *self.console, reason, Report::Missing),
        };

        writeln!(self.console, "\nChecking for missing values...")?;
        let report = DataProfiler::missing_values(df);

        if report.has_missing() {
            debug!(
                "{} missing cells ({:.2}%)",
                report.total_missing_cells, report.total_missing_percentage
            );
            writeln!(self.console, "Missing values found:")?;
            write!(self.console, "{}", report.table())?;
        } else {
            writeln!(self.console, "No missing values detected.")?;
        }

        Ok(Outcome::Done(report))
    }

    /// One boxplot per column, defaulting to every numeric column.
    ///
    /// Requested columns that are missing from the dataset are ignored;
    /// requested columns that are not numeric are ignored with a warning.
    pub fn plot_outlier_boxplots(&mut self, columns: Option<&[&str]>) -> Result<Outcome<Vec<Figure>>> {
        let df = match self.state.require_loaded() {
            Ok(df) => df,
            Err(reason) => return skip(&mut *self.console, reason, Report::Boxplots),
        };

        let selected: Vec<String> = match columns {
            None => numeric_columns(df),
            Some(requested) => requested
                .iter()
                .filter(|name| match column_category(df, name) {
                    Some(DtypeCategory::Numeric) => true,
                    Some(category) => {
                        warn!("Column '{}' is {:?}, not numeric; no boxplot", name, category);
                        false
                    }
                    None => {
                        debug!("Column '{}' not in dataset", name);
                        false
                    }
                })
                .map(|name| name.to_string())
                .collect(),
        };

        if selected.is_empty() {
            return skip(
                &mut *self.console,
                SkipReason::NoValidColumns,
                Report::Boxplots,
            );
        }

        writeln!(
            self.console,
            "\nPlotting boxplots for specified columns to detect outliers..."
        )?;

        let mut figures = Vec::with_capacity(selected.len());
        for name in &selected {
            let values = column_non_null_f64(df, name)?;
            let Some(summary) = build_box_summary(name, &values) else {
                warn!("Column '{}' has no values; no boxplot", name);
                continue;
            };
            let figure = Figure::Boxplot {
                title: format!("Boxplot of {name} (Outlier Detection)"),
                summary,
            };
            self.surface.show(&figure)?;
            figures.push(figure);
        }

        Ok(Outcome::Done(figures))
    }

    /// Run one report with the configured defaults.
    pub fn run(&mut self, report: Report) -> Result<bool> {
        let done = match report {
            Report::Summary => self.summarize()?.is_done(),
            Report::Distributions => self.plot_distributions()?.is_done(),
            Report::Categorical => {
                let max = self.config.max_categories;
                self.plot_categorical_distributions(max)?.is_done()
            }
            Report::Correlation => self.correlation_matrix()?.is_done(),
            Report::Missing => self.detect_missing_values()?.is_done(),
            Report::Boxplots => self.plot_outlier_boxplots(None)?.is_done(),
        };
        Ok(done)
    }

    /// Run every report in order. Returns how many of them ran.
    pub fn run_all(&mut self) -> Result<usize> {
        let mut done = 0;
        for report in Report::ALL {
            if self.run(report)? {
                done += 1;
            }
        }
        Ok(done)
    }
}

/// Builder for [`DatasetExplorer`].
pub struct ExplorerBuilder {
    filepath: PathBuf,
    config: Option<ExplorerConfig>,
    console: Option<Box<dyn Write + Send>>,
    surface: Option<Box<dyn PlotSurface>>,
}

static_assertions::assert_impl_all!(ExplorerBuilder: Send);

impl ExplorerBuilder {
    /// Set the explorer configuration.
    pub fn config(mut self, config: ExplorerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Where report text goes. Defaults to stdout.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use eda::{DatasetExplorer, SharedBuffer};
    ///
    /// let console = SharedBuffer::new();
    /// let mut explorer = DatasetExplorer::builder("missing.csv")
    ///     .console(console.clone())
    ///     .build()?;
    ///
    /// let _ = explorer.load();
    /// assert!(console.contents().starts_with("Error loading data"));
    /// ```
    pub fn console<W: Write + Send + 'static>(mut self, console: W) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    /// Where figures go. Defaults to a [`TerminalSurface`] on stdout.
    pub fn surface<S: PlotSurface + 'static>(mut self, surface: S) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// Build the explorer.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> std::result::Result<DatasetExplorer, ConfigValidationError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(DatasetExplorer {
            filepath: self.filepath,
            state: DatasetState::NotLoaded,
            config,
            console: self.console.unwrap_or_else(|| Box::new(io::stdout())),
            surface: self
                .surface
                .unwrap_or_else(|| Box::new(TerminalSurface::stdout())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::SharedBuffer;
    use crate::surface::RecordingSurface;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    fn explorer_for(name: &str) -> (DatasetExplorer, SharedBuffer, RecordingSurface) {
        let console = SharedBuffer::new();
        let figures = RecordingSurface::new();
        let explorer = DatasetExplorer::builder(fixture(name))
            .console(console.clone())
            .surface(figures.clone())
            .build()
            .unwrap();
        (explorer, console, figures)
    }

    // ==================== state tests ====================

    #[test]
    fn test_new_explorer_is_not_loaded() {
        let explorer = DatasetExplorer::new("data.csv");
        assert!(!explorer.is_loaded());
        assert!(explorer.data().is_none());
        assert_eq!(explorer.filepath(), Path::new("data.csv"));
        assert_eq!(
            explorer.state().require_loaded().unwrap_err(),
            SkipReason::NotLoaded
        );
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let config = ExplorerConfig {
            histogram_bins: 0,
            ..ExplorerConfig::default()
        };
        assert!(DatasetExplorer::builder("data.csv").config(config).build().is_err());
    }

    // ==================== outcome tests ====================

    #[test]
    fn test_outcome_accessors() {
        let done: Outcome<u32> = Outcome::Done(3);
        assert!(done.is_done());
        assert_eq!(done.clone().map(|v| v * 2), Outcome::Done(6));
        assert_eq!(done.done(), Some(3));

        let skipped: Outcome<u32> = Outcome::Skipped(SkipReason::NoValidColumns);
        assert!(skipped.is_skipped());
        assert_eq!(skipped.skip_reason(), Some(SkipReason::NoValidColumns));
        assert_eq!(skipped.done(), None);
    }

    #[test]
    fn test_skip_messages() {
        assert_eq!(
            SkipReason::NotLoaded.message(),
            "Data not loaded yet. Please load the data first."
        );
        assert_eq!(
            SkipReason::NoNumericColumns.message_for(Report::Distributions),
            "No numerical columns found for plotting distributions."
        );
        assert_eq!(
            SkipReason::NoNumericColumns.message_for(Report::Correlation),
            "No numerical data available for correlation analysis."
        );
    }

    // ==================== load tests ====================

    #[test]
    fn test_load_reports_success() {
        let (mut explorer, console, _) = explorer_for("transactions.csv");
        let shape = explorer.load().unwrap().shape();
        assert_eq!(shape, (12, 8));
        assert!(explorer.is_loaded());
        assert!(console.contents().starts_with("Data loaded successfully from "));
    }

    #[test]
    fn test_load_missing_file() {
        let (mut explorer, console, _) = explorer_for("does_not_exist.csv");
        let err = explorer.load().unwrap_err();
        assert!(matches!(err, EdaError::FileNotFound(_)));
        assert!(!explorer.is_loaded());
        assert!(console.contents().starts_with("Error loading data: File not found"));
    }

    #[test]
    fn test_load_directory_fails_generically() {
        let console = SharedBuffer::new();
        let mut explorer = DatasetExplorer::builder(fixture(""))
            .console(console.clone())
            .surface(RecordingSurface::new())
            .build()
            .unwrap();
        let err = explorer.load().unwrap_err();
        assert!(matches!(err, EdaError::LoadFailed { .. }));
        assert!(console.contents().starts_with("An error occurred: "));
    }

    // ==================== report tests ====================

    #[test]
    fn test_reports_before_load_are_skipped() {
        let (mut explorer, console, figures) = explorer_for("transactions.csv");

        assert!(explorer.summarize().unwrap().is_skipped());
        assert!(explorer.plot_distributions().unwrap().is_skipped());
        assert!(explorer.plot_categorical_distributions(20).unwrap().is_skipped());
        assert!(explorer.correlation_matrix().unwrap().is_skipped());
        assert!(explorer.detect_missing_values().unwrap().is_skipped());
        assert!(explorer.plot_outlier_boxplots(None).unwrap().is_skipped());

        let text = console.contents();
        assert_eq!(
            text.matches("Data not loaded yet. Please load the data first.").count(),
            6
        );
        assert!(figures.is_empty());
    }

    #[test]
    fn test_summarize_prints_overview() {
        let (mut explorer, console, _) = explorer_for("transactions.csv");
        explorer.load().unwrap();
        let summary = explorer.summarize().unwrap().done().unwrap();

        assert_eq!(summary.shape, (12, 8));
        let text = console.contents();
        assert!(text.contains("\nDataset Overview\n------------------------------\n"));
        assert!(text.contains("Shape of the dataset: (12, 8)"));
        assert!(text.contains("\nSummary Statistics:\n"));
        assert!(text.contains("\nGeneral Info:\n"));
    }

    #[test]
    fn test_categorical_drop_is_permanent() {
        let (mut explorer, _, figures) = explorer_for("transactions.csv");
        explorer.load().unwrap();

        let figure = explorer.plot_categorical_distributions(20).unwrap().done().unwrap();
        let data = explorer.data().unwrap();
        assert!(data.column("TransactionId").is_err());
        assert!(data.column("CurrencyCode").is_err());
        assert_eq!(data.width(), 6);

        match figure {
            Figure::CategoricalGrid { layout, panels, .. } => {
                assert_eq!(panels.len(), 3);
                assert_eq!(layout.rows, 2);
                assert_eq!(layout.hidden_cells, 1);
            }
            other => panic!("unexpected figure {other:?}"),
        }

        // second call finds nothing left to drop
        assert!(explorer.plot_categorical_distributions(20).unwrap().is_done());
        assert_eq!(figures.len(), 2);
    }

    #[test]
    fn test_categorical_rejects_zero_max() {
        let (mut explorer, _, _) = explorer_for("transactions.csv");
        explorer.load().unwrap();
        let err = explorer.plot_categorical_distributions(0).unwrap_err();
        assert!(matches!(err, EdaError::InvalidConfig(_)));
    }

    #[test]
    fn test_categorical_zero_max_before_load_is_skipped() {
        let (mut explorer, console, figures) = explorer_for("transactions.csv");

        let outcome = explorer.plot_categorical_distributions(0).unwrap();
        assert_eq!(outcome.skip_reason(), Some(SkipReason::NotLoaded));
        assert_eq!(
            console.contents(),
            "Data not loaded yet. Please load the data first.\n"
        );
        assert!(figures.is_empty());
    }

    #[test]
    fn test_boxplots_filter_requested_columns() {
        let (mut explorer, console, figures) = explorer_for("transactions.csv");
        explorer.load().unwrap();

        let outcome = explorer
            .plot_outlier_boxplots(Some(&["Amount", "ProductCategory", "nope"]))
            .unwrap();
        let drawn = outcome.done().unwrap();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].title(), "Boxplot of Amount (Outlier Detection)");
        assert_eq!(figures.len(), 1);
        assert!(console
            .contents()
            .contains("\nPlotting boxplots for specified columns to detect outliers...\n"));
    }

    #[test]
    fn test_run_all_runs_every_report() {
        let (mut explorer, _, figures) = explorer_for("transactions.csv");
        explorer.load().unwrap();
        assert_eq!(explorer.run_all().unwrap(), Report::ALL.len());
        // distributions + categorical + correlation + one boxplot per numeric column
        assert_eq!(figures.len(), 3 + 3);
    }
}
