//! Figure descriptions produced by the explorer.
//!
//! A [`Figure`] is everything needed to draw one plot window: its title,
//! the panel layout and the computed data (histogram bins, category counts,
//! correlation values, box summaries). Figures are plain serializable data;
//! drawing them is the job of a [`crate::surface::PlotSurface`].

mod builders;

pub use builders::{
    build_box_summary, build_correlation_matrix, build_count_plot, build_histogram, pearson,
};

use serde::{Deserialize, Serialize};

/// One equal-width histogram bin. The last bin of a histogram is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Distribution of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub column: String,
    /// Number of values that went into the bins (nulls excluded).
    pub value_count: usize,
    pub bins: Vec<HistogramBin>,
}

/// Frequency of one value in a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    /// Share of the non-null values, in percent.
    pub percentage: f64,
}

/// Bar chart of the most frequent values of a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountPlot {
    pub column: String,
    pub title: String,
    /// Kept categories, most frequent first.
    pub categories: Vec<CategoryCount>,
    /// Distinct non-null values before truncation.
    pub distinct_values: usize,
    pub label_rotation_degrees: f64,
}

/// Arrangement of panels on a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub columns: usize,
    /// Trailing cells with no panel; they are not drawn.
    pub hidden_cells: usize,
}

impl GridLayout {
    /// Fill rows of `columns` cells with `panels` panels.
    pub fn with_columns(panels: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        let rows = panels.div_ceil(columns);
        Self {
            rows,
            columns,
            hidden_cells: rows * columns - panels,
        }
    }

    /// Near-square grid: `ceil(sqrt(n))` columns.
    pub fn square(panels: usize) -> Self {
        let columns = (panels as f64).sqrt().ceil() as usize;
        Self::with_columns(panels, columns)
    }

    /// Number of visible cells.
    pub fn visible_cells(&self) -> usize {
        self.rows * self.columns - self.hidden_cells
    }
}

/// Labelled square matrix of optional values.
///
/// `None` marks an undefined cell (for a correlation: fewer than two paired
/// observations or a constant column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
    /// Decimal places of the cell annotations.
    pub precision: usize,
}

impl HeatmapMatrix {
    /// Annotation text of a cell; `nan` for undefined cells.
    pub fn annotation(&self, row: usize, column: usize) -> String {
        match self.values.get(row).and_then(|r| r.get(column)).copied().flatten() {
            Some(value) => format!("{:.*}", self.precision, value),
            None => "nan".to_string(),
        }
    }

    /// Value of the cell at `(row, column)`, if defined.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row)?.get(column).copied().flatten()
    }
}

/// Five-number summary of a numeric column plus whiskers and outliers.
///
/// Whiskers sit at the most extreme values within 1.5 IQR of the quartiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSummary {
    pub column: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxPlotSummary {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// One plot window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    /// One histogram per numeric column on a shared grid.
    DistributionGrid {
        title: String,
        layout: GridLayout,
        panels: Vec<Histogram>,
    },
    /// One count plot per categorical column on a fixed-width grid.
    CategoricalGrid {
        title: String,
        layout: GridLayout,
        panels: Vec<CountPlot>,
    },
    /// Annotated correlation heatmap.
    CorrelationHeatmap { title: String, matrix: HeatmapMatrix },
    /// Boxplot of a single column.
    Boxplot { title: String, summary: BoxPlotSummary },
}

static_assertions::assert_impl_all!(Figure: Send, Sync);

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Self::DistributionGrid { title, .. }
            | Self::CategoricalGrid { title, .. }
            | Self::CorrelationHeatmap { title, .. }
            | Self::Boxplot { title, .. } => title,
        }
    }

    /// Stable machine name of the figure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DistributionGrid { .. } => "distribution_grid",
            Self::CategoricalGrid { .. } => "categorical_grid",
            Self::CorrelationHeatmap { .. } => "correlation_heatmap",
            Self::Boxplot { .. } => "boxplot",
        }
    }
}
