//! Text rendering of figures.

use super::PlotSurface;
use crate::error::{EdaError, Result};
use crate::figures::{BoxPlotSummary, CountPlot, Figure, GridLayout, HeatmapMatrix, Histogram};
use crate::utils::truncate_str;
use std::fmt::Write as _;
use std::io::{self, Write};

const BAR_WIDTH: usize = 40;
const BOX_WIDTH: usize = 50;
const LABEL_MAX: usize = 16;
const HEATMAP_CELL: usize = 9;

/// Draws figures as text charts on a writer.
pub struct TerminalSurface<W: Write + Send> {
    writer: W,
}

impl TerminalSurface<io::Stdout> {
    /// Surface drawing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the surface and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> PlotSurface for TerminalSurface<W> {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let text = render_figure(figure);
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| EdaError::RenderFailed(e.to_string()))
    }
}

/// Render one figure as text.
pub fn render_figure(figure: &Figure) -> String {
    let mut out = String::new();
    let title = figure.title();
    let _ = writeln!(out, "\n{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    match figure {
        Figure::DistributionGrid { layout, panels, .. } => {
            write_layout(&mut out, layout);
            for histogram in panels {
                write_histogram(&mut out, histogram);
            }
        }
        Figure::CategoricalGrid { layout, panels, .. } => {
            write_layout(&mut out, layout);
            for plot in panels {
                write_count_plot(&mut out, plot);
            }
        }
        Figure::CorrelationHeatmap { matrix, .. } => write_heatmap(&mut out, matrix),
        Figure::Boxplot { summary, .. } => write_boxplot(&mut out, summary),
    }
    out
}

fn write_layout(out: &mut String, layout: &GridLayout) {
    let _ = write!(out, "grid {}x{}", layout.rows, layout.columns);
    if layout.hidden_cells > 0 {
        let _ = write!(out, " ({} empty)", layout.hidden_cells);
    }
    out.push('\n');
}

fn bar(count: usize, max: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let len = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}

fn write_histogram(out: &mut String, histogram: &Histogram) {
    let _ = writeln!(out, "\n{} (n={})", histogram.column, histogram.value_count);
    if histogram.bins.is_empty() {
        let _ = writeln!(out, "  (no values)");
        return;
    }
    let max = histogram.bins.iter().map(|b| b.count).max().unwrap_or(0);
    for bin in &histogram.bins {
        let _ = writeln!(
            out,
            "  {:>12.3} .. {:<12.3} {:>5} {}",
            bin.start,
            bin.end,
            bin.count,
            bar(bin.count, max)
        );
    }
}

fn write_count_plot(out: &mut String, plot: &CountPlot) {
    let _ = writeln!(out, "\n{}", plot.title);
    if plot.categories.is_empty() {
        let _ = writeln!(out, "  (no values)");
        return;
    }
    let width = plot
        .categories
        .iter()
        .map(|c| truncate_str(&c.value, LABEL_MAX).chars().count())
        .max()
        .unwrap_or(0);
    let max = plot.categories.iter().map(|c| c.count).max().unwrap_or(0);
    for category in &plot.categories {
        let _ = writeln!(
            out,
            "  {:<width$} {:>5} {:>6.1}% {}",
            truncate_str(&category.value, LABEL_MAX),
            category.count,
            category.percentage,
            bar(category.count, max)
        );
    }
    if plot.distinct_values > plot.categories.len() {
        let _ = writeln!(
            out,
            "  ... {} more values",
            plot.distinct_values - plot.categories.len()
        );
    }
}

fn write_heatmap(out: &mut String, matrix: &HeatmapMatrix) {
    let label_width = matrix
        .y_labels
        .iter()
        .map(|l| truncate_str(l, LABEL_MAX).chars().count())
        .max()
        .unwrap_or(0);
    let cell = HEATMAP_CELL;

    let _ = write!(out, "{:label_width$}", "");
    for label in &matrix.x_labels {
        let _ = write!(out, " {:>cell$}", truncate_str(label, cell));
    }
    out.push('\n');

    for (row, label) in matrix.y_labels.iter().enumerate() {
        let _ = write!(out, "{:<label_width$}", truncate_str(label, LABEL_MAX));
        for column in 0..matrix.x_labels.len() {
            let _ = write!(out, " {:>cell$}", matrix.annotation(row, column));
        }
        out.push('\n');
    }
}

fn box_position(value: f64, min: f64, max: f64) -> usize {
    let range = max - min;
    if range <= 0.0 || !range.is_finite() {
        return BOX_WIDTH / 2;
    }
    let pos = ((value - min) / range * (BOX_WIDTH - 1) as f64).round();
    (pos.max(0.0) as usize).min(BOX_WIDTH - 1)
}

fn fill(line: &mut [char], from: usize, to: usize, mark: char) {
    let (from, to) = (from.min(to), from.max(to));
    for cell in &mut line[from..=to] {
        *cell = mark;
    }
}

fn write_boxplot(out: &mut String, summary: &BoxPlotSummary) {
    let (min, max) = (summary.min, summary.max);
    let at = |value: f64| box_position(value, min, max);
    let mut line = vec![' '; BOX_WIDTH];

    fill(&mut line, at(summary.lower_whisker), at(summary.upper_whisker), '-');
    fill(&mut line, at(summary.q1), at(summary.q3), '=');
    line[at(summary.lower_whisker)] = '|';
    line[at(summary.upper_whisker)] = '|';
    line[at(summary.q1)] = '[';
    line[at(summary.q3)] = ']';
    line[at(summary.median)] = ':';
    for &outlier in &summary.outliers {
        line[at(outlier)] = 'o';
    }

    let _ = writeln!(out, "  {}", line.into_iter().collect::<String>());
    let _ = writeln!(
        out,
        "  n={} min={} q1={} median={} q3={} max={} outliers={}",
        summary.count,
        summary.min,
        summary.q1,
        summary.median,
        summary.q3,
        summary.max,
        summary.outliers.len()
    );
}
