//! Computation of figure data from column values.

use super::{BoxPlotSummary, CategoryCount, CountPlot, HeatmapMatrix, Histogram, HistogramBin};
use crate::utils::{quantile_sorted, sort_floats};
use anofox_statistics::correlation;

/// Equal-width histogram over `[min, max]`.
///
/// A constant column is binned over `[v - 0.5, v + 0.5]`. Values equal to the
/// upper edge land in the last bin. An empty input gives no bins.
pub fn build_histogram(column: &str, values: &[f64], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sort_floats(&mut sorted);

    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return Histogram {
            column: column.to_string(),
            value_count: 0,
            bins: Vec::new(),
        };
    };

    let (low, high) = if (last - first).abs() < f64::EPSILON {
        (first - 0.5, last + 0.5)
    } else {
        (first, last)
    };
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in &sorted {
        let index = (((value - low) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    Histogram {
        column: column.to_string(),
        value_count: sorted.len(),
        bins: counts
            .into_iter()
            .enumerate()
            .map(|(idx, count)| HistogramBin {
                start: low + idx as f64 * width,
                end: low + (idx as f64 + 1.0) * width,
                count,
            })
            .collect(),
    }
}

/// Count plot of the `max_categories` most frequent values.
///
/// `frequencies` is ordered most frequent first, as returned by
/// [`value_frequencies`](crate::utils::value_frequencies). Percentages are
/// relative to every counted value, not only the ones shown.
pub fn build_count_plot(
    column: &str,
    frequencies: &[(String, usize)],
    max_categories: usize,
    label_rotation_degrees: f64,
) -> CountPlot {
    let total: usize = frequencies.iter().map(|(_, count)| count).sum();

    let categories = frequencies
        .iter()
        .take(max_categories)
        .map(|(value, count)| CategoryCount {
            value: value.clone(),
            count: *count,
            percentage: if total > 0 {
                (*count as f64 / total as f64) * 100.0
            } else {
                0.0
            },
        })
        .collect();

    CountPlot {
        column: column.to_string(),
        title: format!("Distribution of {column}"),
        categories,
        distinct_values: frequencies.len(),
        label_rotation_degrees,
    }
}

/// Pearson correlation over pairwise complete observations.
///
/// `None` with fewer than two complete pairs or when either side is constant.
/// Two pairs correlate perfectly (sign of the slope); from three pairs on the
/// coefficient comes from `anofox_statistics`.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if a.is_finite() && b.is_finite() => Some((*a, *b)),
            _ => None,
        })
        .unzip();

    match xs.len() {
        0 | 1 => None,
        2 => {
            let direction = (xs[1] - xs[0]) * (ys[1] - ys[0]);
            (direction != 0.0).then(|| direction.signum())
        }
        _ => correlation::pearson(&xs, &ys, None)
            .ok()
            .map(|result| result.estimate)
            .filter(|r| r.is_finite()),
    }
}

/// Pairwise Pearson matrix of the given columns.
pub fn build_correlation_matrix(
    labels: &[String],
    columns: &[Vec<Option<f64>>],
    precision: usize,
) -> HeatmapMatrix {
    let size = labels.len().min(columns.len());
    let mut values = vec![vec![None; size]; size];

    for i in 0..size {
        for j in i..size {
            let r = pearson(&columns[i], &columns[j]);
            // exact unit diagonal whenever the column has variance
            let r = if i == j { r.map(|_| 1.0) } else { r };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    HeatmapMatrix {
        x_labels: labels[..size].to_vec(),
        y_labels: labels[..size].to_vec(),
        values,
        precision,
    }
}

/// Box summary of a column, `None` when it has no finite values.
pub fn build_box_summary(column: &str, values: &[f64]) -> Option<BoxPlotSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sort_floats(&mut sorted);

    let q1 = quantile_sorted(&sorted, 0.25);
    let median = quantile_sorted(&sorted, 0.5);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|v| *v >= lower_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= upper_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < lower_whisker || *v > upper_whisker)
        .collect();

    Some(BoxPlotSummary {
        column: column.to_string(),
        count: sorted.len(),
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
        lower_whisker,
        upper_whisker,
        outliers,
    })
}
