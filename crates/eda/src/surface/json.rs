//! JSON output of figures.

use super::PlotSurface;
use crate::error::{EdaError, Result};
use crate::figures::Figure;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct FigureDocument<'a> {
    generated_at: String,
    #[serde(flatten)]
    figure: &'a Figure,
}

/// Writes each figure as a single-line JSON document.
///
/// Every document carries the figure's `kind` tag, its data and a
/// `generated_at` timestamp (RFC 3339, local time).
pub struct JsonSurface<W: Write + Send> {
    writer: W,
    pretty: bool,
}

impl JsonSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Indent documents over several lines.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> PlotSurface for JsonSurface<W> {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let document = FigureDocument {
            generated_at: chrono::Local::now().to_rfc3339(),
            figure,
        };
        let text = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        writeln!(self.writer, "{text}").map_err(|e| EdaError::RenderFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures::{HeatmapMatrix, Figure};

    fn heatmap() -> Figure {
        Figure::CorrelationHeatmap {
            title: "Correlation Matrix".to_string(),
            matrix: HeatmapMatrix {
                x_labels: vec!["a".to_string()],
                y_labels: vec!["a".to_string()],
                values: vec![vec![Some(1.0)]],
                precision: 2,
            },
        }
    }

    #[test]
    fn test_json_surface_one_document_per_line() {
        let mut surface = JsonSurface::new(Vec::new());
        surface.show(&heatmap()).unwrap();
        surface.show(&heatmap()).unwrap();

        let written = String::from_utf8(surface.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["kind"], "correlation_heatmap");
        assert_eq!(value["title"], "Correlation Matrix");
        assert_eq!(value["matrix"]["values"][0][0], 1.0);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_json_surface_pretty() {
        let mut surface = JsonSurface::new(Vec::new()).pretty(true);
        surface.show(&heatmap()).unwrap();
        let written = String::from_utf8(surface.into_inner()).unwrap();
        assert!(written.lines().count() > 1);
    }
}
