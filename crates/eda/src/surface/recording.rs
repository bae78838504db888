//! In-memory surface.

use super::PlotSurface;
use crate::error::Result;
use crate::figures::Figure;
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every shown figure.
///
/// Clones share the same storage, so a clone can be handed to the explorer
/// while the original is kept to inspect what was drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    figures: Arc<Mutex<Vec<Figure>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the figures shown so far.
    pub fn figures(&self) -> Vec<Figure> {
        self.figures.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.figures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.lock().is_empty()
    }

    /// Titles of the figures shown so far.
    pub fn titles(&self) -> Vec<String> {
        self.figures
            .lock()
            .iter()
            .map(|figure| figure.title().to_string())
            .collect()
    }

    pub fn clear(&self) {
        self.figures.lock().clear();
    }
}

impl PlotSurface for RecordingSurface {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        self.figures.lock().push(figure.clone());
        Ok(())
    }
}

static_assertions::assert_impl_all!(RecordingSurface: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures::{GridLayout, Figure};

    #[test]
    fn test_clones_share_storage() {
        let recording = RecordingSurface::new();
        let mut handle = recording.clone();
        handle
            .show(&Figure::DistributionGrid {
                title: "Numerical Feature Distributions".to_string(),
                layout: GridLayout::square(0),
                panels: Vec::new(),
            })
            .unwrap();

        assert_eq!(recording.len(), 1);
        assert_eq!(recording.titles(), vec!["Numerical Feature Distributions"]);

        recording.clear();
        assert!(handle.is_empty());
    }
}
