//! Plot surfaces: where figures get displayed.
//!
//! The explorer computes [`Figure`]s and hands each one to a
//! [`PlotSurface`]. Three surfaces ship with the crate:
//!
//! - [`TerminalSurface`] - draws text charts to a writer (stdout by default)
//! - [`JsonSurface`] - writes one JSON document per figure
//! - [`RecordingSurface`] - keeps figures in memory behind a shared handle
//!
//! Implement the trait to send figures anywhere else:
//!
//! ```rust,ignore
//! use eda::{Figure, PlotSurface};
//!
//! struct WindowSurface { /* ... */ }
//!
//! impl PlotSurface for WindowSurface {
//!     fn show(&mut self, figure: &Figure) -> eda::EdaResult<()> {
//!         // draw, then block until the window is dismissed
//!         Ok(())
//!     }
//! }
//! ```

mod json;
mod recording;
mod terminal;

pub use json::JsonSurface;
pub use recording::RecordingSurface;
pub use terminal::{TerminalSurface, render_figure};

use crate::error::Result;
use crate::figures::Figure;

/// Destination for figures.
///
/// `show` is blocking: it returns once the figure has been displayed (and,
/// for interactive surfaces, dismissed).
pub trait PlotSurface: Send {
    /// Display one figure.
    fn show(&mut self, figure: &Figure) -> Result<()>;
}

/// Wrapper that implements [`PlotSurface`] using a closure.
pub struct ClosureSurface<F>
where
    F: FnMut(&Figure) -> Result<()> + Send,
{
    callback: F,
}

impl<F> ClosureSurface<F>
where
    F: FnMut(&Figure) -> Result<()> + Send,
{
    /// Creates a new closure-based surface.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> PlotSurface for ClosureSurface<F>
where
    F: FnMut(&Figure) -> Result<()> + Send,
{
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (self.callback)(figure)
    }
}

impl<S: PlotSurface + ?Sized> PlotSurface for Box<S> {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (**self).show(figure)
    }
}
