//! Heat overlay renderer.
//!
//! Orchestrates the gradient mapper and the surface: every paint is a
//! full repaint of the whole surface, never an incremental update. At the
//! data volumes involved (a few hundred samples) diffing would buy
//! nothing.

use crate::data::SampleSeries;
use crate::heat::gradient::{compute_gradient_stops, ColorRamp};
use crate::heat::sizer::Geometry;
use crate::heat::surface::Surface;
use crate::heat::HeatParams;

/// Paints the heat gradient onto its owned surface.
#[derive(Debug, Clone, Default)]
pub struct HeatRenderer {
    surface: Surface,
}

impl HeatRenderer {
    /// Create a renderer with an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the painted surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Fully repaint the surface for the given inputs.
    ///
    /// A zero geometry means the content region is not measurable yet;
    /// painting is deferred until the next trigger rather than producing
    /// a zero-area or malformed gradient. Otherwise the backing store is
    /// resized to exactly `geometry` (which clears it); a hidden overlay
    /// stops there, leaving the surface blank — that is how "hide" is
    /// implemented. A visible overlay gets the gradient computed from the
    /// series at the current opacity and rasterized over the full height.
    pub fn paint(&mut self, series: &SampleSeries, params: &HeatParams, geometry: Geometry) {
        if geometry.is_zero() {
            tracing::debug!("content region unmeasurable, deferring paint");
            return;
        }

        self.surface.resize(geometry);

        if !params.visible {
            return;
        }

        let ramp = ColorRamp::for_scheme(params.scheme);
        let stops = compute_gradient_stops(series, params.opacity, ramp);
        self.surface.fill_vertical_gradient(&stops);
    }
}
