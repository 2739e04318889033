//! Reactive controller for the heat overlay.
//!
//! Owns the render parameters and the repaint triggers: the one-shot
//! content-ready signal, every parameter mutation, and resize
//! notifications. The controller is the sole driver of the renderer; the
//! event loop serializes triggers, so each repaint runs to completion
//! before the next and the last-dispatched trigger's pixels always win.

use crate::data::SampleSeries;
use crate::heat::renderer::HeatRenderer;
use crate::heat::sizer::Measure;
use crate::heat::{ColorScheme, HeatParams};

/// Lifecycle phase of the overlay controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No paint has happened; the content region may not be measurable yet.
    #[default]
    Uninitialized,
    /// The first paint has happened; triggers repaint immediately.
    Ready,
}

/// Drives repaints of the heat overlay.
///
/// Render parameters are owned here exclusively and mutated only through
/// the setters below, each of which repaints. The phase moves
/// `Uninitialized -> Ready` exactly once and never back; after
/// [`HeatController::teardown`] every trigger is a no-op so no paint can
/// land on a disposed surface.
#[derive(Debug, Default)]
pub struct HeatController {
    phase: Phase,
    params: HeatParams,
    torn_down: bool,
}

impl HeatController {
    /// Create a controller with default parameters, not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read access to the render parameters.
    pub fn params(&self) -> &HeatParams {
        &self.params
    }

    /// Whether the controller has been torn down.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Content-ready signal: the host reports the content region is
    /// attached and measurable.
    ///
    /// Fires the `Uninitialized -> Ready` transition and the first paint.
    /// Repeat signals while already ready are ignored; a signal arriving
    /// after teardown is cancelled.
    pub fn content_ready(
        &mut self,
        renderer: &mut HeatRenderer,
        series: &SampleSeries,
        region: &dyn Measure,
    ) {
        if self.torn_down || self.phase == Phase::Ready {
            return;
        }
        self.phase = Phase::Ready;
        tracing::debug!("heat overlay ready, first paint");
        self.repaint(renderer, series, region);
    }

    /// Toggle overlay visibility and repaint.
    pub fn toggle_visible(
        &mut self,
        renderer: &mut HeatRenderer,
        series: &SampleSeries,
        region: &dyn Measure,
    ) -> bool {
        let visible = !self.params.visible;
        self.set_visible(visible, renderer, series, region);
        visible
    }

    /// Set overlay visibility and repaint.
    pub fn set_visible(
        &mut self,
        visible: bool,
        renderer: &mut HeatRenderer,
        series: &SampleSeries,
        region: &dyn Measure,
    ) {
        self.params.visible = visible;
        self.param_changed(renderer, series, region);
    }

    /// Set overlay opacity (clamped to `[0, 1]`) and repaint.
    pub fn set_opacity(
        &mut self,
        opacity: f64,
        renderer: &mut HeatRenderer,
        series: &SampleSeries,
        region: &dyn Measure,
    ) {
        self.params.set_opacity(opacity);
        self.param_changed(renderer, series, region);
    }

    /// Select the color scheme by identifier and repaint.
    ///
    /// Unknown identifiers fall back to the standard scheme.
    pub fn set_scheme(
        &mut self,
        identifier: &str,
        renderer: &mut HeatRenderer,
        series: &SampleSeries,
        region: &dyn Measure,
    ) {
        self.params.scheme = ColorScheme::from_identifier(identifier);
        self.param_changed(renderer, series, region);
    }

    /// Resize notification: repaint with freshly measured geometry.
    pub fn resized(
        &mut self,
        renderer: &mut HeatRenderer,
        series: &SampleSeries,
        region: &dyn Measure,
    ) {
        if self.torn_down || self.phase != Phase::Ready {
            return;
        }
        self.repaint(renderer, series, region);
    }

    /// Release the controller at view teardown.
    ///
    /// Cancellation semantics: a pending readiness signal and any later
    /// trigger become no-ops; no further paint may occur.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    fn param_changed(
        &mut self,
        renderer: &mut HeatRenderer,
        series: &SampleSeries,
        region: &dyn Measure,
    ) {
        if self.torn_down || self.phase != Phase::Ready {
            return;
        }
        self.repaint(renderer, series, region);
    }

    fn repaint(&self, renderer: &mut HeatRenderer, series: &SampleSeries, region: &dyn Measure) {
        // Measured fresh on every paint; the layout can change without
        // the series changing.
        let geometry = region.measure();
        renderer.paint(series, &self.params, geometry);
    }
}
