//! Application state and logic.

use crate::chart::{ChartState, SeriesSlot};
use crate::data::{engagement_profile, traffic_series, DatasetKind, SampleSeries, TrafficPoint};
use crate::error::Result;
use crate::heat::controller::{HeatController, Phase};
use crate::heat::renderer::HeatRenderer;
use crate::heat::sizer::{Measure, TerminalRegion};
use crate::heat::surface::Surface;
use crate::heat::HeatParams;

/// Number of days in the synthetic traffic sets.
const TRAFFIC_DAYS: usize = 90;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Engagement profile driving the heat overlay.
    series: SampleSeries,
    /// Press traffic for the line chart.
    press: Vec<TrafficPoint>,
    /// Story traffic for the line chart.
    story: Vec<TrafficPoint>,
    /// Chart state (dataset selection, series colors).
    pub chart: ChartState,
    /// Heat overlay controller.
    controller: HeatController,
    /// Heat overlay renderer.
    renderer: HeatRenderer,
    /// Content region measured from the live terminal.
    region: TerminalRegion,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    ///
    /// `samples` sizes the synthetic engagement profile. All datasets are
    /// generated once here and stay constant for the life of the view.
    pub fn new(samples: usize) -> Self {
        Self {
            series: engagement_profile(samples),
            press: traffic_series(DatasetKind::Press, TRAFFIC_DAYS),
            story: traffic_series(DatasetKind::Story, TRAFFIC_DAYS),
            chart: ChartState::new(),
            controller: HeatController::new(),
            renderer: HeatRenderer::new(),
            region: TerminalRegion,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        }
    }

    /// The painted overlay surface, for compositing.
    pub fn surface(&self) -> &Surface {
        self.renderer.surface()
    }

    /// Current heat render parameters.
    pub fn heat_params(&self) -> &HeatParams {
        self.controller.params()
    }

    /// Whether the heat overlay is currently visible.
    pub fn heat_visible(&self) -> bool {
        self.controller.params().visible
    }

    /// Press traffic dataset.
    pub fn press_traffic(&self) -> &[TrafficPoint] {
        &self.press
    }

    /// Story traffic dataset.
    pub fn story_traffic(&self) -> &[TrafficPoint] {
        &self.story
    }

    /// Content-ready notification: called after each frame until the
    /// content region becomes measurable, at which point the controller
    /// performs its first paint. Later calls are absorbed by the
    /// controller's one-shot transition.
    pub fn notify_content_ready(&mut self) {
        if self.controller.phase() == Phase::Ready {
            return;
        }
        if self.region.measure().is_zero() {
            return;
        }
        self.controller
            .content_ready(&mut self.renderer, &self.series, &self.region);
    }

    /// Viewport resize notification.
    pub fn handle_resize(&mut self) {
        self.controller
            .resized(&mut self.renderer, &self.series, &self.region);
    }

    /// Toggle the heat overlay.
    pub fn toggle_heat(&mut self) {
        let visible =
            self.controller
                .toggle_visible(&mut self.renderer, &self.series, &self.region);
        self.status = if visible {
            "Heatmap: ON".to_string()
        } else {
            "Heatmap: OFF".to_string()
        };
    }

    /// Raise overlay opacity by one step.
    pub fn opacity_up(&mut self) {
        self.step_opacity(0.1);
    }

    /// Lower overlay opacity by one step.
    pub fn opacity_down(&mut self) {
        self.step_opacity(-0.1);
    }

    /// Adjust opacity within the control's `[0.1, 1.0]` range.
    ///
    /// The range input steps by 0.1; the core itself accepts the wider
    /// `[0, 1]` and clamps on its own.
    fn step_opacity(&mut self, delta: f64) {
        let opacity = (self.controller.params().opacity + delta).clamp(0.1, 1.0);
        self.controller
            .set_opacity(opacity, &mut self.renderer, &self.series, &self.region);
        self.status = format!("Opacity: {}%", (opacity * 100.0).round());
    }

    /// Cycle the chart dataset.
    pub fn cycle_dataset(&mut self) {
        self.chart.cycle_dataset();
        self.status = format!("Dataset: {}", self.chart.dataset.name());
    }

    /// Cycle the color of one chart series.
    pub fn cycle_series_color(&mut self, slot: SeriesSlot) {
        let color = self.chart.cycle_color(slot);
        self.status = format!("{}: {}", slot.name(), color.hex());
    }

    /// Copy the per-series HEX color set to the clipboard.
    pub fn copy_color_set(&mut self) {
        match self.copy_colors_inner() {
            Ok(()) => self.status = "Color set copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    fn copy_colors_inner(&self) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(self.chart.hex_summary())?;
        Ok(())
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Tear down the overlay on exit; no paint may happen afterwards.
    pub fn teardown(&mut self) {
        self.controller.teardown();
    }
}
