//! Scroll-position heat overlay.
//!
//! The overlay converts a one-dimensional sample series into a vertical
//! color gradient painted over the content block, so a reader can see at
//! a glance where on the page engagement concentrates. The pipeline:
//!
//! - [`gradient`] maps the series to gradient stops (pure math),
//! - [`sizer`] measures the region the overlay must cover,
//! - [`surface`] owns the pixel buffer the gradient is rasterized into,
//! - [`renderer`] orchestrates a full repaint from those pieces,
//! - [`controller`] owns the user-facing parameters and decides when a
//!   repaint happens.

pub mod controller;
pub mod gradient;
pub mod renderer;
pub mod sizer;
pub mod surface;

/// Color scheme identifier for the overlay gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Standard heat ramp: blue through cyan, green and yellow to red.
    #[default]
    Standard,
}

impl ColorScheme {
    /// Resolve a scheme identifier, falling back to [`ColorScheme::Standard`]
    /// for anything unrecognized. Rendering degrades gracefully instead of
    /// failing on a malformed identifier.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "standard" => Self::Standard,
            _ => Self::default(),
        }
    }

    /// Get scheme name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
        }
    }
}

/// User-adjustable render parameters for the heat overlay.
///
/// Owned exclusively by the [`controller::HeatController`]; the renderer
/// only ever reads them. Every mutation triggers a repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatParams {
    /// Whether the overlay is painted at all.
    pub visible: bool,
    /// Global opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Selected gradient color scheme.
    pub scheme: ColorScheme,
}

impl Default for HeatParams {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 0.6,
            scheme: ColorScheme::Standard,
        }
    }
}

impl HeatParams {
    /// Set opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            Self::default().opacity
        };
    }
}
