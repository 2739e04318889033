//! Gradient mapping: sample series to vertical color stops.
//!
//! This is the pure half of the overlay. Given a series and an opacity it
//! produces the ordered stop list for a vertical linear gradient; the
//! side-effecting rasterization lives in [`crate::heat::surface`]. Keeping
//! the math free of any drawing handle makes every property here directly
//! testable.

use crate::data::SampleSeries;
use crate::heat::ColorScheme;

/// An RGB color with a fractional alpha channel.
///
/// Alpha stays fractional (not quantized to a byte) because the overlay
/// contract ties it exactly to `intensity * opacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Build an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color with an explicit alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Whether this color contributes nothing when composited.
    pub fn is_transparent(self) -> bool {
        self.a <= f32::EPSILON
    }
}

/// One point in a continuous linear color ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Normalized position along the gradient axis, `[0, 1]`.
    pub position: f64,
    /// Color at this position.
    pub color: Rgba,
}

/// A continuous color ramp defined by evenly-spaced RGB anchor colors.
///
/// With `N` anchors the ramp has `N - 1` equal-width bands; within a band
/// each channel interpolates linearly by the band-local fraction. The
/// anchor list is configurable to keep the math testable, but the only
/// shipped scheme is [`STANDARD_RAMP`].
#[derive(Debug, Clone)]
pub struct ColorRamp {
    anchors: &'static [[u8; 3]],
}

/// The standard heat ramp: blue, cyan, green, yellow, red.
///
/// Five anchors give four 0.25-wide intensity bands.
pub static STANDARD_RAMP: ColorRamp = ColorRamp {
    anchors: &[
        [0, 0, 255],
        [0, 255, 255],
        [0, 255, 0],
        [255, 255, 0],
        [255, 0, 0],
    ],
};

impl ColorRamp {
    /// Build a ramp from a static anchor list.
    pub const fn new(anchors: &'static [[u8; 3]]) -> Self {
        Self { anchors }
    }

    /// The ramp for a color scheme.
    pub fn for_scheme(scheme: ColorScheme) -> &'static Self {
        match scheme {
            ColorScheme::Standard => &STANDARD_RAMP,
        }
    }

    /// Sample the ramp at intensity `t` (clamped to `[0, 1]`), fully opaque.
    pub fn sample(&self, t: f64) -> Rgba {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let n = self.anchors.len();
        if n == 0 {
            return Rgba::TRANSPARENT;
        }
        if n == 1 {
            let [r, g, b] = self.anchors[0];
            return Rgba::opaque(r, g, b);
        }

        let scaled = t * (n - 1) as f64;
        let band = (scaled as usize).min(n - 2);
        let frac = scaled - band as f64;
        let lo = self.anchors[band];
        let hi = self.anchors[band + 1];

        Rgba::opaque(
            lerp_channel(lo[0], hi[0], frac),
            lerp_channel(lo[1], hi[1], frac),
            lerp_channel(lo[2], hi[2], frac),
        )
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 * (1.0 - t) + b as f64 * t).round() as u8
}

/// Normalized intensity of `value` within `(min, max)` bounds.
///
/// A flat series (`max == min`) maps everything to 0 rather than dividing
/// by zero.
pub fn intensity(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Map a sample series to the ordered stop list of a vertical gradient.
///
/// Each sample becomes one stop: position `i / (N - 1)` (0 when `N == 1`),
/// color sampled from the ramp at the sample's normalized intensity, alpha
/// `intensity * opacity`. Low-intensity stops are therefore mostly
/// transparent, concentrating visible color where the signal is high.
///
/// Pure and deterministic: identical series, opacity and ramp always yield
/// identical stops. An empty series yields no stops. Out-of-range opacity
/// is clamped to `[0, 1]`.
pub fn compute_gradient_stops(
    series: &SampleSeries,
    opacity: f64,
    ramp: &ColorRamp,
) -> Vec<GradientStop> {
    let opacity = if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let Some((min, max)) = series.bounds() else {
        return Vec::new();
    };

    let n = series.len();
    series
        .values()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let t = intensity(value, min, max);
            let position = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            let mut color = ramp.sample(t);
            color.a = (t * opacity) as f32;
            GradientStop { position, color }
        })
        .collect()
}
