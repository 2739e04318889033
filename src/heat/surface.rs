//! The overlay's drawing surface.
//!
//! An owned RGBA pixel buffer sized to the content region. The surface is
//! the only thing the renderer mutates; resizing reallocates the backing
//! store and clears it to transparent, so every paint starts from a blank
//! slate.

use crate::heat::gradient::{GradientStop, Rgba};
use crate::heat::sizer::Geometry;

/// A pixel buffer the heat gradient is rasterized into.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    geometry: Geometry,
    pixels: Vec<Rgba>,
}

impl Surface {
    /// Create an empty (zero-size) surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current backing-store dimensions.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Resize the backing store to exactly `geometry`.
    ///
    /// Resizing clears all prior content, matching canvas semantics: the
    /// buffer after a resize is fully transparent even when the dimensions
    /// did not change.
    pub fn resize(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.pixels.clear();
        self.pixels.resize(geometry.area(), Rgba::TRANSPARENT);
    }

    /// Pixel at `(x, y)`, if within bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.geometry.width || y >= self.geometry.height {
            return None;
        }
        let idx = y as usize * self.geometry.width as usize + x as usize;
        self.pixels.get(idx).copied()
    }

    /// The color a whole row was filled with.
    ///
    /// Every column of a row holds the same color under a vertical
    /// gradient fill, so the first pixel stands for the row.
    pub fn row_color(&self, y: u32) -> Option<Rgba> {
        self.pixel(0, y)
    }

    /// Whether nothing visible has been painted.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| p.is_transparent())
    }

    /// Fill the entire surface with a vertical linear gradient.
    ///
    /// `stops` must be in non-decreasing position order (the gradient
    /// mapper produces them that way). Rows above the first stop take the
    /// first stop's color, rows below the last take the last's; between
    /// two stops both color channels and alpha interpolate linearly. At
    /// duplicate positions the later stop wins, preserving paint order.
    pub fn fill_vertical_gradient(&mut self, stops: &[GradientStop]) {
        if self.geometry.is_zero() || stops.is_empty() {
            return;
        }

        let height = self.geometry.height;
        let width = self.geometry.width as usize;
        for y in 0..height {
            let t = if height > 1 {
                y as f64 / (height - 1) as f64
            } else {
                0.0
            };
            let color = sample_stops(stops, t);
            let row = y as usize * width;
            self.pixels[row..row + width].fill(color);
        }
    }
}

/// Color of a vertical gradient at axis position `t`.
fn sample_stops(stops: &[GradientStop], t: f64) -> Rgba {
    debug_assert!(!stops.is_empty());

    if t < stops[0].position {
        return stops[0].color;
    }

    // Last stop with position <= t. With duplicate positions, partition
    // lands after every stop at the same position, so the later one wins.
    let upper = stops.partition_point(|s| s.position <= t);
    let lo = stops[upper - 1];
    if upper == stops.len() {
        return lo.color;
    }
    let hi = stops[upper];

    let frac = (t - lo.position) / (hi.position - lo.position);
    Rgba {
        r: lerp_u8(lo.color.r, hi.color.r, frac),
        g: lerp_u8(lo.color.g, hi.color.g, frac),
        b: lerp_u8(lo.color.b, hi.color.b, frac),
        a: (lo.color.a as f64 * (1.0 - frac) + hi.color.a as f64 * frac) as f32,
    }
}

fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 * (1.0 - t) + b as f64 * t).round() as u8
}
