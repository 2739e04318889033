//! Surface sizing against the live content region.
//!
//! The overlay must cover the content block exactly, and the surrounding
//! layout can change without the sample series changing (terminal resize,
//! panel visibility). Measurement therefore happens fresh before every
//! paint and is never cached.

use ratatui::layout::Rect;

use crate::ui::layout;

/// Pixel dimensions the drawing surface must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl Geometry {
    /// The unmeasurable / detached geometry.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Build a geometry.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether this geometry covers no area.
    ///
    /// A zero geometry means the region is not yet attached or measurable;
    /// the renderer treats it as "defer painting".
    pub fn is_zero(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total pixel count.
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<Rect> for Geometry {
    fn from(rect: Rect) -> Self {
        Self::new(rect.width as u32, rect.height as u32)
    }
}

/// A measurable reference region.
///
/// Implementations return the region's current rendered dimensions; the
/// renderer calls this immediately before each paint so stale dimensions
/// can never persist across a layout change.
pub trait Measure {
    /// Current dimensions of the region, [`Geometry::ZERO`] when the
    /// region cannot be measured yet.
    fn measure(&self) -> Geometry;
}

/// The content block of the live terminal, measured on demand.
///
/// Queries the terminal size and reapplies the same layout math the UI
/// uses, so the measurement always agrees with what the next draw will
/// produce. Terminal query failures report as unmeasurable rather than
/// erroring, which the renderer turns into a deferred paint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRegion;

impl Measure for TerminalRegion {
    fn measure(&self) -> Geometry {
        match crossterm::terminal::size() {
            Ok((width, height)) => {
                let frame = Rect::new(0, 0, width, height);
                layout::content_area(frame).into()
            }
            Err(_) => Geometry::ZERO,
        }
    }
}
