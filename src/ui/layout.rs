//! Frame layout shared by the renderer and the surface sizer.
//!
//! The overlay must cover the content block exactly, so the sizer and the
//! draw path have to agree on where that block is. Both go through the
//! functions here; the layout is a pure function of the frame area.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the scroll-depth percent gutter beside the content block.
pub const GUTTER_WIDTH: u16 = 6;

/// Top-level frame regions.
#[derive(Debug, Clone, Copy)]
pub struct FrameAreas {
    /// Chart panel (left).
    pub chart: Rect,
    /// Content panel including the percent gutter (right).
    pub content_panel: Rect,
    /// Status line.
    pub status: Rect,
    /// Keymap help line.
    pub keymap: Rect,
}

/// Split the frame into its top-level regions.
pub fn split_frame(area: Rect) -> FrameAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    FrameAreas {
        chart: cols[0],
        content_panel: cols[1],
        status: rows[1],
        keymap: rows[2],
    }
}

/// The percent gutter and the content block inside the content panel.
pub fn split_content_panel(panel: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)])
        .split(panel);
    (cols[0], cols[1])
}

/// The content block the heat overlay must cover, for a given frame area.
///
/// This is the measurement entry point for the surface sizer: it applies
/// the same splits the draw path uses, so the overlay geometry always
/// matches the block the next draw will produce.
pub fn content_area(frame: Rect) -> Rect {
    let (_, content) = split_content_panel(split_frame(frame).content_panel);
    content
}
