//! Line chart state: dataset selection and per-series styling.
//!
//! The chart itself is a thin wrapper over the ratatui `Chart` widget
//! (see `ui::chart`); this module only owns the user-adjustable state
//! that feeds it.

use ratatui::style::Color;

/// Which traffic dataset the chart displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetSelection {
    /// Press-release traffic only.
    #[default]
    Press,
    /// Story traffic only.
    Story,
    /// Both datasets overlaid.
    Both,
}

impl DatasetSelection {
    /// Get the next selection in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Press => Self::Story,
            Self::Story => Self::Both,
            Self::Both => Self::Press,
        }
    }

    /// Get the selection name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Press => "Press",
            Self::Story => "Story",
            Self::Both => "Both",
        }
    }
}

/// The four chart series whose colors the user can adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSlot {
    /// Page views, press dataset.
    PvPress,
    /// Unique users, press dataset.
    UuPress,
    /// Page views, story dataset.
    PvStory,
    /// Unique users, story dataset.
    UuStory,
}

impl SeriesSlot {
    /// All slots in display order.
    pub const ALL: [Self; 4] = [Self::PvPress, Self::UuPress, Self::PvStory, Self::UuStory];

    /// Get the series label.
    pub fn name(self) -> &'static str {
        match self {
            Self::PvPress => "PV (press)",
            Self::UuPress => "UU (press)",
            Self::PvStory => "PV (story)",
            Self::UuStory => "UU (story)",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::PvPress => 0,
            Self::UuPress => 1,
            Self::PvStory => 2,
            Self::UuStory => 3,
        }
    }
}

/// An adjustable series color, kept as raw channels so it can round-trip
/// to a HEX string for the clipboard export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl SeriesColor {
    /// `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<SeriesColor> for Color {
    fn from(c: SeriesColor) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// Preset colors each series slot cycles through.
const PRESETS: [SeriesColor; 8] = [
    SeriesColor { r: 0x3b, g: 0x82, b: 0xf6 }, // blue
    SeriesColor { r: 0x10, g: 0xb9, b: 0x81 }, // emerald
    SeriesColor { r: 0xa8, g: 0x55, b: 0xf7 }, // purple
    SeriesColor { r: 0xf5, g: 0x9e, b: 0x0b }, // amber
    SeriesColor { r: 0xef, g: 0x44, b: 0x44 }, // red
    SeriesColor { r: 0x06, g: 0xb6, b: 0xd4 }, // cyan
    SeriesColor { r: 0xec, g: 0x48, b: 0x99 }, // pink
    SeriesColor { r: 0x84, g: 0xcc, b: 0x16 }, // lime
];

/// User-adjustable chart state.
#[derive(Debug, Clone)]
pub struct ChartState {
    /// Selected dataset.
    pub dataset: DatasetSelection,
    colors: [SeriesColor; 4],
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartState {
    /// Create chart state with the default dataset and colors.
    pub fn new() -> Self {
        Self {
            dataset: DatasetSelection::default(),
            colors: [PRESETS[0], PRESETS[1], PRESETS[2], PRESETS[3]],
        }
    }

    /// Cycle to the next dataset.
    pub fn cycle_dataset(&mut self) {
        self.dataset = self.dataset.next();
    }

    /// Current color of a series slot.
    pub fn color(&self, slot: SeriesSlot) -> SeriesColor {
        self.colors[slot.index()]
    }

    /// Cycle a series slot to the next preset color.
    pub fn cycle_color(&mut self, slot: SeriesSlot) -> SeriesColor {
        let current = self.colors[slot.index()];
        let pos = PRESETS.iter().position(|&p| p == current).unwrap_or(0);
        let next = PRESETS[(pos + 1) % PRESETS.len()];
        self.colors[slot.index()] = next;
        next
    }

    /// The full color set as copyable text, one `label: #hex` line per
    /// series.
    pub fn hex_summary(&self) -> String {
        let mut out = String::new();
        for slot in SeriesSlot::ALL {
            out.push_str(slot.name());
            out.push_str(": ");
            out.push_str(&self.color(slot).hex());
            out.push('\n');
        }
        out
    }
}
