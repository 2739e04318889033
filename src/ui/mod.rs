//! User interface rendering.

mod chart;
pub mod layout;
mod overlay;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::Frame;

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let areas = layout::split_frame(f.area());

    chart::draw_chart(
        f,
        areas.chart,
        &app.chart,
        app.press_traffic(),
        app.story_traffic(),
        &colors,
    );
    overlay::draw_content_panel(f, areas.content_panel, app, &colors);
    status_bar::draw_status(f, areas.status, &app.status, &colors);
    status_bar::draw_keymap(f, areas.keymap, &colors);
}
