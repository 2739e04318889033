//! Content panel with the heat overlay composite.
//!
//! Draws the static content block, then blends the renderer's surface
//! pixels over it cell by cell, plus the scroll-depth gutter and the
//! engagement legend. The surface is read-only here; painting it is the
//! renderer's job.

use crate::app::App;
use crate::heat::gradient::{ColorRamp, Rgba};
use crate::ui::{layout, ThemeColors};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Qualitative legend levels, highest intensity first.
const LEGEND_LEVELS: [&str; 4] = ["Very High", "High", "Medium", "Low"];

/// Alpha used for legend swatches, independent of the overlay opacity.
const LEGEND_SWATCH_ALPHA: f32 = 0.8;

/// Draw the content panel: gutter, content block, overlay, legend.
pub(crate) fn draw_content_panel(f: &mut Frame<'_>, panel: Rect, app: &App, colors: &ThemeColors) {
    let (gutter, content) = layout::split_content_panel(panel);

    draw_content(f, content, colors);
    composite_surface(f, content, app, colors);
    draw_gutter(f, gutter, content, colors);

    if app.heat_visible() {
        draw_legend(f, content, app, colors);
    }
}

/// The static content block the overlay is measured against.
fn draw_content(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Release: Heatlens 0.2",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "STG Newsroom - August 1",
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
    ];

    // Filler article body; the overlay is what the reader is looking at.
    let body = "Where do readers actually stop reading? The overlay paints \
                engagement intensity over this page: cool colors where \
                visitors scroll past, warm colors where they linger. ";
    for _ in 0..6 {
        lines.push(Line::from(Span::styled(
            body,
            Style::default().fg(colors.text),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(colors.bg))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Blend the painted surface over the content block, cell for cell.
///
/// The surface was sized against this same region; if a resize landed
/// between paints, the composite clamps to the overlap and the next
/// repaint trigger squares things up.
fn composite_surface(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let surface = app.surface();
    let geometry = surface.geometry();
    let rows = geometry.height.min(area.height as u32);
    let cols = geometry.width.min(area.width as u32);
    let (bg_r, bg_g, bg_b) = colors.bg_rgb();

    for y in 0..rows {
        let Some(pixel) = surface.row_color(y) else {
            continue;
        };
        if pixel.is_transparent() {
            continue;
        }
        let blended = blend(pixel, bg_r, bg_g, bg_b);
        for x in 0..cols {
            let cell_x = area.x + x as u16;
            let cell_y = area.y + y as u16;
            if let Some(cell) = f.buffer_mut().cell_mut((cell_x, cell_y)) {
                cell.set_bg(blended);
            }
        }
    }
}

/// Scroll-depth percent labels beside the content block.
fn draw_gutter(f: &mut Frame<'_>, gutter: Rect, content: Rect, colors: &ThemeColors) {
    if gutter.width < 4 || content.height == 0 {
        return;
    }
    for percent in [0u32, 25, 50, 75, 100] {
        let span = content.height.saturating_sub(1) as u32;
        let y = content.y + (span * percent / 100) as u16;
        let label = format!("{:>4}%", percent);
        for (i, ch) in label.chars().enumerate() {
            let x = gutter.x + i as u16;
            if x < gutter.x + gutter.width {
                if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
                    cell.set_char(ch).set_fg(colors.value);
                }
            }
        }
    }
}

/// Engagement legend, top-right of the content block.
fn draw_legend(f: &mut Frame<'_>, content: Rect, app: &App, colors: &ThemeColors) {
    let width = 16u16;
    let height = LEGEND_LEVELS.len() as u16 + 2;
    if content.width < width + 2 || content.height < height + 1 {
        return;
    }
    let area = Rect {
        x: content.x + content.width - width - 1,
        y: content.y + 1,
        width,
        height,
    };

    f.render_widget(Clear, area);

    let ramp = ColorRamp::for_scheme(app.heat_params().scheme);
    let (bg_r, bg_g, bg_b) = colors.bg_rgb();
    let mut lines = Vec::with_capacity(LEGEND_LEVELS.len());
    for (k, level) in LEGEND_LEVELS.iter().enumerate() {
        // Swatch at relative intensity (3-k)/3, "Very High" down to "Low".
        let t = (LEGEND_LEVELS.len() - 1 - k) as f64 / (LEGEND_LEVELS.len() - 1) as f64;
        let mut swatch = ramp.sample(t);
        swatch.a = LEGEND_SWATCH_ALPHA;
        let swatch_color = blend(swatch, bg_r, bg_g, bg_b);
        lines.push(Line::from(vec![
            Span::styled("██ ", Style::default().fg(swatch_color)),
            Span::styled(*level, Style::default().fg(colors.text)),
        ]));
    }

    let block = Block::default()
        .title(" Engagement ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(block);
    f.render_widget(paragraph, area);
}

/// Alpha-blend a surface pixel over an opaque background.
fn blend(pixel: Rgba, bg_r: u8, bg_g: u8, bg_b: u8) -> Color {
    let a = pixel.a.clamp(0.0, 1.0) as f64;
    let channel = |fg: u8, bg: u8| (fg as f64 * a + bg as f64 * (1.0 - a)).round() as u8;
    Color::Rgb(
        channel(pixel.r, bg_r),
        channel(pixel.g, bg_g),
        channel(pixel.b, bg_b),
    )
}
