//! Traffic line chart panel.
//!
//! A thin wrapper over the ratatui `Chart` widget: the chart state picks
//! which tabular series are shown and what color each gets; everything
//! else is the widget's business.

use crate::chart::{ChartState, DatasetSelection, SeriesSlot};
use crate::data::TrafficPoint;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Draw the traffic chart for the current dataset selection.
pub(crate) fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    state: &ChartState,
    press: &[TrafficPoint],
    story: &[TrafficPoint],
    colors: &ThemeColors,
) {
    let press_pv = to_points(press, |p| p.pv);
    let press_uu = to_points(press, |p| p.uu);
    let story_pv = to_points(story, |p| p.pv);
    let story_uu = to_points(story, |p| p.uu);

    // UU series are listed first so the PV lines draw on top of them.
    let mut series: Vec<(SeriesSlot, &[(f64, f64)])> = Vec::new();
    match state.dataset {
        DatasetSelection::Press => {
            series.push((SeriesSlot::UuPress, &press_uu));
            series.push((SeriesSlot::PvPress, &press_pv));
        }
        DatasetSelection::Story => {
            series.push((SeriesSlot::UuStory, &story_uu));
            series.push((SeriesSlot::PvStory, &story_pv));
        }
        DatasetSelection::Both => {
            series.push((SeriesSlot::UuPress, &press_uu));
            series.push((SeriesSlot::UuStory, &story_uu));
            series.push((SeriesSlot::PvPress, &press_pv));
            series.push((SeriesSlot::PvStory, &story_pv));
        }
    }

    let datasets: Vec<Dataset<'_>> = series
        .iter()
        .map(|&(slot, data)| {
            Dataset::default()
                .name(slot.name())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::from(state.color(slot))))
                .data(data)
        })
        .collect();

    let y_max = series
        .iter()
        .flat_map(|(_, data)| data.iter().map(|(_, y)| *y))
        .fold(0.0_f64, f64::max);
    // 15% headroom so the peak does not clip the border.
    let y_max = (y_max * 1.15).max(1.0);

    let days = press.len().max(story.len());
    let x_max = days.saturating_sub(1).max(1) as f64;

    let label_at = |i: usize| -> String {
        press
            .get(i)
            .or_else(|| story.get(i))
            .map(|p| p.label.clone())
            .unwrap_or_else(|| i.to_string())
    };
    let x_labels = vec![label_at(0), label_at(days / 2), label_at(days.saturating_sub(1))];

    let x_axis = Axis::default()
        .title("date")
        .style(Style::default().fg(colors.label))
        .bounds([0.0, x_max])
        .labels(x_labels);

    let y_axis = Axis::default()
        .title("count")
        .style(Style::default().fg(colors.label))
        .bounds([0.0, y_max])
        .labels(vec![
            "0".to_string(),
            format!("{:.0}", y_max / 2.0),
            format!("{:.0}", y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" Traffic - {} ", state.dataset.name()))
                .title_style(Style::default().fg(colors.heading)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn to_points(points: &[TrafficPoint], value: impl Fn(&TrafficPoint) -> f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, value(p)))
        .collect()
}
