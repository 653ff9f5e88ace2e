//! Scatter panel component
//!
//! Draws the GII vs. MPI figure as a braille chart: every country in the base color, the
//! selected one on top in the highlight color.

use super::super::state::DashboardState;
use super::super::utils::parse_color;
use crate::render::chart::{Figure, ScatterTrace, Trace};
use crate::render::{Artifact, ViewId};

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph, Wrap};

fn points(trace: &ScatterTrace) -> Vec<(f64, f64)> {
    trace
        .x
        .iter()
        .zip(&trace.y)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect()
}

fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((hi - lo) * 0.05).max(0.01);
    [lo - pad, hi + pad]
}

pub fn render_scatter_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("GII VS. MPI")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let fig = match state.view(ViewId::Scatter) {
        Artifact::Figure(fig) if !fig.is_placeholder() => fig,
        Artifact::Figure(fig) => {
            let message = fig
                .layout
                .annotations
                .first()
                .map(|a| a.text.clone())
                .unwrap_or_default();
            f.render_widget(message_paragraph(message, block), area);
            return;
        }
        _ => {
            f.render_widget(message_paragraph("Select a country".to_string(), block), area);
            return;
        }
    };
    render_chart(f, area, fig, block);
}

fn message_paragraph(message: String, block: Block<'_>) -> Paragraph<'_> {
    Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
}

fn render_chart(f: &mut Frame, area: ratatui::layout::Rect, fig: &Figure, block: Block<'_>) {
    let series: Vec<(Vec<(f64, f64)>, Color)> = fig
        .data
        .iter()
        .filter_map(|trace| match trace {
            Trace::Scatter(s) => Some((
                points(s),
                parse_color(&s.marker.color).unwrap_or(Color::Gray),
            )),
            _ => None,
        })
        .collect();

    let x_bounds = bounds(series.iter().flat_map(|(pts, _)| pts.iter().map(|p| p.0)));
    let y_bounds = bounds(series.iter().flat_map(|(pts, _)| pts.iter().map(|p| p.1)));

    let datasets = series
        .iter()
        .map(|(pts, color)| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(*color))
                .data(pts)
        })
        .collect::<Vec<_>>();

    let axis_title = |axis: &Option<crate::render::chart::Axis>| {
        axis.as_ref()
            .and_then(|a| a.title.clone())
            .unwrap_or_default()
    };
    let axis_labels = |b: [f64; 2]| vec![format!("{:.2}", b[0]), format!("{:.2}", b[1])];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(axis_title(&fig.layout.xaxis))
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(axis_title(&fig.layout.yaxis))
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_skip_missing_coordinates() {
        let trace = ScatterTrace {
            x: vec![Some(0.1), None, Some(0.3)],
            y: vec![Some(0.5), Some(0.6), None],
            text: vec![],
            mode: "markers".to_string(),
            opacity: 0.7,
            marker: crate::render::chart::Marker::color("#999999"),
        };
        assert_eq!(points(&trace), vec![(0.1, 0.5)]);
    }

    #[test]
    fn test_bounds_pad_and_default() {
        assert_eq!(bounds(std::iter::empty()), [0.0, 1.0]);
        let [lo, hi] = bounds([0.2, 0.4].into_iter());
        assert!(lo < 0.2 && hi > 0.4);
    }
}
