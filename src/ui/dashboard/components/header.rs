//! Dashboard header component
//!
//! Renders the title and a gauge placing the selected country on the active metric

use super::super::state::DashboardState;
use super::super::utils::format_value;
use crate::consts::cli_consts::{PAGE_SUBTITLE, PAGE_TITLE};
use crate::state::Metric;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and metric gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "{} v{} | {}",
        PAGE_TITLE.to_uppercase(),
        env!("CARGO_PKG_VERSION"),
        PAGE_SUBTITLE
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (label, percent) = gauge_reading(state);
    let gauge_color = match state.view_state.metric() {
        Metric::Mpi => Color::LightRed,
        Metric::Gii => Color::LightBlue,
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent)
        .label(label);
    f.render_widget(gauge, header_chunks[1]);
}

/// Selected value relative to the largest value of the metric.
fn gauge_reading(state: &DashboardState) -> (String, u16) {
    let metric = state.view_state.metric();
    let value_of = |row: &crate::layout::TableRow| match metric {
        Metric::Mpi => row.mpi,
        Metric::Gii => row.gii,
    };
    let Some(iso) = state.view_state.selection() else {
        return (format!("{} - no country selected", metric), 0);
    };
    let Some(row) = state.rows.iter().find(|row| &row.iso == iso) else {
        return (format!("{} - no data for {}", metric, iso), 0);
    };
    let max = state
        .rows
        .iter()
        .filter_map(value_of)
        .fold(0.0_f64, f64::max);
    let value = value_of(row);
    let percent = match value {
        Some(v) if max > 0.0 => ((v / max) * 100.0).round().clamp(0.0, 100.0) as u16,
        _ => 0,
    };
    (
        format!(
            "{} {} for {} (max {})",
            metric,
            format_value(value),
            row.country,
            format_value(Some(max))
        ),
        percent,
    )
}
