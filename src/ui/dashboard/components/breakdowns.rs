//! Gender and sector breakdown components

use super::super::utils::parse_color;
use crate::render::Artifact;
use crate::render::chart::Trace;

use ratatui::Frame;
use ratatui::layout::{Alignment, Direction};
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Wrap};

/// Render a bar figure horizontally, one bar per category.
pub fn render_breakdown_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    artifact: &Artifact,
    fallback_title: &str,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let fig = match artifact {
        Artifact::Figure(fig) => fig,
        _ => {
            let empty = Paragraph::new("Select a country")
                .alignment(Alignment::Center)
                .block(block.title(fallback_title.to_string()));
            f.render_widget(empty, area);
            return;
        }
    };
    block = block.title(
        fig.title()
            .map(|t| t.to_uppercase())
            .unwrap_or_else(|| fallback_title.to_string()),
    );

    let Some(Trace::Bar(trace)) = fig.data.first() else {
        let message = fig
            .layout
            .annotations
            .first()
            .map(|a| a.text.clone())
            .unwrap_or_default();
        let placeholder = Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let color = trace
        .marker
        .as_ref()
        .and_then(|m| parse_color(&m.color))
        .unwrap_or(Color::LightBlue);
    let bars: Vec<Bar> = trace
        .x
        .iter()
        .zip(&trace.y)
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.clone()))
                .value((*value).max(0.0).round() as u64)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}
