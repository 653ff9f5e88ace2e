//! Choropleth panel component
//!
//! Terminals have no map, so the choropleth figure is drawn as a ranked list with each
//! country's value shaded on the figure's colorscale.

use super::super::state::DashboardState;
use super::super::utils::{format_value, scale_color};
use crate::render::chart::Trace;
use crate::render::{Artifact, ViewId};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_choropleth_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let (title, lines) = match state.view(ViewId::Choropleth) {
        Artifact::Figure(fig) => {
            let title = fig.title().unwrap_or("Choropleth").to_uppercase();
            let lines = match fig.data.first() {
                Some(Trace::Choropleth(trace)) => {
                    let selected = state.view_state.selection().map(|iso| iso.as_str());
                    let max = trace.z.iter().flatten().fold(0.0_f64, |a, b| a.max(*b));
                    let mut ranked: Vec<(&str, &str, Option<f64>)> = trace
                        .locations
                        .iter()
                        .zip(&trace.text)
                        .zip(&trace.z)
                        .map(|((iso, name), z)| (iso.as_str(), name.as_str(), *z))
                        .collect();
                    // Highest first; countries without a value sink to the bottom.
                    ranked.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
                    ranked
                        .into_iter()
                        .map(|(iso, name, z)| {
                            let shade = match z {
                                Some(v) if max > 0.0 => scale_color(&trace.colorscale, v / max),
                                _ => Color::DarkGray,
                            };
                            let mut label_style = Style::default();
                            if Some(iso) == selected {
                                label_style = label_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                            }
                            Line::from(vec![
                                Span::styled("██ ", Style::default().fg(shade)),
                                Span::styled(format!("{} {:<18.18}", iso, name), label_style),
                                Span::styled(format_value(z), Style::default().fg(Color::Gray)),
                            ])
                        })
                        .collect()
                }
                _ => vec![Line::from("No data")],
            };
            (title, lines)
        }
        _ => ("CHOROPLETH".to_string(), vec![Line::from("No data")]),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
