//! Country list component

use super::super::state::DashboardState;
use super::super::utils::{format_value, parse_color};
use crate::layout::TABLE_COLUMNS;
use crate::render::{Artifact, ViewId};

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Row, Table, TableState};

/// Render the country list with the selected row highlighted and the cursor marked.
pub fn render_table_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let styles = match state.view(ViewId::Table) {
        Artifact::RowStyles { styles } => styles.as_slice(),
        _ => &[],
    };

    let rows = state.rows.iter().enumerate().map(|(i, row)| {
        let mut style = Style::default();
        if let Some(rule) = styles.iter().find(|s| s.condition.row_index == i) {
            if let Some(bg) = parse_color(&rule.background_color) {
                style = style.bg(bg);
            }
            if let Some(fg) = parse_color(&rule.color) {
                style = style.fg(fg);
            }
        }
        Row::new(vec![
            row.country.clone(),
            row.iso.to_string(),
            format_value(row.mpi),
            format_value(row.gii),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(TABLE_COLUMNS.to_vec())
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
    .highlight_symbol("> ")
    .block(
        Block::default()
            .title("COUNTRIES")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    let mut table_state = TableState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(table, area, &mut table_state);
}
