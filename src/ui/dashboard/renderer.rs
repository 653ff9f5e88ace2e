//! Dashboard main renderer

use super::components::{breakdowns, choropleth, explore, footer, header, logs, scatter, table};
use super::state::DashboardState;
use crate::render::ViewId;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(main_chunks[1]);

    choropleth::render_choropleth_panel(f, content_chunks[0], state);
    table::render_table_panel(f, content_chunks[1], state);

    let detail_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Fill(1)])
        .split(content_chunks[2]);
    explore::render_explore_panel(f, detail_chunks[0], state);
    scatter::render_scatter_panel(f, detail_chunks[1], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(main_chunks[2]);

    breakdowns::render_breakdown_panel(
        f,
        bottom_chunks[0],
        state.view(ViewId::GenderBreakdown),
        "GENDER BREAKDOWN",
    );
    breakdowns::render_breakdown_panel(
        f,
        bottom_chunks[1],
        state.view(ViewId::SectorBreakdown),
        "SECTOR BREAKDOWN",
    );
    logs::render_logs_panel(f, bottom_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::DEFAULT_LINK_TEMPLATE;
    use crate::dataset::fixtures::{self, iso};
    use crate::dispatch::Dispatcher;
    use crate::render::AssetStore;
    use crate::state::{Metric, ViewState};
    use crate::ui::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn draw(selection: Option<&str>) -> String {
        let dispatcher = Dispatcher::new(
            fixtures::sample(),
            AssetStore::new("/nonexistent-assets"),
            DEFAULT_LINK_TEMPLATE,
            ViewState::new(selection.map(iso), Metric::Mpi),
        );
        let state = DashboardState::new(&dispatcher, Instant::now(), &UIConfig::new(true));
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_dashboard_draws_selected_country() {
        let screen = draw(Some("MLI"));
        assert!(screen.contains("COUNTRIES"));
        assert!(screen.contains("Find your perfect borrower in Mali now."));
        assert!(screen.contains("GENDER BREAKDOWN"));
        assert!(screen.contains("Standalone MPI: 0.457"));
    }

    #[test]
    fn test_dashboard_draws_without_selection() {
        let screen = draw(None);
        assert!(screen.contains("No country selected"));
    }
}
