//! Explore panel component
//!
//! Renders the selected country's header, the borrower link, its mpi.csv value and the
//! image slots

use super::super::state::DashboardState;
use crate::render::{Artifact, ImageSource, ViewId};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn image_line(label: &str, artifact: &Artifact) -> Line<'static> {
    let (text, color) = match artifact {
        Artifact::Image(image) => match &image.source {
            ImageSource::Asset { path } => (
                format!("{}: {} ({} bytes)", label, path.display(), image.bytes),
                Color::Green,
            ),
            ImageSource::Placeholder => (format!("{}: placeholder", label), Color::Yellow),
        },
        _ => (format!("{}: -", label), Color::DarkGray),
    };
    Line::from(Span::styled(text, Style::default().fg(color)))
}

pub fn render_explore_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    let header = match state.view(ViewId::SubplotHeader) {
        Artifact::Text { text } => text.clone(),
        _ => "No country selected".to_string(),
    };
    lines.push(Line::from(Span::styled(
        header,
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    )));

    if let Artifact::Link { text, href } = state.view(ViewId::Link) {
        lines.push(Line::from(Span::raw(text.clone())));
        lines.push(Line::from(Span::styled(
            href.clone(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    let mpi = match state.selected_mpi() {
        Some(Some(value)) => format!("{:.3}", value),
        Some(None) => "no value".to_string(),
        None => "-".to_string(),
    };
    lines.push(Line::from(Span::raw(format!("Standalone MPI: {}", mpi))));

    lines.push(image_line("Photo", state.view(ViewId::Image)));
    lines.push(image_line("Word cloud", state.view(ViewId::Wordcloud)));

    let uptime = state.start_time.elapsed().as_secs();
    lines.push(Line::from(Span::styled(
        format!("Uptime: {}m {}s", uptime / 60, uptime % 60),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title("EXPLORE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
