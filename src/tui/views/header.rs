//! Dashboard header
//!
//! Shows the app title, subtitle, and active service count

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" AI Cost Tracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let count = app.store.len();
    let count_label = if count == 1 {
        "1 active service".to_string()
    } else {
        format!("{} active services", count)
    };

    let line = Line::from(vec![
        Span::styled(
            "Track all your AI expenses in one place",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  │  "),
        Span::styled(count_label, Style::default().fg(Color::Yellow)),
    ]);

    let paragraph = Paragraph::new(vec![line, Line::from("")]).block(block);

    frame.render_widget(paragraph, area);
}
