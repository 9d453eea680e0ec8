//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(vec![Span::styled(
            "Dashboard Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("j/k or ↑/↓", "Move selection in the service list"),
        key_line("g/G", "Jump to top/bottom of the list"),
        key_line("a or n", "Add a new service"),
        key_line("e or Enter", "Edit the selected service"),
        key_line("d", "Delete the selected service"),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Entry Form Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("Tab/Shift+Tab", "Next/previous field"),
        key_line("↑/↓", "Highlight a provider"),
        key_line("←/→", "Cycle billing and category"),
        key_line("Enter", "Select provider / save"),
        key_line("Esc", "Cancel without saving"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Format a key hint line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Green)),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}
