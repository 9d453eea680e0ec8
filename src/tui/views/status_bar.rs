//! Status bar view
//!
//! Shows the spending totals and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::reports::SpendingSummary;
use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = SpendingSummary::compute(app.store.services());
    let symbol = &app.settings.currency_symbol;

    let mut spans = vec![
        Span::styled(" Monthly: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.monthly_total.format_with_symbol(symbol),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Annual: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.annualized_total.format_with_symbol(symbol),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} services", summary.active_count),
            Style::default().fg(Color::Cyan),
        ),
    ];

    // Key hints (right-aligned), swapped while the entry form is open
    let hints = match app.input_mode {
        InputMode::Normal => " a:Add  e:Edit  d:Delete  q:Quit  ?:Help ",
        InputMode::Editing => " Tab:Next field  Enter:Save  Esc:Cancel ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
