//! Service list view
//!
//! Shows one row per tracked service with its derived display text

use ratatui::{
    layout::Constraint,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_amount;
use crate::models::provider_color;
use crate::tui::app::App;

/// Render the service list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Your AI Services ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let services = app.store.services();

    if services.is_empty() {
        let text = Paragraph::new("No AI services yet. Press 'a' to add your first service.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(18),    // Name
        Constraint::Length(14), // Provider
        Constraint::Length(15), // Category
        Constraint::Length(18), // Amount
        Constraint::Length(14), // Next billing
    ];

    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Provider").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Next Billing").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = services
        .iter()
        .map(|service| {
            let next_billing = service
                .next_billing
                .map(|date| date.format(&app.settings.date_format).to_string())
                .unwrap_or_else(|| "-".to_string());

            Row::new(vec![
                Cell::from(service.name.clone()).style(Style::default().fg(Color::White)),
                Cell::from(service.provider.clone())
                    .style(Style::default().fg(provider_color(&service.provider))),
                Cell::from(service.category.to_string())
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(format_amount(service, &app.settings.currency_symbol))
                    .style(Style::default().fg(Color::Green)),
                Cell::from(next_billing).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(services.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
