//! Stat tiles
//!
//! Three tiles: Monthly Spending, Annual Cost, Active Services. The trend
//! badge next to each value is static placeholder decoration carried over
//! from the product design; it is not computed from tracked data.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reports::SpendingSummary;
use crate::tui::app::App;
use crate::tui::layout::StatsLayout;

/// Render the stat tile row
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = StatsLayout::new(area);
    let summary = SpendingSummary::compute(app.store.services());
    let symbol = &app.settings.currency_symbol;

    render_tile(
        frame,
        layout.monthly,
        "Monthly Spending",
        &summary.monthly_total.format_with_symbol(symbol),
        "+12%",
    );
    render_tile(
        frame,
        layout.annual,
        "Annual Cost",
        &summary.annualized_total.format_with_symbol(symbol),
        "+8%",
    );
    render_tile(
        frame,
        layout.active,
        "Active Services",
        &summary.active_count.to_string(),
        "+2",
    );
}

/// Render one stat tile
fn render_tile(frame: &mut Frame, area: Rect, title: &str, value: &str, trend: &'static str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::DarkGray))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        // Static decoration, not derived from the tracked services
        Line::from(vec![
            Span::styled(format!("▲ {}", trend), Style::default().fg(Color::Green)),
            Span::styled(" from last month", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
