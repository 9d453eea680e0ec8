//! Spending charts
//!
//! Left: per-provider share of monthly-equivalent spending, one colored bar
//! row per provider (the terminal rendition of the provider pie chart).
//! Right: the spending trend bar chart, which draws the fixed placeholder
//! series from [`TrendSeries::placeholder`]. That series is demo decoration,
//! not real history.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};

use crate::models::palette_color;
use crate::reports::{ProviderBreakdown, TrendSeries};
use crate::tui::app::App;
use crate::tui::layout::ChartsLayout;

/// Render the chart row
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ChartsLayout::new(area);

    render_provider_chart(frame, app, layout.provider);
    render_trend_chart(frame, layout.trend);
}

/// Render the per-provider share chart
fn render_provider_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Spending by Provider ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let breakdown = ProviderBreakdown::compute(app.store.services());

    if breakdown.entries.is_empty() {
        let text = Paragraph::new("No services tracked.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // name + bar + percentage + amount per row
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_budget = inner_width.saturating_sub(34).max(8);
    let symbol = &app.settings.currency_symbol;

    let mut lines = vec![Line::from(Span::styled(
        "Monthly-equivalent breakdown",
        Style::default().fg(Color::DarkGray),
    ))];

    for (index, entry) in breakdown.entries.iter().enumerate() {
        let color = palette_color(index);
        let bar_len = ((entry.percentage / 100.0) * bar_budget as f64).round() as usize;

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<13}", truncate(&entry.provider, 12)),
                Style::default().fg(color),
            ),
            Span::styled("█".repeat(bar_len.max(1)), Style::default().fg(color)),
            Span::styled(
                format!(" {:>5.1}%", entry.percentage),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {}{:.2}", symbol, entry.monthly_equivalent),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the trend bar chart (fixed demo series)
fn render_trend_chart(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Spending Trend (demo data) ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let series = TrendSeries::placeholder();
    let data: Vec<(&str, u64)> = series
        .points
        .iter()
        .map(|point| (point.month, point.spending))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(&data)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(chart, area);
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
