//! Layout definitions for the TUI
//!
//! Defines the dashboard layout: header, stat tiles, charts, service list,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// App title and subtitle
    pub header: Rect,
    /// Stat tile row
    pub stats: Rect,
    /// Chart row (provider share + trend)
    pub charts: Rect,
    /// Service list
    pub services: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Header
                Constraint::Length(5),  // Stat tiles
                Constraint::Length(12), // Charts
                Constraint::Min(6),     // Service list
                Constraint::Length(1),  // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            stats: vertical[1],
            charts: vertical[2],
            services: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// Split the stat row into three equal tiles
pub struct StatsLayout {
    pub monthly: Rect,
    pub annual: Rect,
    pub active: Rect,
}

impl StatsLayout {
    /// Calculate stat tile layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        Self {
            monthly: chunks[0],
            annual: chunks[1],
            active: chunks[2],
        }
    }
}

/// Split the chart row into provider share and trend halves
pub struct ChartsLayout {
    pub provider: Rect,
    pub trend: Rect,
}

impl ChartsLayout {
    /// Calculate chart layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self {
            provider: chunks[0],
            trend: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
