//! TUI views module
//!
//! Contains the dashboard sections: header, stat tiles, charts, service
//! list, and status bar.

pub mod charts;
pub mod header;
pub mod services;
pub mod stats;
pub mod status_bar;

use ratatui::layout::Rect;
use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::DashboardLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = DashboardLayout::new(frame.area());

    header::render(frame, app, layout.header);
    stats::render(frame, app, layout.stats);
    charts::render(frame, app, layout.charts);
    services::render(frame, app, layout.services);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }

    // Toast overlay on top of everything
    if let Some(notification) = app.notifications.current() {
        let area = toast_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddService | ActiveDialog::EditService(_) => {
            dialogs::service_form::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(id) => {
            let message = app
                .store
                .get(id)
                .map(|s| format!("Delete '{}'?", s.name))
                .unwrap_or_else(|| "Delete this service?".to_string());
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::None => {}
    }
}

/// Top-right corner area for toast notifications
fn toast_area(area: Rect) -> Rect {
    let width = 42.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    Rect::new(x, area.y + 1, width, 4.min(area.height))
}
