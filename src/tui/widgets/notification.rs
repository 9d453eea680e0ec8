//! Toast notification widget
//!
//! Displays temporary notifications after each mutation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Informational message
    Info,
    /// A record was added or updated
    Success,
    /// A record was removed
    Destructive,
}

impl NotificationKind {
    /// Get the accent color for this notification kind
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Destructive => Color::Red,
        }
    }

    /// Get the title for this notification kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Destructive => "Deleted",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: std::time::Instant,
    /// Duration to display (in seconds)
    pub duration_secs: u64,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: std::time::Instant::now(),
            duration_secs: 3,
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Create a destructive-style notification
    pub fn destructive(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Destructive)
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();
        let title = self.notification.kind.title();

        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block);

        paragraph.render(area, buf);
    }
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create a new notification queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("Service added to the tracker");
        assert_eq!(n.message, "Service added to the tracker");
        assert_eq!(n.kind, NotificationKind::Success);
    }

    #[test]
    fn test_notification_kinds() {
        assert_eq!(NotificationKind::Success.color(), Color::Green);
        assert_eq!(NotificationKind::Destructive.color(), Color::Red);
        assert_eq!(NotificationKind::Destructive.title(), "Deleted");
    }

    #[test]
    fn test_notification_queue() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::success("First"));
        queue.push(Notification::destructive("Second"));

        assert_eq!(queue.current().unwrap().message, "First");
    }
}
