//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It is the sole owner of the service store and of the "currently editing"
//! selection, which is carried by the active dialog.

use crate::config::Settings;
use crate::models::ServiceId;
use crate::store::ServiceStore;

use super::dialogs::service_form::ServiceFormState;
use super::widgets::{Notification, NotificationQueue};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
///
/// The editing selection lives here: `EditService(id)` is "editing record id",
/// `AddService` is "creating", anything else means no editing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddService,
    EditService(ServiceId),
    ConfirmDelete(ServiceId),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The authoritative service list
    pub store: ServiceStore,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the service list
    pub selected_index: usize,

    /// Entry form state
    pub service_form: ServiceFormState,

    /// Pending toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let store = if settings.seed_examples {
            ServiceStore::with_examples()
        } else {
            ServiceStore::new()
        };

        Self {
            settings,
            store,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            service_form: ServiceFormState::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a toast notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::AddService => {
                // Reset form to create-mode defaults
                self.service_form = ServiceFormState::new();
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::EditService(id) => {
                // Pre-populate the form from the editing target
                if let Some(service) = self.store.get(id) {
                    self.service_form = ServiceFormState::from_service(service);
                }
                self.input_mode = InputMode::Editing;
            }
            _ => {}
        }
    }

    /// Close the current dialog, discarding the editing selection
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// The identifier being edited, if the entry form is in edit mode
    pub fn editing_target(&self) -> Option<ServiceId> {
        match self.active_dialog {
            ActiveDialog::EditService(id) => Some(id),
            _ => None,
        }
    }

    /// The currently selected service record, if any
    pub fn selected_service(&self) -> Option<&crate::models::AiService> {
        self.store.services().get(self.selected_index)
    }

    /// Move selection up in the service list
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down in the service list
    pub fn move_down(&mut self) {
        let max = self.store.len();
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Clamp the selection after the list shrinks
    pub fn clamp_selection(&mut self) {
        let max = self.store.len();
        if self.selected_index >= max {
            self.selected_index = max.saturating_sub(1);
        }
    }

    /// Periodic housekeeping driven by tick events
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_start() {
        let settings = Settings::default();
        let app = App::new(&settings);
        assert_eq!(app.store.len(), 4);
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert!(app.editing_target().is_none());
    }

    #[test]
    fn test_unseeded_start() {
        let settings = Settings {
            seed_examples: false,
            ..Settings::default()
        };
        let app = App::new(&settings);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_open_edit_sets_editing_target() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let id = app.store.services()[1].id;

        app.open_dialog(ActiveDialog::EditService(id));
        assert_eq!(app.editing_target(), Some(id));
        assert_eq!(app.input_mode, InputMode::Editing);

        app.close_dialog();
        assert!(app.editing_target().is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_selection_bounds() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.move_up();
        assert_eq!(app.selected_index, 0);

        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_index, app.store.len() - 1);
    }
}
