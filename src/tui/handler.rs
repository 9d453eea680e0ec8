//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state, and dispatches the resulting commands to the store.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::store::ServiceCommand;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Dialogs capture all input while open
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys on the dashboard (no dialog open)
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        // Help
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }
        KeyCode::Char('g') => {
            app.selected_index = 0;
        }
        KeyCode::Char('G') => {
            app.selected_index = app.store.len().saturating_sub(1);
        }

        // Add new service
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::AddService);
        }

        // Edit selected service
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(service) = app.selected_service() {
                let id = service.id;
                app.open_dialog(ActiveDialog::EditService(id));
            }
        }

        // Delete selected service (with confirmation)
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(service) = app.selected_service() {
                let id = service.id;
                app.open_dialog(ActiveDialog::ConfirmDelete(id));
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.store.dispatch(ServiceCommand::Delete(id))?;
                app.clamp_selection();
                app.notify(Notification::destructive(
                    "The AI service has been removed from your tracker.",
                ));
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::AddService | ActiveDialog::EditService(_) => {
            dialogs::service_form::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_opens_form() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddService);
    }

    #[test]
    fn test_edit_targets_selected_service() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_key_event(&mut app, key(KeyCode::Down)).unwrap();
        let expected = app.store.services()[1].id;

        handle_key_event(&mut app, key(KeyCode::Char('e'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::EditService(expected));
    }

    #[test]
    fn test_delete_flow_with_confirmation() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let before = app.store.len();
        let target = app.store.services()[0].id;

        handle_key_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDelete(target));

        handle_key_event(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.store.len(), before - 1);
        assert!(app.store.get(target).is_none());
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn test_delete_declined_leaves_list() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let before = app.store.len();

        handle_key_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();

        assert_eq!(app.store.len(), before);
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_form_submit_without_name_stays_open() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let before = app.store.len();

        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        // Name left empty; try to save immediately
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.len(), before);
        assert_eq!(app.active_dialog, ActiveDialog::AddService);
    }

    #[test]
    fn test_full_add_flow_through_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let before = app.store.len();

        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        for c in "Sora".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        // Pick the highlighted provider (OpenAI)
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        for c in "20".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.len(), before + 1);
        assert_eq!(app.active_dialog, ActiveDialog::None);
        let added = app.store.services().last().unwrap();
        assert_eq!(added.name, "Sora");
        assert_eq!(added.provider, "OpenAI");
    }
}
