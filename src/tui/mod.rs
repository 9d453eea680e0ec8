//! Terminal User Interface module
//!
//! This module provides the interactive dashboard for aispend using ratatui:
//! stat tiles, spending charts, the service list, and dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
