//! Dialog modules for the TUI
//!
//! Contains modal dialogs for entry, confirmation, and help

pub mod confirm;
pub mod help;
pub mod service_form;
