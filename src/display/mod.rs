//! Terminal display formatting for CLI output

pub mod service;

pub use service::{format_amount, format_service_table};
