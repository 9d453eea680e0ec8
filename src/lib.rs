//! aispend - Terminal dashboard for AI service expenses
//!
//! This library provides the core functionality for aispend, a single-user
//! tracker for recurring and one-time spending on AI services: subscriptions,
//! usage-based billing, and prepaid credits. Tracked state lives in memory
//! for one session; only display preferences are persisted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (service records, money, provider lookup)
//! - `store`: The in-memory service list and its command dispatch
//! - `reports`: Pure aggregation over a service list snapshot
//! - `display`: Plain terminal formatting for CLI output
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use aispend::config::{paths::TrackerPaths, settings::Settings};
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;
pub mod tui;

pub use error::TrackerError;
