//! Core data models for aispend
//!
//! This module contains the data structures that represent the expense
//! tracking domain: service records, billing cycles, money, and provider
//! display lookup.

pub mod ids;
pub mod money;
pub mod provider;
pub mod service;

pub use ids::ServiceId;
pub use money::Money;
pub use provider::{palette_color, provider_color, KNOWN_PROVIDERS};
pub use service::{AiService, BillingCycle, ServiceCategory, ServiceDraft};
