//! Service record model
//!
//! Represents one tracked AI expense entry: a subscription, a usage-based
//! line item, or a prepaid credit purchase.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ServiceId;
use super::money::Money;

/// Recurrence pattern of a service record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BillingCycle {
    /// Billed every month
    #[default]
    Monthly,
    /// Billed every year
    Yearly,
    /// A single non-recurring charge
    OneTime,
}

impl BillingCycle {
    /// All cycles in form display order
    pub const ALL: [BillingCycle; 3] = [Self::Monthly, Self::Yearly, Self::OneTime];

    /// Whether this cycle recurs (and therefore has a next billing date)
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Self::OneTime)
    }

    /// Compute the next billing date from a reference date
    ///
    /// Monthly bills in 30 days, yearly in 365. One-time charges have no
    /// next billing date.
    pub fn next_billing_from(&self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Monthly => Some(from + Duration::days(30)),
            Self::Yearly => Some(from + Duration::days(365)),
            Self::OneTime => None,
        }
    }

    /// Suffix shown after a formatted amount ("/month", "/year", "One-time")
    pub fn amount_suffix(&self) -> &'static str {
        match self {
            Self::Monthly => "/month",
            Self::Yearly => "/year",
            Self::OneTime => "One-time",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
            Self::OneTime => write!(f, "One-time"),
        }
    }
}

/// Nature of the charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    /// Recurring subscription plan
    #[default]
    Subscription,
    /// Usage-based (metered) billing
    Usage,
    /// Prepaid credits or tokens
    Credits,
}

impl ServiceCategory {
    /// All categories in form display order
    pub const ALL: [ServiceCategory; 3] = [Self::Subscription, Self::Usage, Self::Credits];
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subscription => write!(f, "Subscription"),
            Self::Usage => write!(f, "Usage-based"),
            Self::Credits => write!(f, "Credits/Tokens"),
        }
    }
}

/// A tracked AI service expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiService {
    /// Unique identifier, stable for the record's lifetime
    pub id: ServiceId,

    /// Free-text label ("ChatGPT Plus", "Claude Pro", ...)
    pub name: String,

    /// Provider label; open string with an "Other" fallback for display
    pub provider: String,

    /// Charge amount, non-negative
    pub amount: Money,

    /// Recurrence pattern
    pub billing_cycle: BillingCycle,

    /// Nature of the charge
    pub category: ServiceCategory,

    /// Next billing date; Some iff the cycle recurs
    pub next_billing: Option<NaiveDate>,
}

impl AiService {
    /// Build a service record from a draft, assigning the given identifier
    pub fn from_draft(id: ServiceId, draft: ServiceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            provider: draft.provider,
            amount: draft.amount,
            billing_cycle: draft.billing_cycle,
            category: draft.category,
            next_billing: draft.next_billing,
        }
    }
}

/// A completed entry-form submission, not yet assigned an identifier
///
/// The store assigns a fresh id on add and preserves the target id on edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub name: String,
    pub provider: String,
    pub amount: Money,
    pub billing_cycle: BillingCycle,
    pub category: ServiceCategory,
    pub next_billing: Option<NaiveDate>,
}

impl ServiceDraft {
    /// Create a draft, computing the next billing date from today
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        amount: Money,
        billing_cycle: BillingCycle,
        category: ServiceCategory,
    ) -> Self {
        let today = Local::now().date_naive();
        Self {
            name: name.into(),
            provider: provider.into(),
            amount,
            billing_cycle,
            category,
            next_billing: billing_cycle.next_billing_from(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_billing_presence() {
        let today = Local::now().date_naive();

        let monthly = BillingCycle::Monthly.next_billing_from(today);
        assert_eq!(monthly, Some(today + Duration::days(30)));

        let yearly = BillingCycle::Yearly.next_billing_from(today);
        assert_eq!(yearly, Some(today + Duration::days(365)));

        assert_eq!(BillingCycle::OneTime.next_billing_from(today), None);
    }

    #[test]
    fn test_draft_next_billing_follows_cycle() {
        for cycle in BillingCycle::ALL {
            let draft = ServiceDraft::new(
                "Test",
                "OpenAI",
                Money::from_dollars(20),
                cycle,
                ServiceCategory::Subscription,
            );
            assert_eq!(draft.next_billing.is_some(), cycle.is_recurring());
        }
    }

    #[test]
    fn test_from_draft_preserves_id() {
        let id = ServiceId::new();
        let draft = ServiceDraft::new(
            "Claude Pro",
            "Anthropic",
            Money::from_dollars(20),
            BillingCycle::Monthly,
            ServiceCategory::Subscription,
        );
        let service = AiService::from_draft(id, draft.clone());

        assert_eq!(service.id, id);
        assert_eq!(service.name, draft.name);
        assert_eq!(service.amount, draft.amount);
    }

    #[test]
    fn test_amount_suffix() {
        assert_eq!(BillingCycle::Monthly.amount_suffix(), "/month");
        assert_eq!(BillingCycle::Yearly.amount_suffix(), "/year");
        assert_eq!(BillingCycle::OneTime.amount_suffix(), "One-time");
    }

    #[test]
    fn test_cycle_serde_names() {
        let json = serde_json::to_string(&BillingCycle::OneTime).unwrap();
        assert_eq!(json, "\"one-time\"");

        let json = serde_json::to_string(&ServiceCategory::Credits).unwrap();
        assert_eq!(json, "\"credits\"");
    }
}
